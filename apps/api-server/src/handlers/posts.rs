//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_shared::dto::{PostBody, PostCreatedResponse, PostResponse};
use chirp_shared::{ErrorBody, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All posts", body = [PostResponse]),
        (status = 404, description = "No posts found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn list_posts(_identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    if posts.is_empty() {
        return Err(AppError::NotFound("No posts found".to_string()));
    }

    let posts: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn get_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /users/{id}/post
#[utoipa::path(
    post,
    path = "/users/{id}/post",
    params(("id" = Uuid, Path, description = "Id of the authoring user")),
    request_body = PostBody,
    responses(
        (status = 201, description = "Post created", body = PostCreatedResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn create_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = req.title.unwrap_or_default();
    let description = req.description.unwrap_or_default();
    if title.is_empty() || description.is_empty() {
        return Err(AppError::BadRequest(
            "Title and description are required".to_string(),
        ));
    }

    let post = state
        .posts
        .create(path.into_inner(), title, description)
        .await?;

    Ok(HttpResponse::Created().json(PostCreatedResponse {
        message: "Post created successfully".to_string(),
        post: post.into(),
    }))
}

/// PUT /posts/{id}
#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = PostBody,
    responses(
        (status = 200, description = "Post updated", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn update_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = req.title.filter(|s| !s.is_empty());
    let description = req.description.filter(|s| !s.is_empty());

    state
        .posts
        .update(path.into_inner(), title, description)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated successfully")))
}

/// DELETE /users/{user_id}/post/{post_id}
///
/// Deletes the post only when it belongs to the given user; a mismatched
/// pair removes nothing.
#[utoipa::path(
    delete,
    path = "/users/{user_id}/post/{post_id}",
    params(
        ("user_id" = Uuid, Path, description = "Owning user id"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "User or post not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn delete_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();

    state.posts.delete_scoped(user_id, post_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

/// DELETE /posts
#[utoipa::path(
    delete,
    path = "/posts",
    responses(
        (status = 200, description = "All posts deleted", body = MessageResponse)
    ),
    security(("BearerAuth" = [])),
    tag = "posts"
)]
pub async fn delete_all_posts(
    _identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    state.posts.delete_all().await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Posts deleted successfully")))
}
