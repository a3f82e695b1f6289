//! Comment CRUD handlers, scoped under a post.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_shared::dto::{CommentBody, CommentCreatedResponse, CommentResponse};
use chirp_shared::{ErrorBody, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts/{id}/comments
#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments under the post", body = [CommentResponse]),
        (status = 404, description = "Post missing or no comments", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "comments"
)]
pub async fn list_comments(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.list_for_post(path.into_inner()).await?;
    if comments.is_empty() {
        return Err(AppError::NotFound(
            "No comments found for this post".to_string(),
        ));
    }

    let comments: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /posts/{id}/comments
#[utoipa::path(
    post,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = CommentBody,
    responses(
        (status = 201, description = "Comment created", body = CommentCreatedResponse),
        (status = 400, description = "Missing content", body = ErrorBody),
        (status = 404, description = "Post not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "comments"
)]
pub async fn create_comment(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<CommentBody>,
) -> AppResult<HttpResponse> {
    let content = body.into_inner().content.unwrap_or_default();
    if content.is_empty() {
        return Err(AppError::BadRequest(
            "Comment content is required".to_string(),
        ));
    }

    let comment = state.comments.create(path.into_inner(), content).await?;

    Ok(HttpResponse::Created().json(CommentCreatedResponse {
        message: "Comment created successfully".to_string(),
        comment: comment.into(),
    }))
}

/// GET /posts/{post_id}/comment/{comment_id}
#[utoipa::path(
    get,
    path = "/posts/{post_id}/comment/{comment_id}",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "Comment not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "comments"
)]
pub async fn get_comment(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let comment = state.comments.get_scoped(post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

/// DELETE /posts/{post_id}/comment/{comment_id}
#[utoipa::path(
    delete,
    path = "/posts/{post_id}/comment/{comment_id}",
    params(
        ("post_id" = Uuid, Path, description = "Post id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 404, description = "Comment not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "comments"
)]
pub async fn delete_comment(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    state.comments.delete_scoped(post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Comment deleted successfully")))
}

/// DELETE /posts/{id}/comments
#[utoipa::path(
    delete,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments deleted", body = MessageResponse),
        (status = 404, description = "Post not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "comments"
)]
pub async fn delete_all_comments(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.comments.delete_for_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "All comments for this post deleted successfully",
    )))
}
