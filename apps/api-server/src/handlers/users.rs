//! User CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_core::services::UserUpdate;
use chirp_shared::dto::{SignUpRequest, UpdateUserRequest, UpdateUsersRequest, UserResponse};
use chirp_shared::{ErrorBody, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 404, description = "No users found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn list_users(_identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    if users.is_empty() {
        return Err(AppError::NotFound("No users found".to_string()));
    }

    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn get_user(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn create_user(
    _identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email, and password are required".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    let user = state.users.create(name, email, &password).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Neither name nor email given", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn update_user(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let name = req.name.filter(|s| !s.is_empty());
    let email = req.email.filter(|s| !s.is_empty());
    if name.is_none() && email.is_none() {
        return Err(AppError::BadRequest("Name or email is required".to_string()));
    }

    state.users.update(path.into_inner(), name, email).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User updated successfully")))
}

/// PUT /users - best-effort batch update.
///
/// Elements are applied independently; an invalid or unknown id is
/// reported in the logs and skipped without aborting the rest.
#[utoipa::path(
    put,
    path = "/users",
    request_body = UpdateUsersRequest,
    responses(
        (status = 200, description = "Batch applied", body = MessageResponse),
        (status = 400, description = "Missing or empty users array", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn update_users(
    _identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<UpdateUsersRequest>,
) -> AppResult<HttpResponse> {
    let items = body.into_inner().users.unwrap_or_default();
    if items.is_empty() {
        return Err(AppError::BadRequest("Invalid input".to_string()));
    }

    let updates: Vec<UserUpdate> = items
        .into_iter()
        .filter_map(|item| match Uuid::parse_str(&item.id) {
            Ok(id) => Some(UserUpdate {
                id,
                name: item.name.filter(|s| !s.is_empty()),
                email: item.email.filter(|s| !s.is_empty()),
            }),
            Err(_) => {
                tracing::warn!(user_id = %item.id, "Skipping user update with unparsable id");
                None
            }
        })
        .collect();

    state.users.update_many(updates).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Users updated successfully")))
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn delete_user(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}

/// DELETE /users
#[utoipa::path(
    delete,
    path = "/users",
    responses(
        (status = 200, description = "All users deleted", body = MessageResponse)
    ),
    security(("BearerAuth" = [])),
    tag = "users"
)]
pub async fn delete_all_users(
    _identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    state.users.delete_all().await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("All users deleted successfully")))
}
