//! Sign-up and sign-in handlers.

use actix_web::{HttpResponse, web};

use chirp_shared::ErrorBody;
use chirp_shared::dto::{SignInRequest, SignUpRequest, TokenResponse, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /signup
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    ),
    tag = "auth"
)]
pub async fn sign_up(
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

    let user = state.auth.sign_up(name, email, &password).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /signin
#[utoipa::path(
    post,
    path = "/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "auth"
)]
pub async fn sign_in(
    state: web::Data<AppState>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let token = state.auth.sign_in(&email, &password).await?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
