//! Bearer authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use chirp_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated user identity.
///
/// Extracting this in a handler requires a valid bearer token whose user
/// still exists; otherwise the request fails with 401 before the handler
/// body runs.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    Ok(token.to_string())
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>() else {
                tracing::error!("AppState not found in app data");
                return Err(AppError::Internal("Server configuration error".to_string()));
            };

            let token = bearer_token(&req)?;
            let claims = state.tokens.validate_token(&token)?;

            let user = state
                .user_repo
                .find_by_id(claims.user_id)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?;

            match user {
                Some(user) => Ok(Identity { user_id: user.id }),
                None => Err(AppError::from(AuthError::UnknownUser)),
            }
        })
    }
}
