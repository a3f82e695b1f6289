//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST surface. The document is served as JSON at `/docs.json` and
//! rendered by Swagger UI under `/docs`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use chirp_shared::dto::{
    CommentBody, CommentCreatedResponse, CommentResponse, PostBody, PostCreatedResponse,
    PostResponse, SignInRequest, SignUpRequest, TokenResponse, UpdateUserRequest,
    UpdateUsersRequest, UserResponse, UserUpdateItem,
};
use chirp_shared::{ErrorBody, MessageResponse};

use crate::handlers::health::HealthResponse;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Chirp API",
        description = "API endpoints for a small social network: users, posts, and comments behind JWT bearer authentication.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::handlers::auth::sign_up,
        crate::handlers::auth::sign_in,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::update_users,
        crate::handlers::users::delete_user,
        crate::handlers::users::delete_all_users,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::get_post,
        crate::handlers::posts::create_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::posts::delete_all_posts,
        crate::handlers::comments::list_comments,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::get_comment,
        crate::handlers::comments::delete_comment,
        crate::handlers::comments::delete_all_comments,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        SignUpRequest,
        SignInRequest,
        TokenResponse,
        UserResponse,
        UpdateUserRequest,
        UpdateUsersRequest,
        UserUpdateItem,
        PostBody,
        PostResponse,
        PostCreatedResponse,
        CommentBody,
        CommentResponse,
        CommentCreatedResponse,
        MessageResponse,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "auth", description = "Registration and sign-in"),
        (name = "users", description = "User management"),
        (name = "posts", description = "Posts owned by users"),
        (name = "comments", description = "Comments under posts"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;
