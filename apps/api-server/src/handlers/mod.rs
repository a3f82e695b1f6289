//! HTTP handlers and route configuration.

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Public auth routes
        .route("/signup", web::post().to(auth::sign_up))
        .route("/signin", web::post().to(auth::sign_in))
        // Users
        .service(
            web::resource("/users")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user))
                .route(web::put().to(users::update_users))
                .route(web::delete().to(users::delete_all_users)),
        )
        .service(
            web::resource("/users/{id}")
                .route(web::get().to(users::get_user))
                .route(web::put().to(users::update_user))
                .route(web::delete().to(users::delete_user)),
        )
        // Posts
        .route("/users/{id}/post", web::post().to(posts::create_post))
        .route(
            "/users/{user_id}/post/{post_id}",
            web::delete().to(posts::delete_post),
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::delete().to(posts::delete_all_posts)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post)),
        )
        // Comments
        .service(
            web::resource("/posts/{id}/comments")
                .route(web::get().to(comments::list_comments))
                .route(web::post().to(comments::create_comment))
                .route(web::delete().to(comments::delete_all_comments)),
        )
        .service(
            web::resource("/posts/{post_id}/comment/{comment_id}")
                .route(web::get().to(comments::get_comment))
                .route(web::delete().to(comments::delete_comment)),
        );
}
