//! End-to-end API tests over an in-memory SQLite database.
//!
//! Each test assembles the full application (routes, bearer gate, services,
//! repositories, migrations) against its own `sqlite::memory:` connection.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use api_server::handlers::configure_routes;
use api_server::state::AppState;
use chirp_infra::JwtConfig;
use chirp_infra::database::DatabaseConfig;

async fn test_state() -> AppState {
    // A single pooled connection keeps every query on the same in-memory db.
    let database = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let jwt = JwtConfig {
        secret: "integration-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "chirp-test".to_string(),
    };

    AppState::new(&database, jwt)
        .await
        .expect("in-memory database should initialize")
}

trait TestApp:
    Service<Request, Response = ServiceResponse<Self::Body>, Error = actix_web::Error>
{
    type Body: MessageBody;
}

impl<S, B> TestApp for S
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    type Body = B;
}

async fn spawn_app() -> impl TestApp {
    test::init_service(
        App::new()
            .app_data(web::Data::new(test_state().await))
            .configure(configure_routes),
    )
    .await
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

/// POST /signup and return the created user body.
async fn signup(app: &impl TestApp, name: &str, email: &str, password: &str) -> Value {
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": name, "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

/// POST /signin and return the bearer token.
async fn signin(app: &impl TestApp, email: &str, password: &str) -> String {
    let req = test::TestRequest::post()
        .uri("/signin")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().expect("token field").to_string()
}

/// POST /users/{id}/post and return the created post body.
async fn create_post(app: &impl TestApp, token: &str, user_id: &str) -> Value {
    let req = test::TestRequest::post()
        .uri(&format!("/users/{user_id}/post"))
        .insert_header(bearer(token))
        .set_json(json!({ "title": "T", "description": "D" }))
        .to_request();
    let resp = test::call_service(app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["post"].clone()
}

#[actix_web::test]
async fn signup_persists_a_retrievable_user_without_leaking_the_hash() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    assert_eq!(user["email"], "ada@example.com");
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());

    let token = signin(&app, "ada@example.com", "s3cret").await;
    let user_id = user["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/users/{user_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], user["id"]);
    assert_eq!(fetched["name"], "Ada");
}

#[actix_web::test]
async fn signup_with_a_duplicate_email_conflicts_and_mutates_nothing() {
    let app = spawn_app().await;

    signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Eve", "email": "ada@example.com", "password": "other" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Value = test::read_body_json(resp).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["name"], "Ada");
}

#[actix_web::test]
async fn signup_with_missing_fields_is_a_bad_request() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Name, email, and password are required");
}

#[actix_web::test]
async fn signin_failures_are_indistinguishable() {
    let app = spawn_app().await;
    signup(&app, "Ada", "ada@example.com", "s3cret").await;

    let wrong_password = test::TestRequest::post()
        .uri("/signin")
        .set_json(json!({ "email": "ada@example.com", "password": "nope" }))
        .to_request();
    let unknown_email = test::TestRequest::post()
        .uri("/signin")
        .set_json(json!({ "email": "nobody@example.com", "password": "s3cret" }))
        .to_request();

    let resp_wrong = test::call_service(&app, wrong_password).await;
    let resp_unknown = test::call_service(&app, unknown_email).await;

    assert_eq!(resp_wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp_unknown.status(), StatusCode::UNAUTHORIZED);

    let body_wrong: Value = test::read_body_json(resp_wrong).await;
    let body_unknown: Value = test::read_body_json(resp_unknown).await;
    assert_eq!(body_wrong, body_unknown);
}

#[actix_web::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let app = spawn_app().await;

    let no_token = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, no_token).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let garbage = test::TestRequest::get()
        .uri("/users")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, garbage).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn a_token_for_a_deleted_user_stops_working() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let user_id = user["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{user_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn post_lifecycle_end_to_end() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let user_id = user["id"].as_str().unwrap();

    let post = create_post(&app, &token, user_id).await;
    assert_eq!(post["user_id"], user["id"]);
    let post_id = post["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["id"], post["id"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{user_id}/post/{post_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post not found");
}

#[actix_web::test]
async fn deleting_a_post_with_a_mismatched_owner_removes_nothing() {
    let app = spawn_app().await;

    let ada = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let eve = signup(&app, "Eve", "eve@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;

    let post = create_post(&app, &token, ada["id"].as_str().unwrap()).await;
    let post_id = post["id"].as_str().unwrap();
    let eve_id = eve["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{eve_id}/post/{post_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn updating_a_post_validates_existence_before_fields() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;

    // Unknown post with an incomplete body answers 404, not 400.
    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "only title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let post = create_post(&app, &token, user["id"].as_str().unwrap()).await;
    let post_id = post["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "only title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Title and description are required");
}

#[actix_web::test]
async fn commenting_on_a_missing_post_fails_and_creates_nothing() {
    let app = spawn_app().await;

    signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let missing = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{missing}/comments"))
        .insert_header(bearer(&token))
        .set_json(json!({ "content": "first!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Post not found");

    // Listing under the same missing post also reports it as absent.
    let req = test::TestRequest::get()
        .uri(&format!("/posts/{missing}/comments"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn comment_lifecycle_under_a_post() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let post = create_post(&app, &token, user["id"].as_str().unwrap()).await;
    let post_id = post["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{post_id}/comments"))
        .insert_header(bearer(&token))
        .set_json(json!({ "content": "first!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let comment_id = created["comment"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}/comments"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Value = test::read_body_json(resp).await;
    assert_eq!(comments.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}/comment/{comment_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{post_id}/comment/{comment_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{post_id}/comments"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No comments found for this post");
}

#[actix_web::test]
async fn batch_user_update_applies_valid_elements_despite_invalid_ones() {
    let app = spawn_app().await;

    let ada = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let ada_id = ada["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri("/users")
        .insert_header(bearer(&token))
        .set_json(json!({
            "users": [
                { "id": ada_id, "name": "Ada Lovelace" },
                { "id": "999", "name": "Nobody" },
                { "id": Uuid::new_v4(), "name": "Ghost" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Users updated successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/users/{ada_id}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["name"], "Ada Lovelace");
}

#[actix_web::test]
async fn updating_a_user_needs_a_name_or_an_email() {
    let app = spawn_app().await;

    let user = signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;
    let user_id = user["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/users/{user_id}"))
        .insert_header(bearer(&token))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Name or email is required");
}

#[actix_web::test]
async fn empty_collections_answer_not_found() {
    let app = spawn_app().await;

    signup(&app, "Ada", "ada@example.com", "s3cret").await;
    let token = signin(&app, "ada@example.com", "s3cret").await;

    let req = test::TestRequest::get()
        .uri("/posts")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No posts found");
}

#[actix_web::test]
async fn health_check_is_public() {
    let app = spawn_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
