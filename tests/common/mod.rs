//! Test helpers for Web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum_test::{TestRequest, TestServer};
use freeboard::config::WebConfig;
use freeboard::web::handlers::AppState;
use freeboard::web::router::{create_health_router, create_router};
use freeboard::Database;
use serde_json::{json, Value};

/// Admin signup token used by the test configuration.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Default password for test members.
pub const PASSWORD: &str = "password1!";

/// Create a test configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        jwt_secret: "test-secret-key-for-testing-only".to_string(),
        jwt_access_token_expiry_secs: 900,
        admin_token: ADMIN_TOKEN.to_string(),
    }
}

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let config = create_test_config();

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::from_config(db.clone(), &config));
    let router = create_router(app_state, &config.cors_origins).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Sign up a member and return the response body.
pub async fn signup(server: &TestServer, username: &str, admin: bool) -> Value {
    let body = if admin {
        json!({
            "username": username,
            "password": PASSWORD,
            "admin": true,
            "adminToken": ADMIN_TOKEN
        })
    } else {
        json!({ "username": username, "password": PASSWORD })
    };

    server
        .post("/api/members/signup")
        .json(&body)
        .await
        .json::<Value>()
}

/// Log in and return the bearer token from the `Authorization` header.
pub async fn login(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/members/login")
        .json(&json!({ "username": username, "password": PASSWORD }))
        .await;
    response.assert_status_ok();

    let header = response.header(AUTHORIZATION);
    header
        .to_str()
        .expect("Authorization header is not ASCII")
        .strip_prefix("Bearer ")
        .expect("Authorization header lacks Bearer prefix")
        .to_string()
}

/// Sign up and log in a regular member.
pub async fn member_token(server: &TestServer, username: &str) -> String {
    signup(server, username, false).await;
    login(server, username).await
}

/// Sign up and log in an admin.
pub async fn admin_token(server: &TestServer, username: &str) -> String {
    signup(server, username, true).await;
    login(server, username).await
}

/// Attach a bearer token to a request.
pub fn authed(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

/// Create a post as the token holder and return its ID.
pub async fn create_post(server: &TestServer, token: &str, title: &str) -> i64 {
    authed(server.post("/api/posts"), token)
        .json(&json!({ "title": title, "contents": "본문" }))
        .await
        .assert_status_ok();

    let list = server.get("/api/posts").await.json::<Value>();
    list["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["title"] == title)
        .and_then(|p| p["id"].as_i64())
        .expect("created post not listed")
}

/// Create a reply as the token holder and return its ID.
pub async fn create_reply(server: &TestServer, token: &str, post_id: i64, contents: &str) -> i64 {
    authed(server.post(&format!("/api/posts/{post_id}/replies")), token)
        .json(&json!({ "contents": contents }))
        .await
        .assert_status_ok();

    let detail = server.get(&format!("/api/posts/{post_id}")).await.json::<Value>();
    detail["data"]["replies"]
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|r| r["contents"] == contents)
        .and_then(|r| r["id"].as_i64())
        .expect("created reply not listed")
}
