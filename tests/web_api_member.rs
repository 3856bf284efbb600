//! Web API Member Tests
//!
//! Integration tests for signup and login endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use common::{create_test_server, signup, ADMIN_TOKEN, PASSWORD};
use freeboard::db::{MemberRepository, Role};
use freeboard::TokenService;
use serde_json::{json, Value};

// ============================================================================
// Signup Tests
// ============================================================================

#[tokio::test]
async fn test_signup_success() {
    let (server, db) = create_test_server().await;

    let response = server
        .post("/api/members/signup")
        .json(&json!({ "username": "alice", "password": PASSWORD }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "회원가입 성공");
    assert_eq!(body["httpStatus"], 200);

    let member = MemberRepository::new(db.pool())
        .get_by_username("alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(member.role, Role::User);
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let (server, _db) = create_test_server().await;
    signup(&server, "alice", false).await;

    let response = server
        .post("/api/members/signup")
        .json(&json!({ "username": "alice", "password": PASSWORD }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "중복된 사용자가 존재합니다.");
    assert_eq!(body["httpStatus"], 400);
}

#[tokio::test]
async fn test_signup_admin() {
    let (server, db) = create_test_server().await;

    let body = signup(&server, "boss", true).await;
    assert_eq!(body["httpStatus"], 200);

    let member = MemberRepository::new(db.pool())
        .get_by_username("boss")
        .await
        .unwrap()
        .unwrap();
    assert!(member.is_admin());
}

#[tokio::test]
async fn test_signup_admin_wrong_token() {
    let (server, db) = create_test_server().await;

    let response = server
        .post("/api/members/signup")
        .json(&json!({
            "username": "boss",
            "password": PASSWORD,
            "admin": true,
            "adminToken": format!("{ADMIN_TOKEN}-wrong")
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "관리자 암호가 틀려 등록이 불가능합니다.");
    assert_eq!(MemberRepository::new(db.pool()).count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_signup_invalid_username() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/members/signup")
        .json(&json!({ "username": "ALICE", "password": PASSWORD }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 400);
}

#[tokio::test]
async fn test_signup_malformed_json() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/members/signup")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["httpStatus"], 400);
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_success_sets_authorization_header() {
    let (server, _db) = create_test_server().await;
    signup(&server, "alice", false).await;

    let response = server
        .post("/api/members/login")
        .json(&json!({ "username": "alice", "password": PASSWORD }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "로그인 성공");

    let header = response.header(AUTHORIZATION);
    let token = header.to_str().unwrap().strip_prefix("Bearer ").unwrap();

    let config = common::create_test_config();
    let claims = TokenService::new(&config.jwt_secret, config.jwt_access_token_expiry_secs)
        .get_claims(token)
        .unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.auth, "USER");
}

#[tokio::test]
async fn test_login_unknown_member() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/members/login")
        .json(&json!({ "username": "nobody", "password": PASSWORD }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "등록된 사용자가 없습니다.");
    assert!(response.headers().get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _db) = create_test_server().await;
    signup(&server, "alice", false).await;

    let response = server
        .post("/api/members/login")
        .json(&json!({ "username": "alice", "password": "wrongpass1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "비밀번호가 일치하지 않습니다.");
}

#[tokio::test]
async fn test_health() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
