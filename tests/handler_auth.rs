mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use storefront::application::services::Claims;
use storefront::routes::app_router;
use tower::ServiceExt;

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_then_me() {
    let (state, _) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    server
        .post("/users")
        .json(&json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "password": "supersecretpassword"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let login = server
        .post("/auth/login")
        .json(&json!({"email": "john.doe@example.com", "password": "supersecretpassword"}))
        .await;

    login.assert_status_ok();
    let body = login.json::<Value>();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
    let token = body["access_token"].as_str().unwrap().to_string();

    let me = server
        .get("/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .await;

    me.assert_status_ok();
    me.assert_json(&json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@example.com"
    }));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (state, _) = common::create_test_state();
    common::create_user_with_token(&state, "me@example.com").await;
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({"email": "me@example.com", "password": "wrong-password"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let (state, _) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({"email": "nobody@example.com", "password": "whatever"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["reason"],
        "Invalid email or password"
    );
}

// ─── BEARER MIDDLEWARE ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_protected_route_without_header() {
    let (state, db) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/users").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn test_protected_route_rejects_bad_credentials_without_touching_store() {
    let (state, db) = common::create_test_state();
    let app = app_router(state);

    let cases = [
        "Basic dXNlcjpwYXNz",
        "Bearer",
        "Bearer ",
        "Bearer not.a.jwt",
        "bearer-token-without-scheme",
    ];

    for value in cases {
        let request = Request::builder()
            .method("POST")
            .uri("/products")
            .header(header::AUTHORIZATION, value)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Keyboard","price":100,"quantity":1}"#))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "header {value:?} should be rejected"
        );
    }

    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn test_protected_route_rejects_expired_token() {
    let (state, db) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let claims = Claims {
        sub: "1".to_string(),
        email: "john.doe@example.com".to_string(),
        roles: Vec::new(),
        iat: 1_000,
        exp: 2_000,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .get("/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn test_protected_route_rejects_token_from_other_secret() {
    let (state, db) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    let claims = Claims {
        sub: "1".to_string(),
        email: "john.doe@example.com".to_string(),
        roles: Vec::new(),
        iat: 1_000,
        exp: 4_000_000_000,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret-value"),
    )
    .unwrap();

    server
        .get("/roles")
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let (state, _) = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    server.get("/health").await.assert_status_ok();
}
