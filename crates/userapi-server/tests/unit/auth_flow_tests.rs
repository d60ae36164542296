//! Registration and login over HTTP

use crate::test_utils::{TEST_PASSWORD, TestApp, registration};
use rocket::http::Status;
use serde_json::{Value, json};
use tempfile::TempDir;
use userapi_domain::entities::{Role, UserRecord};
use userapi_domain::repositories::UserRepository;

#[rocket::async_test]
async fn test_register_returns_token_and_public_user() {
    let app = TestApp::new().await;

    let response = app
        .client
        .post("/api/auth/register")
        .json(&registration("alice"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.unwrap();
    let token = body["token"].as_str().unwrap();
    assert!(app.state.tokens.validate(token));
    assert_eq!(
        app.state.tokens.extract_role(token).unwrap().as_deref(),
        Some("ROLE_USER")
    );
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "USER");
    assert!(body["user"].get("password").is_none());

    let stored = app.state.store.find_by_username("alice").await.unwrap();
    assert_ne!(stored.password, TEST_PASSWORD);
}

#[rocket::async_test]
async fn test_register_honors_requested_role() {
    let app = TestApp::new().await;
    let mut body = registration("boss");
    body["role"] = json!("manager");

    let response = app
        .client
        .post("/api/auth/register")
        .json(&body)
        .dispatch()
        .await;
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["user"]["role"], "MANAGER");
}

#[rocket::async_test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    app.seed("alice", Role::User).await;

    let response = app
        .client
        .post("/api/auth/register")
        .json(&registration("alice"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["message"], "Username is already taken");
    assert_eq!(app.state.store.count().await, 1);
}

#[rocket::async_test]
async fn test_register_validation_errors() {
    let app = TestApp::new().await;

    let response = app
        .client
        .post("/api/auth/register")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "age": 200,
            "username": "no spaces",
            "password": "weak",
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["path"], "/api/auth/register");
    let fields: Vec<&str> = body["validationErrors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    for field in ["age", "email", "name", "password", "username"] {
        assert!(fields.contains(&field), "missing {field} in {fields:?}");
    }
    assert!(app.state.store.find_all().await.is_empty());
}

#[rocket::async_test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.seed("carol", Role::Admin).await;

    let response = app
        .client
        .post("/api/auth/login")
        .json(&json!({ "username": "carol", "password": TEST_PASSWORD }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.unwrap();
    let token = body["token"].as_str().unwrap();
    assert_eq!(app.state.tokens.extract_username(token).unwrap(), "carol");
    assert_eq!(
        app.state.tokens.extract_role(token).unwrap().as_deref(),
        Some("ROLE_ADMIN")
    );
}

#[rocket::async_test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.seed("dave", Role::User).await;

    let mut messages = Vec::new();
    for (username, password) in [("dave", "WrongPass1"), ("nobody", TEST_PASSWORD)] {
        let response = app
            .client
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
        let body: Value = response.into_json().await.unwrap();
        messages.push(body["message"].as_str().unwrap().to_string());
    }

    assert_eq!(messages[0], "Invalid username or password");
    assert_eq!(messages[0], messages[1]);
}

#[rocket::async_test]
async fn test_disabled_account_cannot_login() {
    let app = TestApp::new().await;
    let mut user: UserRecord = app.seed("erin", Role::User).await;
    user.enabled = false;
    app.state.store.save(user).await.unwrap();

    let response = app
        .client
        .post("/api/auth/login")
        .json(&json!({ "username": "erin", "password": TEST_PASSWORD }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_credentials_survive_restart() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("users.json");

    {
        let app = TestApp::at(&data_file).await;
        let response = app
            .client
            .post("/api/auth/register")
            .json(&registration("frank"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
    }

    let restarted = TestApp::at(&data_file).await;
    let response = restarted
        .client
        .post("/api/auth/login")
        .json(&json!({ "username": "frank", "password": TEST_PASSWORD }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(restarted.data_file, data_file);
}
