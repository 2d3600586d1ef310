//! # Registration Tests

use super::*;
use crate::auth::hash_password;
use crate::database::repository::{is_unique_violation, UserRepository};
use crate::dto::{ErrorResponse, RegisterRequest, RegisterResponse};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn register_request(req: &RegisterRequest) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(req).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_register_success() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let req = RegisterRequest {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "TestPassword123!".to_string(),
    };

    // Act
    let response = app.oneshot(register_request(&req)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let register_response: RegisterResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(register_response.message, "User registered successfully");
    assert!(register_response.user_id > 0);
}

#[tokio::test]
async fn test_register_missing_fields() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    let req = RegisterRequest {
        name: "Alice".to_string(),
        email: String::new(),
        password: "TestPassword123!".to_string(),
    };

    // Act
    let response = app.oneshot(register_request(&req)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        error_response.error,
        "Please provide name, email, and password"
    );
}

#[tokio::test]
async fn test_register_missing_field_in_body() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // No password field at all
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Alice","email":"alice@example.com"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    // Arrange
    let pool = setup_test_db().await;

    let password_hash = hash_password("Password123!").expect("Hashing should succeed in test");
    UserRepository::create(&pool, "Alice", "alice@example.com", &password_hash)
        .await
        .expect("User creation should succeed in test");

    let app = test_app(pool, test_config());

    let req = RegisterRequest {
        name: "Alice Again".to_string(),
        email: "alice@example.com".to_string(),
        password: "OtherPassword123!".to_string(),
    };

    // Act
    let response = app.oneshot(register_request(&req)).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(error_response.error, "Email already registered");
}

#[tokio::test]
async fn test_duplicate_insert_is_unique_violation() {
    // The find-then-create sequence is not atomic; the insert itself must
    // surface a detectable constraint violation for the race path.

    // Arrange
    let pool = setup_test_db().await;
    let password_hash = hash_password("Password123!").expect("Hashing should succeed in test");

    UserRepository::create(&pool, "Alice", "alice@example.com", &password_hash)
        .await
        .expect("First insert should succeed");

    // Act
    let err = UserRepository::create(&pool, "Mallory", "alice@example.com", &password_hash)
        .await
        .expect_err("Second insert with the same email should fail");

    // Assert
    assert!(is_unique_violation(&err));
}
