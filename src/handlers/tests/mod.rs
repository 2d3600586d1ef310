//! # Handler Tests
//!
//! Test suite for the registration, login, and wishlist endpoints.

mod register;

use crate::config::Config;
use crate::database::DbPool;
use crate::server::{create_router, AppState};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

/// Setup test database with schema.
///
/// Single connection: every `sqlite::memory:` connection is its own database.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS wishlist (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            product_id INTEGER NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create wishlist table");

    pool
}

/// Create test config.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        api_key: "test-api-key".to_string(),
        token_expiry_hours: 2,
    }
}

/// Create test app with the real router and middleware.
pub fn test_app(pool: DbPool, config: Config) -> Router {
    create_router(AppState { db: pool, config })
}
