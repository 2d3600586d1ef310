//! # Application Configuration
//!
//! Configuration loaded from environment variables once at startup and passed
//! into handlers through application state. Validation happens before the
//! server binds so a misconfigured process fails fast with a non-zero exit.

use crate::error::AppError;
use std::env;

/// Default token validity when `TOKEN_EXPIRY_HOURS` is not set.
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 2;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for token signing and verification
    pub jwt_secret: String,

    /// Upstream API key. Required at startup but not consumed by any route
    /// yet; reserved for the storefront integration.
    pub api_key: String,

    /// Token validity period in hours (default 2)
    pub token_expiry_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` and `API_KEY` are mandatory; a missing value is a startup
    /// failure, never a per-request one.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/backend.db".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::Config("JWT_SECRET must be set in environment".to_string()))?;

        let api_key = env::var("API_KEY")
            .map_err(|_| AppError::Config("API_KEY must be set in environment".to_string()))?;

        let token_expiry_hours = env::var("TOKEN_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_HOURS.to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("TOKEN_EXPIRY_HOURS must be a valid number: {}", e))
            })?;

        Ok(Self {
            database_url,
            jwt_secret,
            api_key,
            token_expiry_hours,
        })
    }

    /// Validate configuration values before serving.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.is_empty() {
            return Err(AppError::Config("JWT_SECRET must not be empty".to_string()));
        }

        if self.api_key.is_empty() {
            return Err(AppError::Config("API_KEY must not be empty".to_string()));
        }

        if self.token_expiry_hours < 1 {
            return Err(AppError::Config(
                "TOKEN_EXPIRY_HOURS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
