//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] used across all modules, following
//! the `thiserror` pattern. Every variant maps to exactly one HTTP status so
//! handlers can bubble errors with `?` and let `IntoResponse` do the rest.
//!
//! ## Error Categories
//!
//! 1. **Client errors** (4xx)
//!    - [`Validation`](AppError::Validation) → 400 Bad Request
//!    - [`DuplicateEmail`](AppError::DuplicateEmail) → 400 Bad Request
//!    - [`InvalidCredentials`](AppError::InvalidCredentials) → 401 Unauthorized
//!    - [`TokenExpired`](AppError::TokenExpired) → 401 Unauthorized
//!    - [`TokenInvalid`](AppError::TokenInvalid) → 401 Unauthorized
//!    - [`NoToken`](AppError::NoToken) → 403 Forbidden
//!
//! 2. **Server errors** (5xx)
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! `InvalidCredentials` is deliberately a unit variant with a fixed message:
//! an unknown email and a wrong password must produce byte-identical 401
//! responses so clients cannot enumerate registered accounts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all request-failure scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed field validation.
    #[error("{0}")]
    Validation(String),

    /// Registration attempted with an email that already has an account.
    ///
    /// Raised both by the pre-insert lookup and by the UNIQUE-constraint
    /// violation when two registrations race between check and insert.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Login failed. The message never reveals whether the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Protected route called without a parseable `Authorization: Bearer` header.
    #[error("Access denied, no token provided")]
    NoToken,

    /// Token signature was valid but the embedded expiry has passed.
    #[error("Token expired")]
    TokenExpired,

    /// Token was malformed, tampered with, or signed with the wrong secret.
    #[error("Invalid token")]
    TokenInvalid,

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected failure (datastore, hashing, token encoding).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::TokenExpired | AppError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NoToken => StatusCode::FORBIDDEN,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Server error: {}", self),
            _ => tracing::warn!("Client error: {}", self),
        }

        // 500 bodies carry the raw internal message. Known behavior of the
        // service this replaces; integrators should treat it as an
        // information-disclosure risk to close (see DESIGN.md).
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Convert `sqlx::Error` to `AppError`.
///
/// Unclassified datastore failures collapse to [`AppError::Internal`]. The
/// register handler inspects unique-constraint violations itself before this
/// conversion applies.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("missing".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::NoToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_expired_and_invalid_messages_differ() {
        assert_ne!(
            AppError::TokenExpired.to_string(),
            AppError::TokenInvalid.to_string()
        );
    }
}
