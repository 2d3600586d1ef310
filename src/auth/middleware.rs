//! # Authentication Middleware
//!
//! Axum middleware that validates the bearer token on protected routes and
//! injects the authenticated user's claims into the request extensions.
//!
//! Handlers behind the middleware extract claims with `Extension<Claims>`:
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use backend::auth::Claims;
//!
//! async fn protected_handler(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, user {}!", claims.user_id)
//! }
//! ```

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::error::AppError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

/// Validate the `Authorization: Bearer <token>` header.
///
/// # Behavior
///
/// - Missing or non-Bearer header → [`AppError::NoToken`] (403)
/// - Expired token → [`AppError::TokenExpired`] (401)
/// - Malformed, tampered, or wrong-secret token → [`AppError::TokenInvalid`] (401)
/// - Valid token → `Claims` placed in request extensions, downstream handler runs
///
/// Stateless per call; nothing is retained between requests.
pub async fn require_auth(
    State(config): State<Config>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::NoToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Invalid Authorization header format");
        AppError::NoToken
    })?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        warn!("[AUTH] Token validation failed: {}", e);
        e
    })?;

    debug!("[AUTH] Authenticated user: {} (id: {})", claims.email, claims.user_id);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
