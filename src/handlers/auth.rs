//! # Authentication Handlers
//!
//! HTTP request handlers for user registration and login.

use crate::{
    auth::{hash_password, sign_token, verify_password},
    config::Config,
    database::repository::{is_unique_violation, UserRepository},
    database::DbPool,
    dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo},
    error::AppError,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use tracing::{debug, error, info, instrument, warn};

/// Register handler - creates a new user account.
///
/// # Returns
///
/// * `Ok((StatusCode::CREATED, RegisterResponse))` - User created, response carries the new id
/// * `Err(AppError)` - Missing fields (400), duplicate email (400), or datastore failure (500)
///
/// The duplicate email case is handled twice: a pre-insert lookup for the
/// common path, and a UNIQUE-violation check on the insert itself for the
/// race where two registrations interleave between lookup and insert.
#[instrument(skip(pool, req), fields(email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    info!("[REGISTER] New registration request");

    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        warn!("[REGISTER] Missing required fields");
        return Err(AppError::Validation(
            "Please provide name, email, and password".to_string(),
        ));
    }

    if UserRepository::find_by_email(&pool, &req.email).await?.is_some() {
        warn!("[REGISTER] Email already registered: {}", req.email);
        return Err(AppError::DuplicateEmail);
    }

    debug!("[REGISTER] Hashing password...");
    let password_hash = hash_password(&req.password)?;

    debug!("[REGISTER] Creating user in database...");
    let user = UserRepository::create(&pool, &req.name, &req.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                // Lost the race against a concurrent registration
                warn!("[REGISTER] Duplicate email caught at insert: {}", req.email);
                AppError::DuplicateEmail
            } else {
                error!("[REGISTER] Failed to create user: {}", e);
                AppError::from(e)
            }
        })?;

    info!("[REGISTER] User registered - id: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Login handler - authenticates an existing user and issues a session token.
///
/// Unknown email and wrong password both answer with the identical
/// [`AppError::InvalidCredentials`] body so the endpoint cannot be used to
/// probe which emails have accounts.
#[instrument(skip(pool, config, req), fields(email = %req.email))]
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    info!("[LOGIN] Login attempt");

    if req.email.trim().is_empty() || req.password.is_empty() {
        warn!("[LOGIN] Missing required fields");
        return Err(AppError::Validation(
            "Please provide email and password".to_string(),
        ));
    }

    let user = match UserRepository::find_by_email(&pool, &req.email).await? {
        Some(user) => user,
        None => {
            warn!("[LOGIN] User not found: {}", req.email);
            return Err(AppError::InvalidCredentials);
        }
    };

    debug!("[LOGIN] Verifying password...");
    if !verify_password(&req.password, &user.password_hash) {
        warn!("[LOGIN] Invalid password for user: {}", user.email);
        return Err(AppError::InvalidCredentials);
    }

    debug!("[LOGIN] Generating session token...");
    let token = sign_token(
        user.id,
        user.email.clone(),
        &config.jwt_secret,
        config.token_expiry_hours,
    )?;

    info!("[LOGIN] Login successful - user: {}", user.email);

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: UserInfo {
                user_id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}
