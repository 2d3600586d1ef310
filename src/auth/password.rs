//! # Password Hashing
//!
//! Password hashing and verification using bcrypt.

use crate::error::{AppError, Result};

/// bcrypt work factor. Fixed at 12 rounds; raising it invalidates no stored
/// hashes since the cost is embedded in each hash string.
const HASH_COST: u32 = 12;

/// Hash a password using bcrypt with a random salt.
///
/// Two calls with the same input produce different hashes.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, HASH_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `false` on mismatch or on an unparseable stored hash; verification
/// itself never fails the request.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
