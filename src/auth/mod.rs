//! # Authentication
//!
//! Password hashing, token issuance/verification, and the bearer-token
//! middleware for protected routes.

pub mod middleware;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
pub use token::{sign_token, verify_token, Claims};
