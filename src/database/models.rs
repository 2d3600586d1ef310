use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Wishlist entry linking a user to a product.
///
/// No uniqueness over (user_id, product_id): repeated adds insert repeated
/// rows until the duplicate semantics are settled with the catalog team.
#[derive(Debug, Clone, FromRow)]
pub struct WishlistEntry {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}
