//! # Repositories
//!
//! Database access layer for users and wishlist entries. Thin SQL wrappers;
//! error classification (duplicate email vs. internal) is left to callers.

use super::models::User;
use super::DbPool;
use sqlx::query_as;

pub struct UserRepository;

impl UserRepository {
    /// Find a user by their email address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - User found with matching email
    /// * `Ok(None)` - No user found with that email
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user in the database.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the email already exists (UNIQUE constraint
    /// violation) or the database connection fails. Callers must inspect the
    /// error for the constraint case: the find-then-create sequence is not
    /// atomic, so a concurrent registration can slip between the pre-check
    /// and this insert.
    pub async fn create(
        pool: &DbPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(pool)
            .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}

pub struct WishlistRepository;

impl WishlistRepository {
    /// Insert a (user_id, product_id) wishlist row.
    pub async fn add(pool: &DbPool, user_id: i64, product_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO wishlist (user_id, product_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(product_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Whether a database error is a UNIQUE-constraint violation.
///
/// Used by registration to map the duplicate-email race to the same 400
/// response as the pre-check.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
