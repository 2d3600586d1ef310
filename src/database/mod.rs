pub mod models;
pub mod repository;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

pub type DbPool = SqlitePool;

/// Create the SQLite connection pool, creating the database file if missing.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}
