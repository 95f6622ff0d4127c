//! Storage layer for the wishlist tracker.
//!
//! The pool is created explicitly by the caller and handed to every
//! repository method; nothing here holds a global connection. Call
//! [`initialize`] once at startup before serving requests.

pub mod models;
pub mod repositories;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// SQL expression for the current UTC time, matching the column defaults.
pub(crate) const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

/// Create a connection pool from a database URL.
///
/// The database file is created if missing. Foreign keys are always enabled;
/// set-null and cascade deletes depend on it.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Tables the repositories read and write.
pub const SCHEMA_TABLES: [&str; 3] = ["categories", "wish_items", "remarks"];

/// Names from [`SCHEMA_TABLES`] that do not exist yet. Empty once
/// [`initialize`] has run.
pub async fn missing_tables(pool: &DbPool) -> Result<Vec<&'static str>, sqlx::Error> {
    let present: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;

    Ok(SCHEMA_TABLES
        .into_iter()
        .filter(|table| !present.iter().any(|(name,)| name == table))
        .collect())
}

/// Apply the embedded schema migrations. Safe to call repeatedly.
pub async fn initialize(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema initialized");
    Ok(())
}

/// `true` if `err` is a UNIQUE constraint failure (e.g. a duplicate category name).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// `true` if `err` is a FOREIGN KEY constraint failure (e.g. a remark for a
/// wish item that does not exist).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
