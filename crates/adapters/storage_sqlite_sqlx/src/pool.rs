//! Opening the rntly database.
//!
//! The schema (`properties`, `tenants`, `leases`) ships as embedded
//! migrations. Leases reference their property and tenant with
//! `ON DELETE CASCADE`, which `SQLite` only honours when the
//! `foreign_keys` pragma is set on every connection.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Where the database lives.
pub struct Config {
    /// e.g. `sqlite:rntly.db?mode=rwc`, or `sqlite::memory:` in tests.
    pub database_url: String,
}

impl Config {
    /// Open the database and bring the schema up to date.
    ///
    /// A missing database file is created.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for a malformed URL, an unreachable file or a
    /// failed migration.
    pub async fn build(self) -> Result<Database, StorageError> {
        let pool = SqlitePool::connect_with(connect_options(&self.database_url)?).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Database { pool })
    }
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, StorageError> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true))
}

/// An open, migrated database. Repositories clone its pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
