//! Opening the employee database.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::SqliteEmployeeRepository;
use crate::error::StorageError;

/// An open, migrated employee database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at `url`, creating the file if needed, and bring the
    /// schema up to date.
    ///
    /// # Errors
    ///
    /// [`StorageError::Open`] when the URL is malformed or the database cannot
    /// be reached, [`StorageError::Migration`] when the schema update fails.
    pub async fn open(url: &str) -> Result<Self, StorageError> {
        let open_failed = |source| StorageError::Open {
            url: url.to_string(),
            source,
        };
        let options = SqliteConnectOptions::from_str(url)
            .map_err(open_failed)?
            .create_if_missing(true);

        // A memory database exists only inside its connection; keep exactly
        // one alive for the lifetime of the pool.
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(open_failed)?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(url, "database ready");

        Ok(Self { pool })
    }

    /// A private, empty database that disappears with the last clone.
    ///
    /// # Errors
    ///
    /// See [`Database::open`].
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::open("sqlite::memory:").await
    }

    /// Employee repository backed by this database.
    #[must_use]
    pub fn employees(&self) -> SqliteEmployeeRepository {
        SqliteEmployeeRepository::new(self.pool.clone())
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
