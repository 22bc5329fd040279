use staffdesk_domain::error::StaffdeskError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot open database at {url}")]
    Open {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("employee query failed")]
    Query(#[from] sqlx::Error),

    #[error("schema migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Every storage failure reaches callers as an opaque
/// [`StaffdeskError::Storage`].
impl From<StorageError> for StaffdeskError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
