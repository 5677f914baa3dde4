// Token Updater: Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Credential database not found at {}", .0.display())]
    NotFound(std::path::PathBuf),

    #[error("{0}")]
    Other(String),
}
