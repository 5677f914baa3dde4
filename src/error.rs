// Token Updater: Top-level error types
//
// Aggregates errors from the store, translation and console layers into a
// single error enum for the binary boundary. Validation and store failures
// during an update are not errors at this level; they are reported to the
// user and surface as a `false` result.

use thiserror::Error;

/// Top-level error type for all Token Updater operations.
#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Translation error: {0}")]
    I18n(#[from] crate::i18n::I18nError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
