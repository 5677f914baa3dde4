// Token Updater: Translation error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read locale file {}: {source}", .path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid locale catalog for '{locale}': {source}")]
    Parse {
        locale: String,
        source: serde_json::Error,
    },

    #[error("Locale catalog for '{0}' must be a JSON object")]
    NotAnObject(String),
}
