// Token Updater: Store Module
//
// Adapter over the desktop application's local state database. Only the
// account keys are touched; every other entry in the database is left as is.

mod db;
mod error;
mod models;
mod paths;
mod repository;

pub use db::Database;
pub use error::StoreError;
pub use models::CredentialRecord;
pub use paths::default_db_path;
pub use repository::{CredentialStore, SqliteCredentialStore};
