// Token Updater: Library root
//
// Re-exports the store, updater, translation, console and CLI modules.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod i18n;
pub mod store;
pub mod updater;

pub use error::{Result, UpdaterError};
pub use updater::{TokenUpdater, UpdateError};
