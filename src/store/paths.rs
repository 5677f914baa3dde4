// Token Updater: Platform database locations

use std::path::PathBuf;

/// Directory under the platform config root where Cursor keeps global state.
fn global_storage_dir() -> Option<PathBuf> {
    let base = match std::env::consts::OS {
        // ~/Library/Application Support
        "macos" => dirs_next::data_dir(),
        // %APPDATA% on Windows, ~/.config elsewhere
        _ => dirs_next::config_dir(),
    }?;

    Some(base.join("Cursor").join("User").join("globalStorage"))
}

/// Default path of the Cursor state database, if a home directory is known.
pub fn default_db_path() -> Option<PathBuf> {
    global_storage_dir().map(|dir| dir.join("state.vscdb"))
}
