// Token Updater: Runtime settings
//
// Resolved once at startup from CLI flags, environment and platform
// defaults, then passed around read-only.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::UpdaterError;
use crate::store::default_db_path;

/// Environment variable that disables coloured output when set to anything.
const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: PathBuf,
    pub locale: String,
    pub locales_dir: Option<PathBuf>,
    pub colored: bool,
    pub pause: bool,
}

impl Settings {
    /// Resolve settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, UpdaterError> {
        let db_path = match &cli.db_path {
            Some(path) => path.clone(),
            None => default_db_path().ok_or_else(|| {
                UpdaterError::Config(
                    "could not determine the Cursor data directory; pass --db-path".to_string(),
                )
            })?,
        };

        let no_color_env = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());

        Ok(Self {
            db_path,
            locale: cli.locale.clone(),
            locales_dir: cli.locales_dir.clone(),
            colored: !cli.no_color && !no_color_env,
            pause: !cli.no_pause,
        })
    }
}
