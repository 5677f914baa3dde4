// Token Updater: CLI Module
//
// Command-line interface using clap derive macros. Missing email or token
// values are prompted for interactively.

mod commands;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{execute, run, Request};
pub use validation::{validate, ValidationError, MIN_TOKEN_LEN};

/// Write an account email and access token into Cursor's local credential database.
#[derive(Parser, Debug)]
#[command(name = "token-updater")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Account email address. Prompted for when omitted.
    #[arg(long)]
    pub email: Option<String>,

    /// Access token, also stored as the refresh token. Prompted for when omitted.
    #[arg(long)]
    pub token: Option<String>,

    /// Path to the credential database (defaults to Cursor's state.vscdb).
    #[arg(long, env = "TOKEN_UPDATER_DB")]
    pub db_path: Option<PathBuf>,

    /// Message language (e.g. "en", "zh_cn").
    #[arg(long = "lang", env = "TOKEN_UPDATER_LANG", default_value = "en")]
    pub locale: String,

    /// Directory of `<lang>.json` message catalogs overriding the built-in ones.
    #[arg(long, env = "TOKEN_UPDATER_LOCALES")]
    pub locales_dir: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Exit without waiting for Enter.
    #[arg(long)]
    pub no_pause: bool,

    /// Show the currently stored account and exit.
    #[arg(long)]
    pub show: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "token-updater",
            "--email",
            "user@example.com",
            "--token",
            "abcdefghijklmnopqrst",
            "--db-path",
            "/tmp/state.vscdb",
            "--lang",
            "zh_cn",
            "--no-color",
            "--no-pause",
        ])
        .unwrap();

        assert_eq!(cli.email.as_deref(), Some("user@example.com"));
        assert_eq!(cli.token.as_deref(), Some("abcdefghijklmnopqrst"));
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/state.vscdb")));
        assert_eq!(cli.locale, "zh_cn");
        assert!(cli.no_color);
        assert!(cli.no_pause);
        assert!(!cli.show);
    }

    #[test]
    fn test_email_and_token_are_optional() {
        let cli = Cli::try_parse_from(["token-updater", "--show"]).unwrap();
        assert!(cli.email.is_none());
        assert!(cli.token.is_none());
        assert!(cli.show);
    }
}
