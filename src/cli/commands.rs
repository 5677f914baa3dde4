// Token Updater: CLI Command Handlers
//
// Wires settings, translator, console and store together, then runs either
// the update flow or the `--show` report.

use std::io::{BufRead, Write};
use std::path::Path;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::console::{Console, Status, StatusReporter};
use crate::error::UpdaterError;
use crate::i18n::{MessageSource, Translator};
use crate::store::{CredentialStore, SqliteCredentialStore};
use crate::updater::TokenUpdater;

use super::{validate, Cli};

/// Inputs for one run of the update flow.
pub struct Request {
    pub email: Option<String>,
    pub token: Option<Zeroizing<String>>,
    pub pause: bool,
}

/// Execute the parsed CLI against the real terminal and database.
/// Returns whether the credentials were updated.
pub fn execute(cli: Cli) -> Result<bool, UpdaterError> {
    let settings = Settings::from_cli(&cli)?;
    let translator = Translator::new(&settings.locale, settings.locales_dir.as_deref())?;
    let console = Console::stdio(settings.colored);
    let store = SqliteCredentialStore::new(&settings.db_path);

    tracing::debug!(
        db_path = %settings.db_path.display(),
        locale = %translator.locale(),
        "Settings resolved"
    );

    if cli.show {
        console.banner(&translator.get("token_updater.title", &[]))?;
        return cmd_show(&store, &settings.db_path, &translator, &console);
    }

    let request = Request {
        email: cli.email,
        token: cli.token.map(Zeroizing::new),
        pause: settings.pause,
    };

    run(request, &store, &translator, &console)
}

/// The interactive update flow: banner, fill in missing values, validate,
/// update, wait for Enter.
///
/// Invalid input is reported and returns `Ok(false)` before the store is
/// touched. `Err` is reserved for terminal I/O failures.
pub fn run<S, W, R>(
    request: Request,
    store: S,
    messages: &dyn MessageSource,
    console: &Console<W, R>,
) -> Result<bool, UpdaterError>
where
    S: CredentialStore,
    W: Write,
    R: BufRead,
{
    console.banner(&messages.get("token_updater.title", &[]))?;

    let email = match request.email.filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => console.prompt(&messages.get("token_updater.enter_email", &[]))?,
    };

    let token = match request.token.filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => Zeroizing::new(console.prompt(&messages.get("token_updater.enter_token", &[]))?),
    };

    if let Err(e) = validate(&email, &token) {
        tracing::warn!(reason = %e, "Input rejected");
        console.report(Status::Error, &messages.get(e.message_key(), &[]));
        return Ok(false);
    }

    let updater = TokenUpdater::new(store, messages, console);
    let updated = updater.update(&email, &token);

    console.rule()?;
    if request.pause {
        console.wait_for_enter(&messages.get("token_updater.press_enter", &[]))?;
    }

    Ok(updated)
}

/// Print the stored account with its token masked.
fn cmd_show<S, W, R>(
    store: S,
    location: &Path,
    messages: &dyn MessageSource,
    console: &Console<W, R>,
) -> Result<bool, UpdaterError>
where
    S: CredentialStore,
    W: Write,
    R: BufRead,
{
    match store.get_credentials()? {
        Some(record) => {
            let masked = record.masked_token();
            let line = messages.get(
                "token_updater.current_account",
                &[("email", record.email.as_str()), ("token", masked.as_str())],
            );
            console.report(Status::Info, &line);
            Ok(true)
        }
        None => {
            let path = location.display().to_string();
            let line = messages.get("token_updater.no_account", &[("path", path.as_str())]);
            console.report(Status::Info, &line);
            Ok(false)
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
