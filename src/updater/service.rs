// Token Updater: Update service
//
// Single request/response operation. Inputs are validated by the caller;
// this layer only talks to the store and reports what happened.

use crate::console::{Status, StatusReporter};
use crate::i18n::MessageSource;
use crate::store::CredentialStore;

use super::UpdateError;

/// Writes an account's email and token into a `CredentialStore`.
///
/// The message source and status reporter are injected so the same updater
/// runs against a terminal, a test recorder, or anything else.
pub struct TokenUpdater<'a, S> {
    store: S,
    messages: &'a dyn MessageSource,
    reporter: &'a dyn StatusReporter,
}

impl<'a, S: CredentialStore> TokenUpdater<'a, S> {
    pub fn new(store: S, messages: &'a dyn MessageSource, reporter: &'a dyn StatusReporter) -> Self {
        Self {
            store,
            messages,
            reporter,
        }
    }

    /// Store `token` as both the access and the refresh token for `email`.
    ///
    /// Never panics on store failure: a declined write is `Rejected`, a
    /// store error is returned as `Store`.
    pub fn try_update(&self, email: &str, token: &str) -> Result<(), UpdateError> {
        self.say(Status::Progress, "token_updater.updating_token", &[], true);

        match self.store.set_credentials(email, token, token) {
            Ok(true) => {
                tracing::info!(email = %email, "Token updated");
                self.say(Status::Success, "token_updater.token_updated", &[], true);
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(email = %email, "Credential store declined the update");
                self.say(Status::Error, "token_updater.token_update_failed", &[], true);
                Err(UpdateError::Rejected)
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Token update failed");
                let detail = e.to_string();
                self.say(Status::Error, "token_updater.error", &[("error", detail.as_str())], false);
                Err(UpdateError::Store(e))
            }
        }
    }

    /// `true` if the store accepted the update.
    pub fn update(&self, email: &str, token: &str) -> bool {
        self.try_update(email, token).is_ok()
    }

    fn say(&self, status: Status, key: &str, args: &[(&str, &str)], ellipsis: bool) {
        let mut message = self.messages.get(key, args);
        if ellipsis {
            message.push_str("...");
        }
        self.reporter.report(status, &message);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
