// Token Updater: Built-in fallback messages
//
// Used when no catalog is available or a catalog lacks a key. English only.

use super::{format_message, MessageSource};

/// Hard-coded English strings for every message the tool prints.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackMessages;

impl FallbackMessages {
    fn template(key: &str) -> Option<&'static str> {
        let template = match key {
            "token_updater.title" => "Cursor Token Updater",
            "token_updater.updating_token" => "Updating token",
            "token_updater.token_updated" => "Token updated successfully",
            "token_updater.token_update_failed" => "Failed to update token",
            "token_updater.error" => "Error while updating token: {error}",
            "token_updater.enter_email" => "Please enter your email address:",
            "token_updater.enter_token" => "Please enter your access token:",
            "token_updater.invalid_email" => "Invalid email address",
            "token_updater.invalid_token" => "Invalid access token",
            "token_updater.press_enter" => "Press Enter to exit",
            "token_updater.current_account" => "Current account: {email} (token {token})",
            "token_updater.no_account" => "No account is stored in {path}",
            _ => return None,
        };
        Some(template)
    }

    /// Whether a fallback string exists for `key`.
    pub fn has(key: &str) -> bool {
        Self::template(key).is_some()
    }
}

impl MessageSource for FallbackMessages {
    fn get(&self, key: &str, args: &[(&str, &str)]) -> String {
        match Self::template(key) {
            Some(template) => format_message(template, args),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_is_formatted() {
        let message = FallbackMessages.get("token_updater.error", &[("error", "locked")]);
        assert_eq!(message, "Error while updating token: locked");
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        assert_eq!(FallbackMessages.get("nope.missing", &[]), "nope.missing");
        assert!(!FallbackMessages::has("nope.missing"));
    }
}
