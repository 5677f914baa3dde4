// Token Updater: Credential record model
//
// SECURITY: token fields are private and zeroized on drop. They are never
// included in Debug output or log messages.

use std::fmt;

use zeroize::Zeroizing;

/// The persisted login state of one account: email plus its token pair.
pub struct CredentialRecord {
    pub email: String,
    access_token: Zeroizing<String>,
    refresh_token: Zeroizing<String>,
}

impl CredentialRecord {
    pub fn new(email: String, access_token: String, refresh_token: String) -> Self {
        Self {
            email,
            access_token: Zeroizing::new(access_token),
            refresh_token: Zeroizing::new(refresh_token),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// The access token with everything but its first and last four
    /// characters hidden. Short tokens are hidden entirely.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }

        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("email", &self.email)
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
