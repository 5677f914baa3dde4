// Token Updater: Input validation gate
//
// Shape checks applied before the updater runs. Nothing here touches the store.

use thiserror::Error;

/// Shortest access token accepted, in characters.
pub const MIN_TOKEN_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email address must contain '@'")]
    InvalidEmail,

    #[error("access token must be at least {} characters", MIN_TOKEN_LEN)]
    InvalidToken,
}

impl ValidationError {
    /// Message key describing this failure to the user.
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "token_updater.invalid_email",
            ValidationError::InvalidToken => "token_updater.invalid_token",
        }
    }
}

/// Check the email first, then the token.
pub fn validate(email: &str, token: &str) -> Result<(), ValidationError> {
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    if token.chars().count() < MIN_TOKEN_LEN {
        return Err(ValidationError::InvalidToken);
    }

    Ok(())
}
