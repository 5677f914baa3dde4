// Token Updater: Credential Updater
//
// Forwards a caller-validated email/token pair to the credential store.
// The refresh token is always written with the access token's value.

mod error;
mod service;

pub use error::UpdateError;
pub use service::TokenUpdater;
