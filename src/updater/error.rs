// Token Updater: Update error types

use thiserror::Error;

use crate::store::StoreError;

/// Why a credential update did not take effect.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("the credential store declined the update")]
    Rejected,

    #[error(transparent)]
    Store(#[from] StoreError),
}
