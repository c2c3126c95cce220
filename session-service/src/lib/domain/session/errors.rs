use thiserror::Error;

use crate::user::errors::UserError;

/// Reasons the gate refuses to attach an identity to a request.
#[derive(Debug, Clone, Error)]
pub enum AuthGateError {
    #[error("No access token presented")]
    MissingToken,

    #[error("Access token rejected: {0}")]
    InvalidToken(#[from] auth::JwtError),

    #[error("Token subject does not match any user")]
    IdentityNotFound,

    /// The store could not answer. Not an authentication outcome.
    #[error("User store failure: {0}")]
    Store(UserError),
}
