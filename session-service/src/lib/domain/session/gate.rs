use std::sync::Arc;

use auth::Authenticator;

use super::errors::AuthGateError;
use super::models::AuthenticatedIdentity;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Resolves the caller behind a raw `Bearer <token>` value.
///
/// Steps run in order and stop at the first failure: the token must be
/// present, must validate, and its subject must name a stored user. Nothing
/// is written on any path, so dropping the future mid-lookup is harmless.
pub struct AuthGate {
    authenticator: Arc<Authenticator>,
    user_service: Arc<dyn UserServicePort>,
}

impl AuthGate {
    /// Create a gate over the shared authenticator and user service.
    pub fn new(authenticator: Arc<Authenticator>, user_service: Arc<dyn UserServicePort>) -> Self {
        Self {
            authenticator,
            user_service,
        }
    }

    /// Run the gate for one request.
    ///
    /// # Arguments
    /// * `raw_token` - Cookie value, `None` when the cookie is absent
    ///
    /// # Returns
    /// Identity to attach to the request
    ///
    /// # Errors
    /// * `MissingToken` - No token was presented
    /// * `InvalidToken` - Token failed validation
    /// * `IdentityNotFound` - Token subject has no matching user
    /// * `Store` - The user lookup itself failed
    pub async fn resolve(
        &self,
        raw_token: Option<&str>,
    ) -> Result<AuthenticatedIdentity, AuthGateError> {
        let raw_token = raw_token.ok_or(AuthGateError::MissingToken)?;

        let claims = self.authenticator.validate_token(raw_token)?;

        match self.user_service.get_user_by_email(claims.subject()).await {
            Ok(user) => Ok(AuthenticatedIdentity::new(user)),
            Err(UserError::NotFoundByEmail(_)) => Err(AuthGateError::IdentityNotFound),
            Err(e) => Err(AuthGateError::Store(e)),
        }
    }
}
