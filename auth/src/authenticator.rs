use chrono::Duration;

use crate::jwt::AccessToken;
use crate::jwt::JwtError;
use crate::jwt::SigningSecret;
use crate::jwt::TokenClaims;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;

/// Token authority combining issuance and validation.
///
/// Built once at startup from the configured secret and shared read-only
/// across requests.
pub struct Authenticator {
    issuer: TokenIssuer,
    validator: TokenValidator,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Key used for both signing and verification
    /// * `token_ttl` - Lifetime of issued access tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(secret: &SigningSecret, token_ttl: Duration) -> Self {
        Self {
            issuer: TokenIssuer::new(secret).with_default_ttl(token_ttl),
            validator: TokenValidator::new(secret),
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.issuer.default_ttl()
    }

    /// Issue an access token for `subject`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<AccessToken, JwtError> {
        self.issuer.issue(subject)
    }

    /// Validate a `Bearer <token>` string and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, forged, expired or has no subject
    pub fn validate_token(&self, raw_token: &str) -> Result<TokenClaims, JwtError> {
        self.validator.validate(raw_token)
    }
}
