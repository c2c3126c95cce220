use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by an access token.
///
/// Fixed shape: a token without `sub` or `exp` does not deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (the user's email address)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl TokenClaims {
    /// Build claims for `subject` valid for `ttl` starting at `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiration falls outside the representable range
    pub fn new(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed("token expiration out of range".to_string())
        })?;

        Ok(Self {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// A token stops being valid at the exact second of `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
