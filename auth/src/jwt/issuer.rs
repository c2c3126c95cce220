use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::TokenClaims;
use super::errors::JwtError;
use super::secret::SigningSecret;
use super::validator::BEARER_PREFIX;

/// Lifetime of a token when the caller does not pick one.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Signed compact JWS (`header.payload.signature`).
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token in the `Bearer <token>` form expected by the validator.
    pub fn to_bearer(&self) -> String {
        format!("{}{}", BEARER_PREFIX, self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Issues HS256 access tokens.
///
/// Tokens are self-contained: nothing is recorded server side, and expiry is
/// only enforced through the `exp` claim when the token is validated.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret` and a 15 minute default TTL.
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            default_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Replace the TTL used by [`TokenIssuer::issue`].
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `subject` valid for the default TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<AccessToken, JwtError> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token for `subject` valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<AccessToken, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed or `now + ttl` overflows
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, JwtError> {
        let claims = TokenClaims::new(subject, now, ttl)?;
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map(AccessToken)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SigningSecret::new("my_secret_key_at_least_32_bytes_long!").unwrap())
    }

    #[test]
    fn test_issue_produces_compact_jws() {
        let token = issuer().issue("a@x.com").expect("Failed to issue token");

        let segments: Vec<&str> = token.as_str().split('.').collect();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_default_ttl_is_fifteen_minutes() {
        assert_eq!(issuer().default_ttl(), Duration::minutes(15));

        let issuer = issuer().with_default_ttl(Duration::minutes(5));
        assert_eq!(issuer.default_ttl(), Duration::minutes(5));
    }

    #[test]
    fn test_issue_is_signed_with_hs256() {
        let token = issuer().issue("a@x.com").expect("Failed to issue token");

        let header = jsonwebtoken::decode_header(token.as_str()).expect("Failed to read header");
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn test_to_bearer() {
        let token = issuer().issue("a@x.com").expect("Failed to issue token");

        assert_eq!(token.to_bearer(), format!("Bearer {}", token.as_str()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = issuer().issue("a@x.com").expect("Failed to issue token");

        assert!(!format!("{:?}", token).contains(token.as_str()));
    }

    #[test]
    fn test_issue_with_overflowing_ttl_is_an_error() {
        let result = issuer().issue_with_ttl("a@x.com", Duration::weeks(1_000_000_000));

        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }
}
