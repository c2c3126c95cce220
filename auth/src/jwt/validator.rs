use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::JwtError;
use super::secret::SigningSecret;

/// Scheme prefix every raw token must carry.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Verifies access tokens issued by [`super::TokenIssuer`].
///
/// The algorithm is pinned to HS256, `exp` and `sub` are required, and no
/// clock leeway is granted.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // Expiry is checked in `validate_at` against the caller's clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a `Bearer <token>` string against the current time.
    ///
    /// # Errors
    /// * `InvalidToken` - Any check failed
    pub fn validate(&self, raw_token: &str) -> Result<TokenClaims, JwtError> {
        self.validate_at(raw_token, Utc::now())
    }

    /// Validate a `Bearer <token>` string as if the current time were `now`.
    ///
    /// Checks, in order: the prefix, the signature and payload shape, `exp`
    /// strictly after `now`, and a non-empty `sub`.
    ///
    /// # Errors
    /// * `InvalidToken` - Any check failed
    pub fn validate_at(&self, raw_token: &str, now: DateTime<Utc>) -> Result<TokenClaims, JwtError> {
        let token = raw_token
            .strip_prefix(BEARER_PREFIX)
            .filter(|token| !token.is_empty())
            .ok_or(JwtError::InvalidToken)?;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| JwtError::InvalidToken)?
            .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::InvalidToken);
        }

        if claims.sub.trim().is_empty() {
            return Err(JwtError::InvalidToken);
        }

        Ok(claims)
    }
}
