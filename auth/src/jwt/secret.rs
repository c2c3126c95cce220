use std::fmt;

use serde::Deserialize;

use super::errors::ConfigurationError;

/// Process-wide HMAC key used to sign and verify access tokens.
///
/// Loaded once at startup and shared read-only. Construction rejects an
/// empty (or whitespace-only) key, and the `Debug` output never contains
/// the key material, so a configuration dump cannot leak it.
#[derive(Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap raw key material.
    ///
    /// # Errors
    /// * `MissingSecret` - The key is empty or only whitespace
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigurationError> {
        let secret = secret.into();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(ConfigurationError::MissingSecret);
        }
        Ok(Self(secret))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<String> for SigningSecret {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
