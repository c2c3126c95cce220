use chrono::Duration;
use serde::Deserialize;

use super::errors::ConfigurationError;

/// Longest lifetime a token may be configured with: one year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 366;

/// Configured token lifetime, in whole minutes.
///
/// Must be positive and at most [`MAX_TOKEN_TTL_MINUTES`]; anything else is a
/// startup error rather than a token that is dead on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub struct TokenTtl(i64);

impl TokenTtl {
    /// # Errors
    /// * `InvalidTtl` - Zero, negative, or longer than a year
    pub fn from_minutes(minutes: i64) -> Result<Self, ConfigurationError> {
        if minutes <= 0 || minutes > MAX_TOKEN_TTL_MINUTES {
            return Err(ConfigurationError::InvalidTtl(minutes));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::minutes(self.0)
    }
}

impl TryFrom<i64> for TokenTtl {
    type Error = ConfigurationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_minutes() {
        let ttl = TokenTtl::from_minutes(15).unwrap();
        assert_eq!(ttl.minutes(), 15);
        assert_eq!(ttl.as_duration(), Duration::minutes(15));

        assert!(TokenTtl::from_minutes(MAX_TOKEN_TTL_MINUTES).is_ok());
    }

    #[test]
    fn test_rejects_unusable_minutes() {
        for minutes in [0, -5, MAX_TOKEN_TTL_MINUTES + 1, 1_000_000_000_000, i64::MAX] {
            assert_eq!(
                TokenTtl::from_minutes(minutes),
                Err(ConfigurationError::InvalidTtl(minutes))
            );
        }
    }

    #[test]
    fn test_deserialize_from_integer() {
        let ttl: TokenTtl = serde_json::from_str("30").unwrap();
        assert_eq!(ttl.minutes(), 30);

        assert!(serde_json::from_str::<TokenTtl>("-5").is_err());
    }
}
