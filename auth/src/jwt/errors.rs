use thiserror::Error;

/// Raised while loading token settings. Fatal at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("JWT signing secret is missing or empty")]
    MissingSecret,

    #[error(
        "Token lifetime of {0} minutes is out of range (expected 1 to {})",
        super::ttl::MAX_TOKEN_TTL_MINUTES
    )]
    InvalidTtl(i64),
}

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Covers a missing prefix, bad signature, corrupted payload, expiry and
    /// an empty subject alike. Which check failed is not reported.
    #[error("Token is invalid")]
    InvalidToken,
}
