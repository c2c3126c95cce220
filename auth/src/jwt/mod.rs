pub mod claims;
pub mod errors;
pub mod issuer;
pub mod secret;
pub mod ttl;
pub mod validator;

pub use claims::TokenClaims;
pub use errors::ConfigurationError;
pub use errors::JwtError;
pub use issuer::AccessToken;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_TOKEN_TTL_MINUTES;
pub use secret::SigningSecret;
pub use ttl::TokenTtl;
pub use ttl::MAX_TOKEN_TTL_MINUTES;
pub use validator::TokenValidator;
pub use validator::BEARER_PREFIX;
