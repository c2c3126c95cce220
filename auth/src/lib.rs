//! Authentication primitives for the session service
//!
//! - Password hashing (Argon2id)
//! - HS256 access token issuance and validation
//! - A signing secret type that refuses to be empty or printed
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Authenticator, SigningSecret};
//! use chrono::Duration;
//!
//! let secret = SigningSecret::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let authenticator = Authenticator::new(&secret, Duration::minutes(15));
//!
//! let token = authenticator.issue_token("a@x.com").unwrap();
//! let claims = authenticator.validate_token(&token.to_bearer()).unwrap();
//! assert_eq!(claims.subject(), "a@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::AccessToken;
pub use jwt::ConfigurationError;
pub use jwt::JwtError;
pub use jwt::SigningSecret;
pub use jwt::TokenClaims;
pub use jwt::TokenIssuer;
pub use jwt::TokenTtl;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
