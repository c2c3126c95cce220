use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

/// A registered account.
///
/// Created at registration and never updated. `password_hash` only ever
/// holds a PHC hash string.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Random v4 identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name chosen at registration: 3 to 32 characters of alphanumerics,
/// `_` or `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// # Errors
    /// `TooShort`, `TooLong` or `InvalidCharacters`, checked in that order.
    pub fn new(raw: String) -> Result<Self, UsernameError> {
        match raw.chars().count() {
            n if n < Self::MIN_LENGTH => {
                return Err(UsernameError::TooShort {
                    min: Self::MIN_LENGTH,
                    actual: n,
                })
            }
            n if n > Self::MAX_LENGTH => {
                return Err(UsernameError::TooLong {
                    max: Self::MAX_LENGTH,
                    actual: n,
                })
            }
            _ => {}
        }

        let allowed = |c: char| c.is_alphanumeric() || c == '_' || c == '-';
        if !raw.chars().all(allowed) {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login identifier and token subject. Parsed as RFC 5322 on construction;
/// the original text is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: String) -> Result<Self, EmailError> {
        if let Err(e) = email_address::EmailAddress::from_str(&raw) {
            return Err(EmailError::InvalidFormat(e.to_string()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated registration form. The password is still plaintext here and is
/// hashed by the service before anything is stored.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}
