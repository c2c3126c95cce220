use crate::domain::user::models::User;

/// The user a request was authenticated as.
///
/// Produced by the gate for a single request and dropped with it.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(User);

impl AuthenticatedIdentity {
    pub fn new(user: User) -> Self {
        Self(user)
    }

    pub fn user(&self) -> &User {
        &self.0
    }
}
