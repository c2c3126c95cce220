use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::session::models::AuthenticatedIdentity;
use crate::domain::user::models::User;

pub async fn home(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> ApiSuccess<HomeResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HomeResponseData {
            username: identity.user().username.as_str().to_string(),
        },
    )
}

pub async fn detail(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> ApiSuccess<UserData> {
    ApiSuccess::new(StatusCode::OK, identity.user().into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponseData {
    pub username: String,
}

/// Public view of a user. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
