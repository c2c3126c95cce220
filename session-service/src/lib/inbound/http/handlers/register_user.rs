use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

pub async fn register_user(
    State(state): State<AppState>,
    Form(body): Form<RegisterUserForm>,
) -> Result<Redirect, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|_| Redirect::to("/login"))
}

/// Registration form body (raw)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserForm {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterUserFormError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterUserForm {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterUserFormError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let password = self.password;
        Ok(RegisterUserCommand::new(username, email, password))
    }
}

impl From<ParseRegisterUserFormError> for ApiError {
    fn from(err: ParseRegisterUserFormError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
