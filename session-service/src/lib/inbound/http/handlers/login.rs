use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::cookies::session_cookie;
use crate::inbound::http::router::AppState;

/// Verify credentials, then hand the new token back as a cookie and send the
/// browser to `/home`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(body): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let user = state
        .user_service
        .authenticate(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .authenticator
        .issue_token(user.email.as_str())
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "Token issuance failed");
            ApiError::InternalServerError("Internal server error".to_string())
        })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((jar.add(session_cookie(&token)), Redirect::to("/home")))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}
