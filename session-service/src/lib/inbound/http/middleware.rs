use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use super::cookies::access_token;
use super::handlers::ApiError;
use crate::domain::session::errors::AuthGateError;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the caller from the session cookie and adds the
/// identity to request extensions.
///
/// Rejections are 401 with `WWW-Authenticate: Bearer`. The reason is logged
/// but the client only sees one of two fixed messages.
pub async fn require_identity(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = state
        .auth_gate
        .resolve(access_token(&jar))
        .await
        .map_err(|e| {
            match &e {
                AuthGateError::Store(_) => tracing::error!(error = %e, "Identity lookup failed"),
                _ => tracing::warn!(
                    reason = %e,
                    uri = %req.uri(),
                    "Rejected unauthenticated request"
                ),
            }
            ApiError::from(e)
        })?;

    tracing::debug!(user_id = %identity.user().id, "Request authenticated");

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
