use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::detail;
use super::handlers::current_user::home;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::pages::login_page;
use super::handlers::pages::register_page;
use super::handlers::register_user::register_user;
use super::middleware::require_identity;
use crate::domain::session::gate::AuthGate;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub auth_gate: Arc<AuthGate>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let auth_gate = Arc::new(AuthGate::new(
        Arc::clone(&authenticator),
        Arc::clone(&user_service),
    ));

    let state = AppState {
        user_service,
        authenticator,
        auth_gate,
    };

    let public_routes = Router::new()
        .route("/register", get(register_page).post(register_user))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout));

    let protected_routes = Router::new()
        .route("/home", get(home))
        .route("/detail", get(detail))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    // Headers are left out of the span: they carry the session cookie.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use auth::SigningSecret;
    use axum::http::header;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::RegisterUserCommand;
    use crate::domain::user::models::User;

    mock! {
        pub TestUserService {}

        #[async_trait]
        impl UserServicePort for TestUserService {
            async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;
            async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;
            async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        let secret = SigningSecret::new("test-secret-key-for-jwt-signing-at-least-32-bytes").unwrap();
        Arc::new(Authenticator::new(&secret, chrono::Duration::minutes(15)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_failure_behind_gate_is_internal_error() {
        let authenticator = authenticator();
        let mut user_service = MockTestUserService::new();
        user_service
            .expect_get_user_by_email()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let token = authenticator.issue_token("b@x.com").unwrap();
        let router = create_router(Arc::new(user_service), authenticator);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/home")
                    .header(header::COOKIE, format!("access_token={}", token.to_bearer()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());

        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_gate_does_not_touch_store_without_cookie() {
        let mut user_service = MockTestUserService::new();
        user_service.expect_get_user_by_email().never();

        let router = create_router(Arc::new(user_service), authenticator());

        let response = router
            .oneshot(Request::builder().uri("/detail").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

        let body = body_json(response).await;
        assert_eq!(body["data"]["message"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_public_pages_skip_gate() {
        let mut user_service = MockTestUserService::new();
        user_service.expect_get_user_by_email().never();

        let router = create_router(Arc::new(user_service), authenticator());

        let response = router
            .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
