use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::SigningSecret;
use auth::TokenIssuer;
use chrono::Duration;
use reqwest::redirect::Policy;
use session_service::domain::user::models::User;
use session_service::domain::user::ports::UserRepository;
use session_service::domain::user::service::UserService;
use session_service::inbound::http::router::create_router;
use session_service::user::errors::UserError;
use tokio::sync::RwLock;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryUserRepository>,
    /// Keeps cookies and does not follow redirects
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

/// User store kept in memory, keyed by email
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let email = user.email.as_str().to_string();

        if users.contains_key(&email) {
            return Err(UserError::EmailAlreadyExists(email));
        }

        users.insert(email, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

impl InMemoryUserRepository {
    pub async fn remove(&self, email: &str) -> Option<User> {
        self.users.write().await.remove(email)
    }

    pub async fn get(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let secret = SigningSecret::new(TEST_SECRET).expect("Invalid test secret");

        let repository = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));
        let authenticator = Arc::new(Authenticator::new(&secret, Duration::minutes(15)));

        let router = create_router(user_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .redirect(Policy::none())
                .build()
                .expect("Failed to create reqwest client"),
            token_issuer: TokenIssuer::new(&secret),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// GET with an explicit session cookie, bypassing the cookie store
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(self.url(path))
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the registration form
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .form(&[("username", username), ("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the login form
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}
