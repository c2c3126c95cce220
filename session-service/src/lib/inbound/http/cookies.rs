use auth::AccessToken;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;

/// Name of the cookie carrying `Bearer <token>`.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Session cookie for a freshly issued token.
///
/// HttpOnly, scoped to the whole site, and without Max-Age or Expires: the
/// browser may keep it after the token inside has expired. The stale token
/// is then rejected by the validator; no server state tracks it.
pub fn session_cookie(token: &AccessToken) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token.to_bearer()))
        .http_only(true)
        .path("/")
        .build()
}

/// Cookie that, once removed from a jar, clears the session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, "")).path("/").build()
}

/// Raw `Bearer <token>` value of the session cookie, if sent.
pub fn access_token(jar: &CookieJar) -> Option<&str> {
    jar.get(ACCESS_TOKEN_COOKIE).map(|cookie| cookie.value())
}

#[cfg(test)]
mod tests {
    use auth::Authenticator;
    use auth::SigningSecret;
    use axum::http::header;
    use axum::http::HeaderMap;
    use axum::http::HeaderValue;
    use chrono::Duration;

    use super::*;

    fn token() -> AccessToken {
        let secret = SigningSecret::new("test-secret-key-for-jwt-signing-at-least-32-bytes").unwrap();
        Authenticator::new(&secret, Duration::minutes(15))
            .issue_token("a@x.com")
            .unwrap()
    }

    #[test]
    fn test_session_cookie_attributes() {
        let token = token();
        let cookie = session_cookie(&token);

        assert_eq!(cookie.name(), "access_token");
        assert_eq!(cookie.value(), format!("Bearer {}", token.as_str()));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.max_age().is_none());
        assert!(cookie.expires().is_none());
    }

    #[test]
    fn test_access_token_from_request_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; access_token=Bearer abc.def.ghi"),
        );
        let jar = CookieJar::from_headers(&headers);

        assert_eq!(access_token(&jar), Some("Bearer abc.def.ghi"));
    }

    #[test]
    fn test_access_token_absent() {
        let jar = CookieJar::from_headers(&HeaderMap::new());

        assert_eq!(access_token(&jar), None);
    }
}
