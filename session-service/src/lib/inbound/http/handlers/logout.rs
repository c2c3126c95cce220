use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::inbound::http::cookies::removal_cookie;

/// Drop the session cookie and go back to the login page.
///
/// The token itself stays valid until its `exp`; there is no revocation.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(removal_cookie()), Redirect::to("/login"))
}
