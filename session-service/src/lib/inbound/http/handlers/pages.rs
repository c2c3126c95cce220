use axum::response::Html;

const REGISTER_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Register</title></head>
<body>
  <h1>Register</h1>
  <form method="post" action="/register">
    <label>Username <input type="text" name="username" required></label>
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Register</button>
  </form>
  <p><a href="/login">Already registered? Log in</a></p>
</body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Login</title></head>
<body>
  <h1>Login</h1>
  <form method="post" action="/login">
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Log in</button>
  </form>
  <p><a href="/register">No account? Register</a></p>
</body>
</html>
"#;

pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
