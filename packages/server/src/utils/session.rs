use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::AuthConfig;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Build the cookie that establishes a session.
pub fn session_cookie(token: String, auth: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(auth.cookie_secure)
        .max_age(time::Duration::hours(auth.session_ttl_hours))
        .build()
}

/// Build a cookie matching the session cookie's scope, for removal.
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
