//! The refresh token travels only in an HTTP-only cookie. Production needs
//! `Secure` + `SameSite=None` so the cross-site UI can send it; development
//! stays on `SameSite=Lax` over plain http.

use axum::http::HeaderMap;

use super::REFRESH_TOKEN_TTL_SECS;
use crate::config::Environment;

pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

pub fn refresh_cookie(token: &str, environment: Environment) -> String {
    cookie_with_max_age(token, REFRESH_TOKEN_TTL_SECS, environment)
}

/// Expires the cookie client-side. Already-issued tokens stay valid until
/// their own expiry; there is no server-side session state to clear.
pub fn clear_refresh_cookie(environment: Environment) -> String {
    cookie_with_max_age("", 0, environment)
}

fn cookie_with_max_age(token: &str, max_age_secs: i64, environment: Environment) -> String {
    let attributes = if environment.is_production() {
        "Path=/; HttpOnly; Secure; SameSite=None"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    };

    format!("{REFRESH_COOKIE_NAME}={token}; Max-Age={max_age_secs}; {attributes}")
}

/// Pulls the refresh token out of the `Cookie` request header, if present.
pub fn refresh_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == REFRESH_COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}
