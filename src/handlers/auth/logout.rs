use axum::{
    extract::Json,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
};
use serde_json::json;

use crate::auth::cookie;
use crate::config;

/// POST /api/auth/logout - drop the client's refresh cookie
///
/// Purely client-side: with no server-side session table there is nothing to
/// invalidate, so tokens already issued remain valid until they expire.
/// Requires no body and no authentication.
pub async fn logout() -> impl IntoResponse {
    let set_cookie = cookie::clear_refresh_cookie(config::config().environment);

    (
        AppendHeaders([(SET_COOKIE, set_cookie)]),
        Json(json!({ "message": "Logged out successfully" })),
    )
}
