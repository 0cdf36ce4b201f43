//! Session lifecycle: register, login, logout, refresh.
//!
//! Register and Login share one issuance path: mint the access + refresh
//! pair, park the refresh token in an HTTP-only cookie and hand the access
//! token (with the public user fields) back in the body.

use serde::{Deserialize, Serialize};

use crate::auth::{cookie, TokenService};
use crate::config;
use crate::database::models::{PublicUser, User};
use crate::error::ApiError;

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;


#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: PublicUser,
}

fn issue_session(tokens: &TokenService, user: &User) -> Result<(String, AuthResponse), ApiError> {
    let access_token = tokens.issue_access(user.id)?;
    let refresh_token = tokens.issue_refresh(user.id)?;
    let set_cookie = cookie::refresh_cookie(&refresh_token, config::config().environment);

    Ok((
        set_cookie,
        AuthResponse {
            access_token,
            user: PublicUser::from(user),
        },
    ))
}

/// `Some` only when the value has content beyond whitespace; the returned
/// string is trimmed. Used for name and email.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`non_blank`] but keeps the value exactly as submitted. Passwords
/// are hashed verbatim, whitespace included.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Emails are matched case-insensitively, so they are stored lowercased.
fn canonical_email(email: String) -> String {
    email.to_lowercase()
}
