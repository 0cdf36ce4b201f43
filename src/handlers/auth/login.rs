use axum::{
    extract::{Json, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse},
};

use super::{canonical_email, filled, issue_session, non_blank, LoginRequest};
use crate::auth::password;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login - authenticate and start a session
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (email, password) = match (non_blank(body.email), filled(body.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::validation("Email and password are required")),
    };

    // Unknown email and wrong password must be indistinguishable to the
    // caller: same variant, same status, same message
    let user = state
        .users
        .find_by_email(&canonical_email(email))
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let matches = password::verify(password, user.password_hash.clone()).await?;
    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let (set_cookie, response) = issue_session(&state.tokens, &user)?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, set_cookie)]),
        Json(response),
    ))
}
