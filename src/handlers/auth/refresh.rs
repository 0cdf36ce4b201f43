use axum::{
    extract::{Json, State},
    http::HeaderMap,
};

use super::AuthResponse;
use crate::auth::cookie;
use crate::database::models::PublicUser;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/refresh - mint a fresh access token from the refresh cookie
///
/// The refresh token is read from the cookie only, never from the body. It is
/// not rotated: the same cookie keeps working until its own expiry. Unlike
/// the auth guard, this path does confirm the user still exists before
/// issuing anything.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, ApiError> {
    let token = cookie::refresh_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("No refresh token"))?;

    let claims = state
        .tokens
        .verify(&token)
        .map_err(|_| ApiError::unauthorized("Invalid refresh token"))?;

    let user = state
        .users
        .find(claims.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("No user"))?;

    let access_token = state.tokens.issue_access(user.id)?;

    Ok(Json(AuthResponse {
        access_token,
        user: PublicUser::from(&user),
    }))
}
