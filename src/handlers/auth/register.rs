use axum::{
    extract::{Json, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse},
};

use super::{canonical_email, filled, issue_session, non_blank, RegisterRequest};
use crate::auth::password;
use crate::database::store::NewUser;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register - create an account and start a session
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (name, email, password) = match (
        non_blank(body.name),
        non_blank(body.email),
        filled(body.password),
    ) {
        (Some(name), Some(email), Some(password)) => (name, email, password),
        _ => return Err(ApiError::validation("All fields are required")),
    };

    let email = canonical_email(email);

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = password::hash(password).await?;

    // A concurrent registration can still win between the check above and
    // this insert; the store's unique constraint reports it as DuplicateKey
    // and the From impl turns that into the same DuplicateEmail error.
    let user = state
        .users
        .insert(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "registered new user");

    let (set_cookie, response) = issue_session(&state.tokens, &user)?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, set_cookie)]),
        Json(response),
    ))
}
