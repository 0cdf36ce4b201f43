use axum::{
    extract::{Json, State},
    http::StatusCode,
    Extension,
};

use super::IdeaBody;
use crate::database::models::Idea;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// POST /api/ideas - create an idea owned by the acting user
///
/// The owner always comes from the verified identity, never from the body.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<IdeaBody>,
) -> Result<(StatusCode, Json<Idea>), ApiError> {
    let draft = body.into_draft()?;

    let idea = state.ideas.insert(user.id, draft).await?;

    tracing::info!(idea_id = %idea.id, owner = %user.id, "created idea");

    Ok((StatusCode::CREATED, Json(idea)))
}
