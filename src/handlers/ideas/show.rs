use axum::extract::{Json, Path, State};

use super::{idea_not_found, parse_idea_id};
use crate::database::models::Idea;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/ideas/:id - single idea
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, ApiError> {
    let id = parse_idea_id(&id)?;

    let idea = state.ideas.find(id).await?.ok_or_else(idea_not_found)?;
    Ok(Json(idea))
}
