use axum::{
    extract::{Json, Path, State},
    Extension,
};
use serde_json::{json, Value};

use super::{idea_not_found, parse_idea_id};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// DELETE /api/ideas/:id - remove an idea, owner only. Irreversible.
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_idea_id(&id)?;

    let existing = state.ideas.find(id).await?.ok_or_else(idea_not_found)?;

    if existing.user_id != user.id {
        return Err(ApiError::forbidden("Not authorized to delete this idea"));
    }

    if !state.ideas.delete(id).await? {
        return Err(idea_not_found());
    }

    tracing::info!(idea_id = %id, owner = %user.id, "deleted idea");

    Ok(Json(json!({ "message": "Idea deleted successfully" })))
}
