use axum::{
    extract::{Json, Path, State},
    Extension,
};

use super::{idea_not_found, parse_idea_id, IdeaBody};
use crate::database::models::Idea;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// PUT /api/ideas/:id - full-field replacement by the owner
///
/// Existence and ownership are settled before the body is even looked at: a
/// non-owner gets 403 no matter how broken their payload is.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<IdeaBody>,
) -> Result<Json<Idea>, ApiError> {
    let id = parse_idea_id(&id)?;

    let existing = state.ideas.find(id).await?.ok_or_else(idea_not_found)?;

    if existing.user_id != user.id {
        return Err(ApiError::forbidden("Not authorized to update this idea"));
    }

    let draft = body.into_draft()?;

    // The row can vanish between the ownership check and the write; that
    // late miss is still just NotFound
    let updated = state
        .ideas
        .replace(id, draft)
        .await?
        .ok_or_else(idea_not_found)?;

    Ok(Json(updated))
}
