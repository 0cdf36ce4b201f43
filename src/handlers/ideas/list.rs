use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::database::models::Idea;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
}

/// GET /api/ideas - all ideas, newest-created-first
///
/// `_limit` bounds the result count when it parses as a non-negative
/// integer; anything else means "no bound", not an error.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n >= 0);

    let ideas = state.ideas.list_newest_first(limit).await?;
    Ok(Json(ideas))
}
