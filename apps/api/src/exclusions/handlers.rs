//! Axum route handlers for the Exclusion API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddExclusionRequest {
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct ExclusionListResponse {
    pub keywords: Vec<String>,
}

/// GET /api/v1/exclusions/:user_id
///
/// Returns the user's current keyword blacklist.
pub async fn handle_list_exclusions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ExclusionListResponse>, AppError> {
    let keywords = state.exclusions.list(user_id).await?;
    Ok(Json(ExclusionListResponse { keywords }))
}

/// POST /api/v1/exclusions/:user_id
///
/// Adds a keyword to the user's blacklist and returns the updated list.
/// The keyword is normalized (lowercase + trim); duplicates are no-ops.
pub async fn handle_add_exclusion(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<AddExclusionRequest>,
) -> Result<Json<ExclusionListResponse>, AppError> {
    if request.keyword.trim().is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }

    state.exclusions.add(user_id, &request.keyword).await?;

    let keywords = state.exclusions.list(user_id).await?;
    Ok(Json(ExclusionListResponse { keywords }))
}

/// DELETE /api/v1/exclusions/:user_id/:keyword
///
/// Removes a keyword from the user's blacklist and returns the updated list.
pub async fn handle_remove_exclusion(
    State(state): State<AppState>,
    Path((user_id, keyword)): Path<(Uuid, String)>,
) -> Result<Json<ExclusionListResponse>, AppError> {
    state.exclusions.remove(user_id, &keyword).await?;

    let keywords = state.exclusions.list(user_id).await?;
    Ok(Json(ExclusionListResponse { keywords }))
}
