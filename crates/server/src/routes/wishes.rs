use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use models::wish;

#[derive(Debug, Deserialize)]
pub struct CreateWishInput {
    #[serde(default)]
    pub item: String,
}

/// GET /api/wishes — all wishes, newest first.
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<wish::Model>>, ApiError> {
    let wishes = state.wishes.list_all().await?;
    Ok(Json(wishes))
}

/// POST /api/wishes — persist a new wish, 201 with the assigned id.
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateWishInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let id = state.wishes.submit(&input.item).await?;
    info!(id, "wish created");
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

/// PATCH /api/wishes/:id/fulfill — idempotent; 404 only when the id has no
/// row at all.
pub async fn fulfill(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.wishes.mark_fulfilled(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// DELETE /api/wishes/:id — physical delete.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.wishes.remove(id).await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
