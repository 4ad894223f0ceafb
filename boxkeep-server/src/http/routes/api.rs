//! Versioned JSON API - search and move
//!
//! - GET   /api/v0/box?search=text
//! - PATCH /api/v0/item/move  { "targetBox": 1, "sourceBox": 2, "sourceItem": 10 }

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, patch},
    Json, Router,
};
use boxkeep_core::{Container, MoveOutcome};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub message: &'static str,
    pub count: usize,
    pub result: Vec<Container>,
}

/// Move request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub target_box: i64,
    pub source_box: i64,
    pub source_item: i64,
}

/// Move response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub message: &'static str,
    pub id: i64,
    pub old_box_id: i64,
    pub new_box_id: i64,
    pub outcome: MoveOutcome,
}

/// GET /api/v0/box - boxes whose name or label contains the search text
async fn search_boxes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let result = state.store.containers().find_by_text(&params.search).await?;
    Ok(Json(SearchResponse {
        message: "success",
        count: result.len(),
        result,
    }))
}

/// PATCH /api/v0/item/move - move an item between boxes
async fn move_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let outcome = state
        .store
        .items()
        .move_item(req.source_box, req.target_box, req.source_item)
        .await?;

    let message = match outcome {
        MoveOutcome::Moved => "item moved",
        MoveOutcome::Unchanged => "item not in source box",
    };

    Ok(Json(MoveResponse {
        message,
        id: req.source_item,
        old_box_id: req.source_box,
        new_box_id: req.target_box,
        outcome,
    }))
}

/// API v0 routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v0/box", get(search_boxes))
        .route("/api/v0/item/move", patch(move_item))
}
