//! Item endpoints - edit and delete

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::put, Json, Router};
use serde::Deserialize;

use super::boxes::DeletedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::Quantity;

/// Edit item request
#[derive(Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: String,
    pub quantity: i64,
}

/// PUT /items/{id} - change name and quantity
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<UpdateItemRequest>,
) -> Result<StatusCode, ApiError> {
    let quantity = Quantity::new(req.quantity)?;
    state.store.items().update(id, &req.name, quantity.get()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /items/{id} - remove a single item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store.items().delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "item deleted",
        id,
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items/{id}", put(update_item).delete(delete_item))
}
