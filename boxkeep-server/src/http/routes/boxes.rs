//! Box endpoints - listing, CRUD, contents, adding items

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use boxkeep_core::{Container, ContentRow, Item, Paginated, Pagination};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::Quantity;

/// Query parameters for the box listing
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub per_page: Option<u32>,
}

/// Create or edit box request
#[derive(Deserialize)]
pub struct BoxRequest {
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
}

/// Create item request
#[derive(Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub name: String,
    pub quantity: i64,
}

/// Id of a freshly created row
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Confirmation of a delete
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Box response
#[derive(Serialize)]
pub struct BoxResponse {
    pub id: i64,
    pub name: String,
    pub label: Option<String>,
    pub display_label: String,
    pub created_at: String,
}

impl From<Container> for BoxResponse {
    fn from(c: Container) -> Self {
        Self {
            display_label: c.display_label().to_owned(),
            id: c.id,
            name: c.name,
            label: c.label,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Item response
#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub added_at: String,
}

impl From<Item> for ItemResponse {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            name: i.name,
            quantity: i.quantity,
            added_at: i.added_at.to_rfc3339(),
        }
    }
}

/// One page of boxes plus navigation hints
#[derive(Serialize)]
pub struct BoxPageResponse {
    #[serde(flatten)]
    pub page: Paginated<BoxResponse>,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<Paginated<BoxResponse>> for BoxPageResponse {
    fn from(page: Paginated<BoxResponse>) -> Self {
        Self {
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            page,
        }
    }
}

/// A box with everything in it
#[derive(Serialize)]
pub struct BoxContentsResponse {
    pub id: i64,
    pub name: String,
    pub label: Option<String>,
    pub display_label: String,
    pub items: Vec<ItemResponse>,
}

impl BoxContentsResponse {
    /// Fold join rows into one box. `rows` is never empty for an existing box.
    fn from_rows(id: i64, rows: Vec<ContentRow>) -> Self {
        let (name, label, display_label) = rows
            .first()
            .map(|r| {
                (
                    r.container_name.clone(),
                    r.container_label.clone(),
                    r.display_label().to_owned(),
                )
            })
            .unwrap_or_default();

        Self {
            id,
            name,
            label,
            display_label,
            items: rows
                .into_iter()
                .filter_map(|r| r.item)
                .map(ItemResponse::from)
                .collect(),
        }
    }
}

/// GET /boxes - newest boxes first, paginated
async fn list_boxes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<BoxPageResponse>, ApiError> {
    let page = Pagination::from_signed(
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(state.page_size),
    );
    let repo = state.store.containers();
    let total = repo.count().await?;
    let boxes = repo.list(page.offset(), page.limit()).await?;

    Ok(Json(Paginated::new(boxes, total, page).map(BoxResponse::from).into()))
}

/// POST /boxes - create a new box
async fn create_box(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BoxRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .store
        .containers()
        .create(&req.name, req.label.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /boxes/{id} - a box and its items
async fn get_box(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<BoxContentsResponse>, ApiError> {
    let rows = state.store.containers().contents(id).await?;
    Ok(Json(BoxContentsResponse::from_rows(id, rows)))
}

/// PUT /boxes/{id} - edit name and label
async fn update_box(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<BoxRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .containers()
        .update(id, &req.name, req.label.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /boxes/{id} - delete a box and everything in it
async fn delete_box(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store.containers().delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "box deleted",
        id,
    }))
}

/// POST /boxes/{id}/items - put a new item in a box
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(req): Json<ItemRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let quantity = Quantity::new(req.quantity)?;
    let item_id = state
        .store
        .items()
        .create(id, &req.name, quantity.get())
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: item_id })))
}

/// Box routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/boxes", get(list_boxes).post(create_box))
        .route("/boxes/{id}", get(get_box).put(update_box).delete(delete_box))
        .route("/boxes/{id}/items", post(create_item))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::http::routes::test_support::TestApp;

    #[tokio::test]
    async fn create_and_fetch_box() {
        let app = TestApp::new().await;

        let (status, body) = app
            .send(Method::POST, "/boxes", Some(json!({"name": "Garage", "label": "A1"})))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();

        let (status, body) = app.send(Method::GET, &format!("/boxes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Garage");
        assert_eq!(body["label"], "A1");
        assert_eq!(body["items"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_box_is_404() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/boxes/31", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/boxes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn unlabeled_box_displays_placeholder() {
        let app = TestApp::new().await;
        let id = app.store.containers().create("Shed", None).await.unwrap();

        let (_, body) = app.send(Method::GET, &format!("/boxes/{id}"), None).await;
        assert!(body["label"].is_null());
        assert_eq!(body["display_label"], "unlabeled");
    }

    #[tokio::test]
    async fn listing_pages_through_boxes() {
        let app = TestApp::new().await;
        for i in 0..12 {
            app.store.containers().create(&format!("box {i}"), None).await.unwrap();
        }

        let (status, body) = app.send(Method::GET, "/boxes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 12);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
        assert_eq!(body["items"][0]["name"], "box 11");
        assert_eq!(body["total_pages"], 3);
        assert_eq!(body["has_next"], true);
        assert_eq!(body["has_prev"], false);

        let (_, body) = app.send(Method::GET, "/boxes?page=3", None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["page"], 3);
        assert_eq!(body["has_next"], false);
        assert_eq!(body["has_prev"], true);

        // Pages below the first clamp to the first
        let (_, body) = app.send(Method::GET, "/boxes?page=-2", None).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["items"][0]["name"], "box 11");
    }

    #[tokio::test]
    async fn update_box_and_missing_box() {
        let app = TestApp::new().await;
        let id = app.store.containers().create("Garage", Some("A1")).await.unwrap();

        let (status, _) = app
            .send(Method::PUT, &format!("/boxes/{id}"), Some(json!({"name": "Loft"})))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let container = app.store.containers().get(id).await.unwrap();
        assert_eq!(container.name, "Loft");
        assert_eq!(container.label, None);

        let (status, _) = app
            .send(Method::PUT, "/boxes/9999", Some(json!({"name": "ghost"})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_box_removes_items() {
        let app = TestApp::new().await;
        let id = app.store.containers().create("Garage", None).await.unwrap();
        let item = app.store.items().create(id, "Drill", 3).await.unwrap();

        let (status, body) = app.send(Method::DELETE, &format!("/boxes/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "box deleted");
        assert!(app.store.items().get(item).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn add_item_to_box() {
        let app = TestApp::new().await;
        let id = app.store.containers().create("Garage", None).await.unwrap();

        let (status, body) = app
            .send(
                Method::POST,
                &format!("/boxes/{id}/items"),
                Some(json!({"name": "Drill", "quantity": 3})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let item_id = body["id"].as_i64().unwrap();

        let (_, body) = app.send(Method::GET, &format!("/boxes/{id}"), None).await;
        assert_eq!(body["items"][0]["id"], item_id);
        assert_eq!(body["items"][0]["quantity"], 3);
    }

    #[tokio::test]
    async fn add_item_rejects_negative_quantity_and_missing_box() {
        let app = TestApp::new().await;
        let id = app.store.containers().create("Garage", None).await.unwrap();

        let (status, _) = app
            .send(
                Method::POST,
                &format!("/boxes/{id}/items"),
                Some(json!({"name": "Drill", "quantity": -1})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .send(
                Method::POST,
                "/boxes/777/items",
                Some(json!({"name": "Drill", "quantity": 1})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
