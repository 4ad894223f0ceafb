//! Liveness of the inventory store
//!
//! `GET /health` counts containers through the pool; a store that cannot be
//! read answers 503.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of boxes, absent when the store could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes: Option<i64>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.store.containers().count().await {
        Ok(boxes) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                boxes: Some(boxes),
            }),
        ),
        Err(e) => {
            tracing::warn!("health check could not reach the store: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    boxes: None,
                }),
            )
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::http::routes::test_support::TestApp;

    #[tokio::test]
    async fn reports_box_count_when_store_is_readable() {
        let app = TestApp::new().await;
        app.store.containers().create("Garage", None).await.unwrap();
        app.store.containers().create("Shed", None).await.unwrap();

        let (status, body) = app.send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["boxes"], 2);
    }

    #[tokio::test]
    async fn closed_store_is_unavailable() {
        let app = TestApp::new().await;
        app.store.close().await;

        let (status, body) = app.send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert!(body.get("boxes").is_none());
    }
}
