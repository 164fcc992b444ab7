use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::json;

use crate::constants::API_NAME;
use crate::service::AutosService;

pub fn router() -> Router<AutosService> {
    Router::new().route("/health", get(health_check))
}

/// 200 when the record store answers, 503 otherwise; names the store either way.
async fn health_check(
    State(service): State<AutosService>,
) -> (StatusCode, Json<serde_json::Value>) {
    let store = service.store_backend();

    match service.check_store().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "store": store })),
        ),
        Err(e) => {
            tracing::error!("{} Health check failed for {} store: {}", API_NAME, store, e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "store": store })),
            )
        }
    }
}
