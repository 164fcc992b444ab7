pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{autos, health};
use service::AutosService;

/// Full application router: `/api/autos` plus `/health`.
pub fn build_app(service: AutosService) -> Router {
    Router::new()
        .nest("/api/autos", autos::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
