use axum::{response::IntoResponse, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::controller::page::PageController;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // HTML shell and its script
        .route("/", get(PageController::index))
        .route("/static/script.js", get(PageController::script))
        // Health check
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes::records_routes::records_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    AppError::NotFound
}
