//! Record routes (e.g., /api/records*)

use axum::{routing::get, Router};
use crate::api::controller::records::RecordsController;
use crate::app_state::AppState;

pub fn records_routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(RecordsController::get_records))
        .route("/records/stats", get(RecordsController::get_stats))
}
