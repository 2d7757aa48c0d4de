use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::core::persistence::records::store_error::StoreError;
use crate::domain::records::records_error::RecordsError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";
pub const UNAVAILABLE_MESSAGE: &str = "The service is temporarily unavailable";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidParameter { field: String, message: String },

    #[error("The service is temporarily unavailable")]
    BackingStoreUnavailable { correlation_id: Uuid },

    #[error("An internal error occurred")]
    QueryFailure { correlation_id: Uuid },

    #[error("The requested resource was not found")]
    NotFound,
}

impl AppError {
    /// Maps a domain failure to its HTTP form and logs it under the
    /// request's correlation id. Store messages stay in the log.
    pub fn from_records(err: RecordsError, correlation_id: Uuid) -> Self {
        match err {
            RecordsError::InvalidParameter { field, message } => {
                warn!(%correlation_id, field = %field, %message, "Rejected request parameter");
                AppError::InvalidParameter { field, message }
            }
            RecordsError::Store(StoreError::Unavailable(detail)) => {
                warn!(%correlation_id, %detail, "Backing store unavailable");
                AppError::BackingStoreUnavailable { correlation_id }
            }
            RecordsError::Store(StoreError::Query(detail)) => {
                error!(%correlation_id, %detail, "Weather record query failed");
                AppError::QueryFailure { correlation_id }
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::BackingStoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::QueryFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        // Display strings are fixed per variant, so nothing internal leaks.
        let body = match &self {
            AppError::InvalidParameter { field, message } => json!({
                "error": message,
                "field": field,
            }),
            AppError::BackingStoreUnavailable { correlation_id }
            | AppError::QueryFailure { correlation_id } => json!({
                "error": self.to_string(),
                "correlation_id": correlation_id,
            }),
            AppError::NotFound => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
