//! Records controller: connects routes to the paginated record service

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::api::dto::records_dto::RecordsQuery;
use crate::app_state::AppState;
use crate::core::persistence::records::weather_record_entity::WeatherRecordStatsEntity;
use crate::domain::records::dto::page_result::PageResult;
use crate::domain::records::records_error::RecordsError;
use crate::errors::AppError;

pub struct RecordsController;

impl RecordsController {
    pub async fn get_records(
        State(state): State<AppState>,
        query: Result<Query<RecordsQuery>, QueryRejection>,
    ) -> Result<Json<PageResult>, AppError> {
        let correlation_id = Uuid::new_v4();

        // Extractor text stays in the log; the caller gets the usual field error.
        let Query(query) = query.map_err(|rejection| {
            warn!(%correlation_id, rejection = %rejection.body_text(), "Malformed query string");
            AppError::from_records(
                RecordsError::invalid("query", "query string is malformed"),
                correlation_id,
            )
        })?;

        let span = info_span!(
            "get_records",
            %correlation_id,
            page = query.page.as_deref().unwrap_or(""),
            per_page = query.per_page.as_deref().unwrap_or("")
        );

        async move {
            let request = query
                .into_page_request()
                .map_err(|e| AppError::from_records(e, correlation_id))?;

            state
                .records_service
                .get_records(request)
                .await
                .map(Json)
                .map_err(|e| AppError::from_records(e, correlation_id))
        }
        .instrument(span)
        .await
    }

    pub async fn get_stats(
        State(state): State<AppState>,
    ) -> Result<Json<WeatherRecordStatsEntity>, AppError> {
        let correlation_id = Uuid::new_v4();

        state
            .records_service
            .get_stats()
            .instrument(info_span!("get_stats", %correlation_id))
            .await
            .map(Json)
            .map_err(|e| AppError::from_records(e, correlation_id))
    }
}
