use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use crate::core::persistence::records::weather_record_entity::WeatherRecordStatsEntity;
use crate::core::persistence::records::weather_record_repository_trait::WeatherRecordRepository;
use crate::domain::records::dto::page_request::PageRequest;
use crate::domain::records::dto::page_result::PageResult;
use crate::domain::records::pagination::{total_pages, window_for};
use crate::domain::records::records_error::RecordsError;

/// Paginated, read-only view over the weather record table.
///
/// Stateless per call: no caching, one repository round trip per page.
pub struct RecordsService {
    repo: Arc<dyn WeatherRecordRepository>,
    max_per_page: i64,
}

impl RecordsService {
    pub fn new(repo: Arc<dyn WeatherRecordRepository>, max_per_page: i64) -> Self {
        Self { repo, max_per_page }
    }

    pub async fn get_records(&self, request: PageRequest) -> Result<PageResult, RecordsError> {
        request.validate()?;
        if request.per_page > self.max_per_page {
            return Err(RecordsError::invalid(
                "per_page",
                format!("per_page must not exceed {}", self.max_per_page),
            ));
        }

        let window = window_for(&request)?;
        let slice = self.repo.load_page(window).await?;

        debug!(
            offset = window.offset,
            returned = slice.records.len(),
            total_records = slice.total_records,
            "Loaded weather record page"
        );

        Ok(PageResult {
            total_pages: total_pages(slice.total_records, request.per_page),
            total_records: slice.total_records,
            records: slice.records,
            current_page: request.page,
            per_page: request.per_page,
        })
    }

    pub async fn get_stats(&self) -> Result<WeatherRecordStatsEntity, RecordsError> {
        Ok(self.repo.load_stats().await?)
    }
}
