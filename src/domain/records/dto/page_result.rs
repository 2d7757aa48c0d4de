use serde::Serialize;

use crate::core::persistence::records::weather_record_entity::WeatherRecordEntity;

/// Body of `GET /api/records`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    pub records: Vec<WeatherRecordEntity>,
    pub total_records: i64,
    pub total_pages: i64,
    /// Echoes the request, even past the last page.
    pub current_page: i64,
    pub per_page: i64,
}
