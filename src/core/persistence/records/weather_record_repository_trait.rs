use async_trait::async_trait;

use super::store_error::StoreError;
use super::weather_record_entity::{WeatherRecordEntity, WeatherRecordStatsEntity};
use super::weather_record_queries::SortDirection;

/// Rows to skip and take, already validated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
    pub direction: SortDirection,
}

/// Full-table count plus one slice of rows.
///
/// Both reads share a connection but not a snapshot, so `total_records`
/// may disagree slightly with `records` under concurrent writes.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSlice {
    pub total_records: i64,
    pub records: Vec<WeatherRecordEntity>,
}

/// Read-only access to the weather record table.
#[async_trait]
pub trait WeatherRecordRepository: Send + Sync {
    async fn load_page(&self, window: PageWindow) -> Result<RecordSlice, StoreError>;

    async fn load_stats(&self) -> Result<WeatherRecordStatsEntity, StoreError>;
}
