use std::sync::Arc;

use crate::core::persistence::records::weather_record_repository_trait::WeatherRecordRepository;
use crate::domain::records::service::records_service::RecordsService;

/// Handed to every handler; the repository owns the process-wide pool.
#[derive(Clone)]
pub struct AppState {
    pub records_service: Arc<RecordsService>,
}

pub fn build_app_state(repo: Arc<dyn WeatherRecordRepository>, max_per_page: i64) -> AppState {
    AppState {
        records_service: Arc::new(RecordsService::new(repo, max_per_page)),
    }
}
