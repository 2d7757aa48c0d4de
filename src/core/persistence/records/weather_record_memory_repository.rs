//! In-memory repository used by service and controller tests.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use super::store_error::StoreError;
use super::weather_record_entity::{WeatherRecordEntity, WeatherRecordStatsEntity};
use super::weather_record_queries::SortDirection;
use super::weather_record_repository_trait::{PageWindow, RecordSlice, WeatherRecordRepository};

#[derive(Default)]
pub struct MemoryWeatherRecordRepository {
    rows: Vec<WeatherRecordEntity>,
    failure: Mutex<Option<StoreError>>,
    pub page_loads: AtomicUsize,
}

impl MemoryWeatherRecordRepository {
    pub fn with_rows(rows: Vec<WeatherRecordEntity>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// `n` hourly observations, inserted oldest first.
    pub fn with_hourly_rows(n: usize) -> Self {
        Self::with_rows(hourly_records(n))
    }

    pub fn failing(err: StoreError) -> Self {
        let repo = Self::default();
        *repo.failure.lock().unwrap() = Some(err);
        repo
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn hourly_records(n: usize) -> Vec<WeatherRecordEntity> {
    let start = NaiveDate::from_ymd_opt(2016, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..n)
        .map(|i| WeatherRecordEntity {
            datetime_utc: Some(
                (start + Duration::hours(i as i64))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            ),
            conditions: Some(if i % 3 == 0 { "Haze" } else { "Smoke" }.to_string()),
            temperature: Some(20.0 + (i % 10) as f64),
            humidity: Some(40.0 + (i % 5) as f64),
            pressure: Some(1010.0),
        })
        .collect()
}

#[async_trait]
impl WeatherRecordRepository for MemoryWeatherRecordRepository {
    async fn load_page(&self, window: PageWindow) -> Result<RecordSlice, StoreError> {
        self.page_loads.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut sorted = self.rows.clone();
        // NULLS LAST in both directions, as the page query does.
        sorted.sort_by(|a, b| match (&a.datetime_utc, &b.datetime_utc) {
            (None, None) => CmpOrdering::Equal,
            (None, Some(_)) => CmpOrdering::Greater,
            (Some(_), None) => CmpOrdering::Less,
            (Some(x), Some(y)) => match window.direction {
                SortDirection::Asc => x.cmp(y),
                SortDirection::Desc => y.cmp(x),
            },
        });

        let records = sorted
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect();

        Ok(RecordSlice {
            total_records: self.rows.len() as i64,
            records,
        })
    }

    async fn load_stats(&self) -> Result<WeatherRecordStatsEntity, StoreError> {
        self.check_failure()?;

        let avg = |f: fn(&WeatherRecordEntity) -> Option<f64>| {
            let values: Vec<f64> = self.rows.iter().filter_map(f).collect();
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        Ok(WeatherRecordStatsEntity {
            total_records: self.rows.len() as i64,
            avg_temperature: avg(|r| r.temperature),
            avg_humidity: avg(|r| r.humidity),
            avg_pressure: avg(|r| r.pressure),
        })
    }
}
