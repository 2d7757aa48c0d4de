use serde::Serialize;
use sqlx::FromRow;

/// One weather observation, as served by `/api/records`.
///
/// Field names are the aliases produced by the page query; the source
/// column identities live in `weather_record_queries::RECORD_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct WeatherRecordEntity {
    /// Observation timestamp (sort key), rendered as stored. Rows with a
    /// missing timestamp sort last.
    pub datetime_utc: Option<String>,
    /// Free-text conditions, e.g. "Haze".
    pub conditions: Option<String>,
    /// Temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Pressure in millibar.
    pub pressure: Option<f64>,
}

/// Aggregates over the whole table for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct WeatherRecordStatsEntity {
    pub total_records: i64,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_pressure: Option<f64>,
}
