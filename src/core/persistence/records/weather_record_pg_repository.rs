use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::debug;

use crate::config::{DatabaseConfig, DbConnection};

use super::store_error::StoreError;
use super::weather_record_entity::{WeatherRecordEntity, WeatherRecordStatsEntity};
use super::weather_record_queries::WeatherRecordQueries;
use super::weather_record_repository_trait::{PageWindow, RecordSlice, WeatherRecordRepository};

/// Builds the process-wide pool. Connections are opened lazily so the
/// server can start while the database is still coming up.
pub fn build_pg_pool(cfg: &DatabaseConfig) -> Result<PgPool> {
    let options = match &cfg.connection {
        DbConnection::Url(url) => PgConnectOptions::from_str(url)?,
        DbConnection::Parts {
            host,
            port,
            user,
            password,
            database,
        } => PgConnectOptions::new()
            .host(host)
            .port(*port)
            .username(user)
            .password(password)
            .database(database),
    }
    .application_name(env!("CARGO_PKG_NAME"))
    .options([("statement_timeout", cfg.statement_timeout.as_millis().to_string())]);

    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_lazy_with(options);

    debug!(max_connections = cfg.max_connections, "Postgres pool initialized");
    Ok(pool)
}

pub struct PgWeatherRecordRepository {
    pool: PgPool,
    queries: WeatherRecordQueries,
    timeout: Duration,
}

impl PgWeatherRecordRepository {
    pub fn new(pool: PgPool, cfg: &DatabaseConfig) -> Self {
        Self {
            pool,
            queries: WeatherRecordQueries::new(&cfg.table),
            // acquire + two statements
            timeout: cfg.acquire_timeout + cfg.statement_timeout * 2,
        }
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Unavailable(format!("timed out after {:?}", self.timeout)))?
    }
}

#[async_trait]
impl WeatherRecordRepository for PgWeatherRecordRepository {
    async fn load_page(&self, window: PageWindow) -> Result<RecordSlice, StoreError> {
        self.bounded(async {
            // Released back to the pool on drop, success or not.
            let mut conn = self.pool.acquire().await?;

            let total_records: i64 = sqlx::query_scalar(self.queries.count())
                .fetch_one(&mut *conn)
                .await?;

            let records = sqlx::query_as::<_, WeatherRecordEntity>(
                self.queries.page(window.direction),
            )
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&mut *conn)
            .await?;

            Ok::<_, StoreError>(RecordSlice {
                total_records,
                records,
            })
        })
        .await
    }

    async fn load_stats(&self) -> Result<WeatherRecordStatsEntity, StoreError> {
        self.bounded(async {
            let stats = sqlx::query_as::<_, WeatherRecordStatsEntity>(self.queries.stats())
                .fetch_one(&self.pool)
                .await?;
            Ok::<_, StoreError>(stats)
        })
        .await
    }
}
