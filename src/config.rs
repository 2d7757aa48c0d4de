//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::core::persistence::records::weather_record_queries::TableName;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Upper bound accepted for `per_page`.
    pub max_per_page: i64,
    /// Daily-rolling log files are written here when set.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection: DbConnection,
    pub table: TableName,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Clone)]
pub enum DbConnection {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl fmt::Debug for DbConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbConnection::Url(_) => f.write_str("Url(<redacted>)"),
            DbConnection::Parts {
                host,
                port,
                user,
                database,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("password", &"<redacted>")
                .field("database", database)
                .finish(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| anyhow!("{key} must be set"));

        let connection = match get("WEATHER_DATABASE_URL") {
            Some(url) => DbConnection::Url(url),
            None => DbConnection::Parts {
                host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(&get, "DB_PORT", 5432)?,
                user: require("DB_USER")?,
                password: require("DB_PASSWORD")?,
                database: require("DB_NAME")?,
            },
        };

        let table_raw = get("WEATHER_TABLE_NAME").unwrap_or_else(|| "weather_records".to_string());
        let table = TableName::parse(&table_raw).context("WEATHER_TABLE_NAME")?;

        let max_per_page: i64 = parse_or(&get, "WEATHER_MAX_PER_PAGE", 100)?;
        if max_per_page < 1 {
            return Err(anyhow!("WEATHER_MAX_PER_PAGE must be at least 1"));
        }

        Ok(Self {
            server: ServerConfig {
                host: get("WEATHER_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&get, "WEATHER_SERVER_PORT", 5000)?,
            },
            database: DatabaseConfig {
                connection,
                table,
                max_connections: parse_or(&get, "WEATHER_DB_MAX_CONNECTIONS", 10)?,
                acquire_timeout: Duration::from_millis(parse_or(
                    &get,
                    "WEATHER_DB_ACQUIRE_TIMEOUT_MS",
                    3000,
                )?),
                statement_timeout: Duration::from_millis(parse_or(
                    &get,
                    "WEATHER_DB_STATEMENT_TIMEOUT_MS",
                    5000,
                )?),
            },
            max_per_page,
            log_dir: get("WEATHER_LOG_DIR").map(PathBuf::from),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has invalid value `{raw}`: {e}")),
        None => Ok(default),
    }
}
