//! Fixed SQL text for the weather record table.
//!
//! Table and column identities come from configuration and constants only;
//! `LIMIT`/`OFFSET` are always bound parameters.

use std::fmt;

use anyhow::{bail, Result};

/// Source column → public field, with the cast applied in SQL.
#[derive(Debug, Clone, Copy)]
pub struct RecordColumn {
    pub source: &'static str,
    pub field: &'static str,
    pub sql_type: &'static str,
}

/// The source schema keeps the imported CSV headers, leading space included.
pub const RECORD_COLUMNS: [RecordColumn; 5] = [
    RecordColumn { source: "datetime_utc", field: "datetime_utc", sql_type: "text" },
    RecordColumn { source: " _conds", field: "conditions", sql_type: "text" },
    RecordColumn { source: " _tempm", field: "temperature", sql_type: "double precision" },
    RecordColumn { source: " _hum", field: "humidity", sql_type: "double precision" },
    RecordColumn { source: " _pressurem", field: "pressure", sql_type: "double precision" },
];

const SORT_COLUMN: &str = "datetime_utc";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated, optionally schema-qualified table identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName {
    parts: Vec<String>,
}

impl TableName {
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() > 2 {
            bail!("table name `{raw}` has more than one schema qualifier");
        }
        for part in &parts {
            if !is_plain_identifier(part) {
                bail!("table name `{raw}` is not a plain SQL identifier");
            }
        }
        Ok(Self {
            parts: parts.into_iter().map(str::to_owned).collect(),
        })
    }

    pub fn quoted(&self) -> String {
        self.parts
            .iter()
            .map(|p| quote_ident(p))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}

fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Statements built once at startup and reused for every request.
#[derive(Debug, Clone)]
pub struct WeatherRecordQueries {
    count: String,
    page_desc: String,
    page_asc: String,
    stats: String,
}

impl WeatherRecordQueries {
    pub fn new(table: &TableName) -> Self {
        let table = table.quoted();
        let select_list = RECORD_COLUMNS
            .iter()
            .map(|c| format!("{}::{} AS {}", quote_ident(c.source), c.sql_type, c.field))
            .collect::<Vec<_>>()
            .join(", ");
        let page = |direction: SortDirection| {
            format!(
                "SELECT {select_list} FROM {table} ORDER BY {} {} NULLS LAST LIMIT $1 OFFSET $2",
                quote_ident(SORT_COLUMN),
                direction.as_sql(),
            )
        };
        let avg = |field: &str| {
            let column = RECORD_COLUMNS
                .iter()
                .find(|c| c.field == field)
                .map(|c| quote_ident(c.source))
                .unwrap_or_default();
            format!("AVG({column}::double precision) AS avg_{field}")
        };

        Self {
            count: format!("SELECT COUNT(*) FROM {table}"),
            page_desc: page(SortDirection::Desc),
            page_asc: page(SortDirection::Asc),
            stats: format!(
                "SELECT COUNT(*) AS total_records, {}, {}, {} FROM {table}",
                avg("temperature"),
                avg("humidity"),
                avg("pressure"),
            ),
        }
    }

    pub fn count(&self) -> &str {
        &self.count
    }

    pub fn page(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Asc => &self.page_asc,
            SortDirection::Desc => &self.page_desc,
        }
    }

    pub fn stats(&self) -> &str {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries() -> WeatherRecordQueries {
        WeatherRecordQueries::new(&TableName::parse("weather_records").unwrap())
    }

    #[test]
    fn table_name_accepts_plain_and_qualified() {
        assert_eq!(TableName::parse("weather_records").unwrap().quoted(), "\"weather_records\"");
        assert_eq!(
            TableName::parse("public.weather_records").unwrap().quoted(),
            "\"public\".\"weather_records\""
        );
    }

    #[test]
    fn table_name_rejects_injection() {
        assert!(TableName::parse("weather; DROP TABLE x").is_err());
        assert!(TableName::parse("a.b.c").is_err());
        assert!(TableName::parse("").is_err());
        assert!(TableName::parse("1records").is_err());
        assert!(TableName::parse("w\"r").is_err());
    }

    #[test]
    fn page_query_binds_limit_and_offset() {
        let sql = queries().page(SortDirection::Desc).to_owned();
        assert!(sql.ends_with("ORDER BY \"datetime_utc\" DESC NULLS LAST LIMIT $1 OFFSET $2"));
        assert!(queries()
            .page(SortDirection::Asc)
            .contains("ORDER BY \"datetime_utc\" ASC NULLS LAST"));
    }

    #[test]
    fn page_query_maps_source_columns_exactly() {
        let sql = queries().page(SortDirection::Desc).to_owned();
        assert!(sql.contains("\"datetime_utc\"::text AS datetime_utc"));
        assert!(sql.contains("\" _conds\"::text AS conditions"));
        assert!(sql.contains("\" _tempm\"::double precision AS temperature"));
        assert!(sql.contains("\" _hum\"::double precision AS humidity"));
        assert!(sql.contains("\" _pressurem\"::double precision AS pressure"));
        assert!(sql.contains("FROM \"weather_records\""));
    }

    #[test]
    fn count_and_stats_queries() {
        let q = queries();
        assert_eq!(q.count(), "SELECT COUNT(*) FROM \"weather_records\"");
        assert!(q.stats().contains("AVG(\" _tempm\"::double precision) AS avg_temperature"));
        assert!(q.stats().contains("AVG(\" _hum\"::double precision) AS avg_humidity"));
        assert!(q.stats().contains("AVG(\" _pressurem\"::double precision) AS avg_pressure"));
    }
}
