//! Records API DTOs

use serde::Deserialize;

use crate::core::persistence::records::weather_record_queries::SortDirection;
use crate::domain::records::dto::page_request::{PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::domain::records::records_error::RecordsError;

/// Raw query string of `GET /api/records`.
///
/// Kept as strings so a malformed value becomes a field-level 400
/// instead of an extractor rejection.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RecordsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    /// Only `datetime` is sortable.
    pub sort: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
}

impl RecordsQuery {
    pub fn into_page_request(self) -> Result<PageRequest, RecordsError> {
        let page = parse_int("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let per_page = parse_int("per_page", self.per_page.as_deref(), DEFAULT_PER_PAGE)?;

        if let Some(sort) = present(self.sort.as_deref()) {
            if !sort.eq_ignore_ascii_case("datetime") && sort != "datetime_utc" {
                return Err(RecordsError::invalid("sort", "sort must be `datetime`"));
            }
        }

        let order = match present(self.order.as_deref()) {
            None => SortDirection::default(),
            Some(o) if o.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(o) if o.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(_) => {
                return Err(RecordsError::invalid("order", "order must be `asc` or `desc`"))
            }
        };

        Ok(PageRequest {
            page,
            per_page,
            order,
        })
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_int(field: &str, raw: Option<&str>, default: i64) -> Result<i64, RecordsError> {
    match present(raw) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| RecordsError::invalid(field, format!("{field} must be an integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>) -> RecordsQuery {
        RecordsQuery {
            page: page.map(Into::into),
            per_page: per_page.map(Into::into),
            ..Default::default()
        }
    }

    fn invalid_field(result: Result<PageRequest, RecordsError>) -> String {
        match result {
            Err(RecordsError::InvalidParameter { field, .. }) => field,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn absent_or_blank_values_take_defaults() {
        assert_eq!(
            RecordsQuery::default().into_page_request().unwrap(),
            PageRequest::new(1, 20)
        );
        assert_eq!(
            query(Some(""), Some("  ")).into_page_request().unwrap(),
            PageRequest::new(1, 20)
        );
    }

    #[test]
    fn integers_are_parsed_without_range_checks() {
        assert_eq!(
            query(Some("3"), Some("50")).into_page_request().unwrap(),
            PageRequest::new(3, 50)
        );
        // range is the service's call
        assert_eq!(
            query(Some("-1"), Some("0")).into_page_request().unwrap(),
            PageRequest::new(-1, 0)
        );
    }

    #[test]
    fn non_integers_are_rejected_per_field() {
        assert_eq!(invalid_field(query(Some("two"), None).into_page_request()), "page");
        assert_eq!(invalid_field(query(None, Some("1.5")).into_page_request()), "per_page");
    }

    #[test]
    fn order_and_sort() {
        let q = RecordsQuery {
            sort: Some("datetime".into()),
            order: Some("ASC".into()),
            ..Default::default()
        };
        assert_eq!(q.into_page_request().unwrap().order, SortDirection::Asc);

        let q = RecordsQuery {
            order: Some("sideways".into()),
            ..Default::default()
        };
        assert_eq!(invalid_field(q.into_page_request()), "order");

        let q = RecordsQuery {
            sort: Some("humidity".into()),
            ..Default::default()
        };
        assert_eq!(invalid_field(q.into_page_request()), "sort");
    }
}
