//! Offset/page-count arithmetic for offset-based pagination.

use crate::core::persistence::records::weather_record_repository_trait::PageWindow;

use super::dto::page_request::PageRequest;
use super::records_error::RecordsError;

/// Rows skipped before `page` when pages hold `per_page` rows.
///
/// Callers validate `page >= 1` and `per_page >= 1` first.
pub fn offset_for(page: i64, per_page: i64) -> Option<i64> {
    (page - 1).checked_mul(per_page)
}

/// `ceil(total_records / per_page)`, 0 for an empty table.
pub fn total_pages(total_records: i64, per_page: i64) -> i64 {
    if total_records <= 0 || per_page <= 0 {
        return 0;
    }
    total_records / per_page + i64::from(total_records % per_page != 0)
}

/// Window for a validated request.
pub fn window_for(request: &PageRequest) -> Result<PageWindow, RecordsError> {
    let offset = offset_for(request.page, request.per_page)
        .ok_or_else(|| RecordsError::invalid("page", "page is too large"))?;

    Ok(PageWindow {
        limit: request.per_page,
        offset,
        direction: request.order,
    })
}
