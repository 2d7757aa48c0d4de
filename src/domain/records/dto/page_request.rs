use validator::Validate;

use crate::core::persistence::records::weather_record_queries::SortDirection;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Parsed, not yet validated, page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: i64,
    #[validate(range(min = 1, message = "per_page must be a positive integer"))]
    pub per_page: i64,
    pub order: SortDirection,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page,
            order: SortDirection::default(),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}
