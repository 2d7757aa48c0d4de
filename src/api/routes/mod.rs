//! API route declarations (e.g., /api/*)

pub mod records_routes;
