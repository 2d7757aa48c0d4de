pub mod page_request;
pub mod page_result;
