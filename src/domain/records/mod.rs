pub mod dto;
pub mod pagination;
pub mod records_error;
pub mod service;
