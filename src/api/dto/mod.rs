pub mod records_dto;
