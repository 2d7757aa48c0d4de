//! Weather record storage: entity, fixed query text and the repository seam.

pub mod store_error;
pub mod weather_record_entity;
pub mod weather_record_pg_repository;
pub mod weather_record_queries;
pub mod weather_record_repository_trait;

#[cfg(test)]
pub mod weather_record_memory_repository;
