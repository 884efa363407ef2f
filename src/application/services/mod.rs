//! Business logic services for the application layer.

pub mod entity_service;

pub use entity_service::EntityService;
