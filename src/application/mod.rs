//! Application layer services.
//!
//! Services wrap the extraction engine for the layers that create and render
//! posts. Persistence and transport stay with those callers.
//!
//! # Available Services
//!
//! - [`services::entity_service::EntityService`] - Entity rows and grouped views for posts

pub mod services;
