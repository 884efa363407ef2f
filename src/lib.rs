//! # Post Entities
//!
//! Hashtag, mention and URL extraction for social-feed post text.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entity records and the grouped view
//! - **Extraction Engine** ([`extractor`]) - Single-pass, regex-free scanner
//! - **Application Layer** ([`application`]) - Service used by the post-creation flow
//! - **Utilities** ([`utils`]) - Link targets for URL entities
//!
//! ## Features
//!
//! - Exact half-open offsets in chars, UTF-8 bytes or UTF-16 units
//! - Mention truncation with a configurable cap (20 by default)
//! - Cashtags recognized and discarded
//! - Pure and synchronous: safe to call from any number of threads
//!
//! ## Quick Start
//!
//! ```
//! use post_entities::prelude::*;
//!
//! let entities = extract(42, "Cool #Rust post by @ferris, see rust-lang.org").unwrap();
//!
//! assert_eq!(entities.len(), 3);
//! assert_eq!(entities[0].value, "Rust");
//! assert_eq!(entities[1].entity_type, PostEntityType::Mention);
//! assert_eq!(entities[2].value, "rust-lang.org");
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod telemetry;
pub mod utils;

pub use error::ExtractError;
pub use extractor::{EntityExtractor, extract};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EntityService;
    pub use crate::config::{Config, ExtractorConfig};
    pub use crate::domain::entities::{
        EntitySpan, OffsetUnit, PostEntities, PostEntity, PostEntityType,
    };
    pub use crate::error::ExtractError;
    pub use crate::extractor::{EntityExtractor, extract};
}
