//! Utility functions shared across the crate.
//!
//! - [`url_normalizer`] - Absolute link targets for URL entities

pub mod url_normalizer;
