//! Domain layer containing the data model produced by extraction.
//!
//! - [`entities`] - Entity records, offset units and the grouped view
//!
//! The domain layer has no dependencies on the scanner; the scanner builds
//! these types (see [`crate::extractor`]).

pub mod entities;
