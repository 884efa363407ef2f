//! Core domain entities produced by post-text extraction.
//!
//! # Entity Types
//!
//! - [`PostEntity`] - A hashtag, mention or URL span in one post
//! - [`PostEntities`] - The same spans grouped into `hashtags`, `mentions` and `urls`
//!
//! Offsets are reported in an [`OffsetUnit`] chosen by the caller.

pub mod post_entities;
pub mod post_entity;

pub use post_entities::{EntitySpan, PostEntities};
pub use post_entity::{OffsetUnit, ParseOffsetUnitError, PostEntity, PostEntityType};
