//! Post-text entity extraction engine.
//!
//! A single left-to-right pass over the text's characters. At every position
//! not already consumed by an earlier match the driver classifies the
//! character, checks whether a candidate may start there, and dispatches to
//! the matching recognizer:
//!
//! - [`tags`] - hashtags (`#`), mentions (`@`) and suppressed cashtags (`$`)
//! - [`url`] - domain-like runs, with or without a scheme
//!
//! Accepted matches go through [`span`] for truncation and offset conversion.
//! Because the cursor only ever moves forward past consumed runs, entities
//! come out sorted by `start` and never overlap.
//!
//! # Example
//!
//! ```
//! use post_entities::extractor::extract;
//! use post_entities::domain::entities::PostEntityType;
//!
//! let entities = extract(1, "Hi @john_doe! #rust github.com").unwrap();
//!
//! assert_eq!(entities.len(), 3);
//! assert_eq!(entities[0].entity_type, PostEntityType::Mention);
//! assert_eq!(entities[0].value, "john_doe");
//! assert_eq!((entities[0].start, entities[0].end), (3, 12));
//! ```

pub mod boundary;
pub mod classify;
pub mod span;
pub mod tags;
pub mod url;

use crate::config::ExtractorConfig;
use crate::domain::entities::PostEntity;
use crate::error::ExtractError;
use boundary::{is_marker_boundary, is_url_boundary};
use classify::{CharClass, classify};
use span::{OffsetMap, Scan, TruncationPolicy};

/// Extracts entities with [`ExtractorConfig::default`].
///
/// See [`EntityExtractor::extract`].
pub fn extract<'a, Id: Clone>(
    post_id: Id,
    text: impl Into<Option<&'a str>>,
) -> Result<Vec<PostEntity<Id>>, ExtractError> {
    EntityExtractor::default().extract(post_id, text)
}

/// Configured extractor. Holds no per-call state and can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    config: ExtractorConfig,
}

impl EntityExtractor {
    /// Creates an extractor. A `max_mention_length` of 0 is raised to 1 so a
    /// mention always keeps at least one body char.
    pub fn new(mut config: ExtractorConfig) -> Self {
        if config.max_mention_length == 0 {
            tracing::warn!("max_mention_length of 0 raised to 1");
            config.max_mention_length = 1;
        }
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts every hashtag, mention and URL from `text`.
    ///
    /// `text` accepts `&str` or `Option<&str>`; `None` stands for a missing
    /// text. An empty or entity-free text yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingText`] if `text` is `None`.
    ///
    /// Returns [`ExtractError::TextTooLong`] if `max_text_length` is set and
    /// the text has more characters than that.
    pub fn extract<'a, Id: Clone>(
        &self,
        post_id: Id,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Vec<PostEntity<Id>>, ExtractError> {
        let text = text.into().ok_or(ExtractError::MissingText)?;
        let chars: Vec<char> = text.chars().collect();

        if let Some(max) = self.config.max_text_length
            && chars.len() > max
        {
            tracing::warn!(length = chars.len(), max, "post text exceeds maximum length");
            return Err(ExtractError::TextTooLong {
                length: chars.len(),
                max,
            });
        }

        let offsets = OffsetMap::new(text, &chars, self.config.offset_unit);
        let policy = TruncationPolicy {
            max_mention_length: self.config.max_mention_length,
        };

        let mut entities = Vec::new();
        let mut cursor = 0;

        while cursor < chars.len() {
            match scan_at(&chars, cursor) {
                Scan::Emit(raw, next) => {
                    entities.push(span::build(&post_id, &raw, &chars, &offsets, &policy));
                    cursor = next;
                }
                Scan::Skip(next) => cursor = next,
                Scan::Miss => cursor += 1,
            }
        }

        tracing::debug!(
            chars = chars.len(),
            entities = entities.len(),
            "post entities extracted"
        );

        Ok(entities)
    }
}

fn scan_at(chars: &[char], cursor: usize) -> Scan {
    match classify(chars[cursor]) {
        CharClass::Marker(marker) if is_marker_boundary(chars, cursor) => {
            tags::scan_marker(chars, cursor, marker)
        }
        CharClass::Word
            if is_url_boundary(chars, cursor) && url::looks_like_domain_start(chars, cursor) =>
        {
            url::match_url(chars, cursor)
        }
        _ => Scan::Miss,
    }
}
