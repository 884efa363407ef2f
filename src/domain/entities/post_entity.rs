//! Post entity representing a single recognized span in post text.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::url_normalizer::link_target;

/// Kind of span recognized in post text.
///
/// Cashtags are recognized by the scanner but never surface as a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostEntityType {
    Hashtag,
    Mention,
    Url,
}

impl PostEntityType {
    /// Returns the persisted name of the type (`HASHTAG`, `MENTION`, `URL`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PostEntityType::Hashtag => "HASHTAG",
            PostEntityType::Mention => "MENTION",
            PostEntityType::Url => "URL",
        }
    }
}

impl fmt::Display for PostEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit in which `start`/`end` offsets are reported.
///
/// Scanning always walks `char`s; the unit only changes how the final
/// offsets are counted. All units agree on ASCII text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-8 bytes, directly usable with `&text[start..end]`.
    Bytes,
    /// UTF-16 code units.
    Utf16,
}

impl OffsetUnit {
    /// Number of units a single character occupies.
    pub fn width(self, c: char) -> usize {
        match self {
            OffsetUnit::Chars => 1,
            OffsetUnit::Bytes => c.len_utf8(),
            OffsetUnit::Utf16 => c.len_utf16(),
        }
    }

    /// Converts a `[start, end)` range in this unit into a byte range of `text`.
    ///
    /// Returns `None` if either bound is past the end of the text or falls
    /// inside a character.
    pub fn byte_range(self, text: &str, start: usize, end: usize) -> Option<Range<usize>> {
        if start > end {
            return None;
        }

        if self == OffsetUnit::Bytes {
            return (text.is_char_boundary(start) && text.is_char_boundary(end))
                .then_some(start..end);
        }

        let mut from = None;
        let mut to = None;
        let mut pos = 0;

        for (byte, c) in text.char_indices() {
            if pos == start {
                from = Some(byte);
            }
            if pos == end {
                to = Some(byte);
                break;
            }
            pos += self.width(c);
        }

        if pos == start && from.is_none() {
            from = Some(text.len());
        }
        if pos == end && to.is_none() {
            to = Some(text.len());
        }

        Some(from?..to?)
    }
}

/// Error returned when parsing an unknown offset unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown offset unit '{0}' (expected 'chars', 'bytes' or 'utf16')")]
pub struct ParseOffsetUnitError(pub String);

impl FromStr for OffsetUnit {
    type Err = ParseOffsetUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "char" => Ok(OffsetUnit::Chars),
            "bytes" | "byte" | "utf8" => Ok(OffsetUnit::Bytes),
            "utf16" | "utf-16" => Ok(OffsetUnit::Utf16),
            _ => Err(ParseOffsetUnitError(s.to_string())),
        }
    }
}

/// A hashtag, mention, or URL found in the text of a post.
///
/// Offsets are half-open (`[start, end)`) and cover the marker plus body for
/// hashtags and mentions, or the full matched run for URLs. `value` holds the
/// body without its marker. Entities are computed once from immutable post
/// text and persisted keyed by `(post_id, type, start)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostEntity<Id> {
    pub post_id: Id,
    #[serde(rename = "type")]
    pub entity_type: PostEntityType,
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl<Id> PostEntity<Id> {
    /// Creates a new PostEntity instance.
    pub fn new(
        post_id: Id,
        entity_type: PostEntityType,
        start: usize,
        end: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            post_id,
            entity_type,
            start,
            end,
            value: value.into(),
        }
    }

    /// Persistence key of the entity.
    pub fn key(&self) -> (&Id, PostEntityType, usize) {
        (&self.post_id, self.entity_type, self.start)
    }

    /// Length of the span in the unit it was extracted with.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Re-slices the source text with this entity's offsets.
    ///
    /// `unit` must be the unit the entity was extracted with.
    pub fn slice<'t>(&self, text: &'t str, unit: OffsetUnit) -> Option<&'t str> {
        let range = unit.byte_range(text, self.start, self.end)?;
        text.get(range)
    }

    /// Absolute `http(s)` target for URL entities, `None` for other types or
    /// values that do not form a valid link.
    pub fn link_target(&self) -> Option<String> {
        match self.entity_type {
            PostEntityType::Url => link_target(&self.value).ok(),
            _ => None,
        }
    }
}

impl<Id> fmt::Display for PostEntity<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{},{}]",
            self.value, self.entity_type, self.start, self.end
        )
    }
}
