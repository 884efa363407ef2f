//! Turning raw matches into finalized entity records.
//!
//! Matchers work in `char` indices and report the full run they recognized.
//! This module applies the per-type length rules and converts indices into
//! the configured [`OffsetUnit`].

use super::classify::is_word;
use crate::domain::entities::{OffsetUnit, PostEntity, PostEntityType};

/// A recognized run, in `char` indices, before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub entity_type: PostEntityType,
    /// Index of the marker (or the first URL char).
    pub start: usize,
    /// End of the full run.
    pub end: usize,
    /// First char of `value`; `start + 1` for marker types, `start` for URLs.
    pub body_start: usize,
}

/// Outcome of running a matcher at one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Emit the match and resume scanning at `next`.
    Emit(RawMatch, usize),
    /// A run was consumed without producing an entity.
    Skip(usize),
    /// Nothing recognized; the driver moves on by one char.
    Miss,
}

/// Per-type length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    pub max_mention_length: usize,
}

impl TruncationPolicy {
    /// End of the emitted span after applying the length cap.
    ///
    /// Mentions keep at most `max_mention_length` body chars; hashtags and
    /// URLs are never cut.
    pub fn clamp_end(&self, raw: &RawMatch) -> usize {
        match raw.entity_type {
            PostEntityType::Mention => raw.end.min(raw.body_start + self.max_mention_length),
            PostEntityType::Hashtag | PostEntityType::Url => raw.end,
        }
    }
}

/// Maps `char` indices of one text to offsets in a given unit.
#[derive(Debug)]
pub struct OffsetMap {
    // Prefix sums of char widths; `None` when indices map to themselves.
    table: Option<Vec<usize>>,
}

impl OffsetMap {
    pub fn new(text: &str, chars: &[char], unit: OffsetUnit) -> Self {
        if unit == OffsetUnit::Chars || text.is_ascii() {
            return Self { table: None };
        }

        let mut table = Vec::with_capacity(chars.len() + 1);
        let mut acc = 0;
        table.push(acc);
        for &c in chars {
            acc += unit.width(c);
            table.push(acc);
        }

        Self { table: Some(table) }
    }

    pub fn get(&self, index: usize) -> usize {
        match &self.table {
            Some(table) => table[index],
            None => index,
        }
    }
}

/// Builds the output record for a raw match.
pub fn build<Id: Clone>(
    post_id: &Id,
    raw: &RawMatch,
    chars: &[char],
    offsets: &OffsetMap,
    policy: &TruncationPolicy,
) -> PostEntity<Id> {
    let mut end = policy.clamp_end(raw);
    // Inside a run every non-word char is a mark; keep it with its base.
    while end < raw.end && !is_word(chars[end]) {
        end += 1;
    }
    let value: String = chars[raw.body_start..end].iter().collect();

    PostEntity::new(
        post_id.clone(),
        raw.entity_type,
        offsets.get(raw.start),
        offsets.get(end),
        value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    const POLICY: TruncationPolicy = TruncationPolicy {
        max_mention_length: 20,
    };

    #[test]
    fn test_build_hashtag_strips_marker() {
        let text = "#Hello!";
        let chars = chars(text);
        let raw = RawMatch {
            entity_type: PostEntityType::Hashtag,
            start: 0,
            end: 6,
            body_start: 1,
        };

        let entity = build(
            &1,
            &raw,
            &chars,
            &OffsetMap::new(text, &chars, OffsetUnit::Chars),
            &POLICY,
        );

        assert_eq!(entity, PostEntity::new(1, PostEntityType::Hashtag, 0, 6, "Hello"));
    }

    #[test]
    fn test_build_truncates_mention_only() {
        let text = "@abcdefghijklmnopqrstuvwxyz";
        let chars = chars(text);
        let offsets = OffsetMap::new(text, &chars, OffsetUnit::Chars);

        let mention = RawMatch {
            entity_type: PostEntityType::Mention,
            start: 0,
            end: 27,
            body_start: 1,
        };
        let entity = build(&1, &mention, &chars, &offsets, &POLICY);
        assert_eq!(entity.end, 21);
        assert_eq!(entity.value, "abcdefghijklmnopqrst");

        let hashtag = RawMatch {
            entity_type: PostEntityType::Hashtag,
            ..mention
        };
        let entity = build(&1, &hashtag, &chars, &offsets, &POLICY);
        assert_eq!(entity.end, 27);
        assert_eq!(entity.value.len(), 26);
    }

    #[test]
    fn test_build_truncation_keeps_trailing_mark() {
        let text = "@abc\u{301}def";
        let chars = chars(text);
        let raw = RawMatch {
            entity_type: PostEntityType::Mention,
            start: 0,
            end: 8,
            body_start: 1,
        };
        let policy = TruncationPolicy {
            max_mention_length: 3,
        };

        let entity = build(
            &1,
            &raw,
            &chars,
            &OffsetMap::new(text, &chars, OffsetUnit::Chars),
            &policy,
        );

        assert_eq!(entity.end, 5);
        assert_eq!(entity.value, "abc\u{301}");
    }

    #[test]
    fn test_clamp_end_short_mention_untouched() {
        let raw = RawMatch {
            entity_type: PostEntityType::Mention,
            start: 6,
            end: 22,
            body_start: 7,
        };
        assert_eq!(POLICY.clamp_end(&raw), 22);
    }

    #[test]
    fn test_offset_map_units() {
        let text = "é😀#a";
        let chars = chars(text);

        let by_char = OffsetMap::new(text, &chars, OffsetUnit::Chars);
        let by_byte = OffsetMap::new(text, &chars, OffsetUnit::Bytes);
        let by_utf16 = OffsetMap::new(text, &chars, OffsetUnit::Utf16);

        assert_eq!(by_char.get(2), 2);
        assert_eq!(by_byte.get(2), 6);
        assert_eq!(by_utf16.get(2), 3);
        assert_eq!(by_byte.get(4), text.len());
    }
}
