//! Marker-prefixed matchers: hashtags, mentions and suppressed cashtags.
//!
//! All three share one grammar: the marker followed by a greedy run of one
//! or more word characters. They differ in what happens to the run.

use super::classify::{Marker, extends_grapheme, is_word};
use super::span::{RawMatch, Scan};
use crate::domain::entities::PostEntityType;

/// Dispatches to the matcher for `marker`. `at` must be a legal start.
pub fn scan_marker(chars: &[char], at: usize, marker: Marker) -> Scan {
    match marker {
        Marker::Hash => match_hashtag(chars, at),
        Marker::At => match_mention(chars, at),
        Marker::Dollar => suppress_cashtag(chars, at),
    }
}

/// `#` followed by word characters, no length cap.
///
/// A run directly followed by another `#` or by `://` is consumed but not
/// emitted (`#Yo#`, `#Invalid#Hashtags`).
pub fn match_hashtag(chars: &[char], at: usize) -> Scan {
    match_tag(chars, at, Marker::Hash, PostEntityType::Hashtag)
}

/// `@` followed by word characters.
///
/// The full run is reported so the cursor skips all of it; the span builder
/// truncates the emitted value. A run directly followed by another `@` or by
/// `://` is consumed but not emitted (`@john_doe@john_doe`).
pub fn match_mention(chars: &[char], at: usize) -> Scan {
    match_tag(chars, at, Marker::At, PostEntityType::Mention)
}

/// `$` followed by word characters. Always discarded, but the run is consumed
/// so no later matcher sees it.
pub fn suppress_cashtag(chars: &[char], at: usize) -> Scan {
    let end = word_run_end(chars, at + 1);
    if end == at + 1 {
        return Scan::Miss;
    }

    tracing::trace!(start = at, end, "cashtag suppressed");
    Scan::Skip(end)
}

fn match_tag(chars: &[char], at: usize, marker: Marker, entity_type: PostEntityType) -> Scan {
    let body_start = at + 1;
    let end = word_run_end(chars, body_start);

    if end == body_start {
        return Scan::Miss;
    }

    if has_invalid_tail(chars, end, marker) {
        tracing::trace!(start = at, end, %entity_type, "candidate rejected by trailing marker");
        return Scan::Skip(end);
    }

    Scan::Emit(
        RawMatch {
            entity_type,
            start: at,
            end,
            body_start,
        },
        end,
    )
}

/// End of the word run at `from`. Marks attached to a word char stay in the
/// run, so `#cafe\u{301}` and `#हिन्दी` are not cut mid-word.
fn word_run_end(chars: &[char], from: usize) -> usize {
    let mut end = from;
    while let Some(&c) = chars.get(end) {
        let continues = is_word(c) || (end > from && extends_grapheme(chars[end - 1], c));
        if !continues {
            break;
        }
        end += 1;
    }
    end
}

fn has_invalid_tail(chars: &[char], pos: usize, marker: Marker) -> bool {
    match chars.get(pos) {
        Some(&c) if c == marker.as_char() => true,
        Some(':') => chars.get(pos + 1..pos + 3) == Some(&['/', '/'][..]),
        _ => false,
    }
}
