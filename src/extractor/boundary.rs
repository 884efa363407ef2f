//! Start-position rules shared by all matchers.
//!
//! Whether a candidate may begin at index `i` depends only on `chars[i - 1]`.

use super::classify::{CharClass, classify, in_word};

/// Returns true if a marker at `at` may start a hashtag, mention or cashtag.
///
/// Legal at the start of the text or after any non-word character, so
/// `but#invalid` and `but@invalid` never start an entity. A combining mark
/// attached to a word counts as part of that word.
pub fn is_marker_boundary(chars: &[char], at: usize) -> bool {
    at.checked_sub(1).is_none_or(|prev| !in_word(chars, prev))
}

/// Returns true if a URL may start at `at`.
///
/// Stricter than [`is_marker_boundary`]: besides word characters, a marker or
/// one of `-`, `.`, `/` right before the candidate also rules it out. This
/// keeps `user@example.com` and the tail of `$www.example.com` from being
/// picked up as links.
pub fn is_url_boundary(chars: &[char], at: usize) -> bool {
    let Some(prev) = preceding(chars, at) else {
        return true;
    };

    match classify(prev) {
        CharClass::Space => true,
        CharClass::Other if in_word(chars, at - 1) => false,
        CharClass::Other => !matches!(prev, '-' | '.' | '/'),
        CharClass::Word | CharClass::Marker(_) => false,
    }
}

fn preceding(chars: &[char], at: usize) -> Option<char> {
    at.checked_sub(1).and_then(|i| chars.get(i).copied())
}
