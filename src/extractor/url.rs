//! Domain-like run recognizer.
//!
//! Grammar, in order:
//!
//! 1. optional `http://` or `https://` (ASCII case-insensitive)
//! 2. two or more dot-separated labels, the last one an alphabetic TLD of
//!    at least two chars (`www.` is just another label)
//! 3. optional `:port`
//! 4. optional path or query starting at `/` or `?`, up to the next
//!    whitespace, minus trailing sentence punctuation
//!
//! A label run directly followed by `@` looks like an email address and is
//! rejected.

use super::span::{RawMatch, Scan};
use crate::domain::entities::PostEntityType;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Characters never kept at the end of a path.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

const MAX_PORT_DIGITS: usize = 5;

/// Returns true if a URL candidate could begin at `at`.
pub fn looks_like_domain_start(chars: &[char], at: usize) -> bool {
    chars.get(at).is_some_and(|c| c.is_alphanumeric())
}

/// Tries to match a URL starting at `at`. `at` must be a legal URL start.
pub fn match_url(chars: &[char], at: usize) -> Scan {
    let host_start = at + scheme_len(chars, at);
    let labels = labels(chars, host_start);

    // Checked on the whole label run, before non-TLD labels are dropped.
    if labels
        .last()
        .is_some_and(|&(_, end)| chars.get(end) == Some(&'@'))
    {
        tracing::trace!(start = at, "url candidate rejected: email-like host");
        return Scan::Miss;
    }

    let Some(host_end) = host_end(chars, &labels) else {
        return Scan::Miss;
    };

    let mut end = port_end(chars, host_end);
    if matches!(chars.get(end), Some('/' | '?')) {
        end = path_end(chars, end);
    }

    Scan::Emit(
        RawMatch {
            entity_type: PostEntityType::Url,
            start: at,
            end,
            body_start: at,
        },
        end,
    )
}

fn scheme_len(chars: &[char], at: usize) -> usize {
    SCHEMES
        .iter()
        .find(|scheme| starts_with_ignore_ascii_case(chars, at, scheme))
        .map_or(0, |scheme| scheme.len())
}

fn starts_with_ignore_ascii_case(chars: &[char], at: usize, prefix: &str) -> bool {
    let Some(window) = chars.get(at..at + prefix.len()) else {
        return false;
    };
    window
        .iter()
        .zip(prefix.chars())
        .all(|(c, p)| c.eq_ignore_ascii_case(&p))
}

/// End of the host made of `labels`, or `None` when they form no valid domain.
///
/// Labels that cannot serve as a TLD are dropped from the right, so
/// `example.com.x1` yields `example.com`.
fn host_end(chars: &[char], labels: &[(usize, usize)]) -> Option<usize> {
    let tld = labels
        .iter()
        .rposition(|&(start, end)| is_tld(&chars[start..end]))?;

    if tld == 0 {
        return None;
    }
    Some(labels[tld].1)
}

fn labels(chars: &[char], from: usize) -> Vec<(usize, usize)> {
    let mut labels = Vec::new();
    let mut pos = from;

    loop {
        let end = label_end(chars, pos);
        if end == pos {
            break;
        }
        labels.push((pos, end));

        let continues = chars.get(end) == Some(&'.')
            && chars.get(end + 1).is_some_and(|c| c.is_alphanumeric());
        if !continues {
            break;
        }
        pos = end + 1;
    }

    labels
}

fn label_end(chars: &[char], from: usize) -> usize {
    if !chars.get(from).is_some_and(|c| c.is_alphanumeric()) {
        return from;
    }

    let mut end = from + 1;
    while end < chars.len() && is_label_char(chars[end]) {
        end += 1;
    }
    end
}

fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn is_tld(label: &[char]) -> bool {
    label.len() >= 2 && label.iter().all(|c| c.is_alphabetic())
}

fn port_end(chars: &[char], host_end: usize) -> usize {
    if chars.get(host_end) != Some(&':') {
        return host_end;
    }

    let digits_start = host_end + 1;
    let mut end = digits_start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }

    if (1..=MAX_PORT_DIGITS).contains(&(end - digits_start)) {
        end
    } else {
        host_end
    }
}

fn path_end(chars: &[char], from: usize) -> usize {
    let mut end = from;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }

    let mut parens = BracketCount::of(&chars[from..end], '(', ')');
    let mut squares = BracketCount::of(&chars[from..end], '[', ']');

    while end > from {
        let trim = match chars[end - 1] {
            ')' => parens.pop_unbalanced(),
            ']' => squares.pop_unbalanced(),
            last => TRAILING_PUNCTUATION.contains(&last),
        };
        if !trim {
            break;
        }
        end -= 1;
    }

    end
}

/// Open/close counts of one bracket pair inside a path.
struct BracketCount {
    opens: usize,
    closes: usize,
}

impl BracketCount {
    fn of(path: &[char], open: char, close: char) -> Self {
        path.iter().fold(Self { opens: 0, closes: 0 }, |mut count, &c| {
            if c == open {
                count.opens += 1;
            } else if c == close {
                count.closes += 1;
            }
            count
        })
    }

    /// Drops one trailing close if it has no matching open.
    fn pop_unbalanced(&mut self) -> bool {
        if self.closes > self.opens {
            self.closes -= 1;
            true
        } else {
            false
        }
    }
}
