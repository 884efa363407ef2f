//! Character classes seen by the scanner.

use unicode_segmentation::UnicodeSegmentation;

/// Trigger character preceding a hashtag, mention, or cashtag body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Hash,
    At,
    Dollar,
}

impl Marker {
    pub fn as_char(self) -> char {
        match self {
            Marker::Hash => '#',
            Marker::At => '@',
            Marker::Dollar => '$',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letter, digit, or underscore.
    Word,
    /// Whitespace, including line breaks.
    Space,
    Marker(Marker),
    /// Any other punctuation or symbol.
    Other,
}

/// Classifies a single character.
///
/// Letters and digits follow Unicode (`char::is_alphanumeric`), so `é` and
/// `٣` are word characters. Markers are the ASCII `#`, `@` and `$` only.
pub fn classify(c: char) -> CharClass {
    match c {
        '#' => CharClass::Marker(Marker::Hash),
        '@' => CharClass::Marker(Marker::At),
        '$' => CharClass::Marker(Marker::Dollar),
        '_' => CharClass::Word,
        c if c.is_alphanumeric() => CharClass::Word,
        c if c.is_whitespace() => CharClass::Space,
        _ => CharClass::Other,
    }
}

pub fn is_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Returns true if `c` stays in the same extended grapheme cluster as `prev`.
///
/// Covers combining marks (`e\u{301}`), spacing marks and viramas
/// (`न्`), none of which are alphanumeric on their own.
pub fn extends_grapheme(prev: char, c: char) -> bool {
    let mut buf = [0u8; 8];
    let first = prev.encode_utf8(&mut buf).len();
    let second = c.encode_utf8(&mut buf[first..]).len();

    std::str::from_utf8(&buf[..first + second])
        .is_ok_and(|pair| pair.graphemes(true).nth(1).is_none())
}

/// Returns true if `chars[at]` is part of a word: a word char, or a mark
/// attached (possibly through other marks) to one.
pub fn in_word(chars: &[char], at: usize) -> bool {
    let mut i = at;
    loop {
        let Some(&c) = chars.get(i) else {
            return false;
        };
        if is_word(c) {
            return true;
        }
        if i == 0 || !extends_grapheme(chars[i - 1], c) {
            return false;
        }
        i -= 1;
    }
}
