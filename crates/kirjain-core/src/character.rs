// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are any Unicode alphabetic scalar, so Finnish and Swedish
/// letters (`ä`, `ö`, `å`) as well as loan-word letters (`š`, `ž`) are
/// classified as [`CharType::Letter`].
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '/'
            | '&'
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
    )
}

/// Check whether a character may appear inside a dictionary word.
///
/// Word entries consist of letters, optionally joined by a hyphen
/// ("linja-auto").
pub fn is_word_char(c: char) -> bool {
    c == '-' || get_char_type(c) == CharType::Letter
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. Only the first
// character is taken so that case mapping stays one-to-one and character
// positions in a buffer survive folding.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Uppercase a character only when its uppercase form is one character.
///
/// Returns `None` for characters such as `ß` whose uppercase is longer
/// ("SS").
pub fn single_upper(c: char) -> Option<char> {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => Some(upper),
        _ => None,
    }
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Lowercase every character of `word` with [`simple_lower`].
///
/// The result has exactly as many characters as the input.
pub fn fold_lower(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}
