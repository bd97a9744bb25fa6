// Plain-text word list reader
//
// One entry per line. Surrounding whitespace is trimmed, blank lines and
// `#` comments are ignored. Entries are returned as written; case folding
// happens when the dictionary is built.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kirjain_core::case::is_capitalized;
use kirjain_core::character::is_word_char;

use crate::GameError;

/// Filters applied while reading a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListOptions {
    /// Drop capitalised entries such as place names ("Helsinki").
    pub skip_proper_nouns: bool,
    /// Shortest accepted entry, in characters.
    pub min_len: usize,
    /// Longest accepted entry, in characters. `None` means no limit.
    pub max_len: Option<usize>,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            skip_proper_nouns: false,
            min_len: 1,
            max_len: None,
        }
    }
}

/// Accepted entries of a word list plus the number of rejected ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    skipped: usize,
}

impl WordList {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of non-comment entries that failed a filter.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    fn push_line(&mut self, line: &str, options: &WordListOptions) {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            return;
        }
        if accept(entry, options) {
            self.words.push(entry.to_string());
        } else {
            tracing::trace!(entry, "skipping word list entry");
            self.skipped += 1;
        }
    }
}

/// Check a trimmed entry against the filters.
fn accept(entry: &str, options: &WordListOptions) -> bool {
    let chars: Vec<char> = entry.chars().collect();
    if !chars.iter().all(|&c| is_word_char(c)) {
        return false;
    }
    if chars.first() == Some(&'-') || chars.last() == Some(&'-') {
        return false;
    }
    if chars.len() < options.min_len {
        return false;
    }
    if options.max_len.is_some_and(|max| chars.len() > max) {
        return false;
    }
    !(options.skip_proper_nouns && is_capitalized(&chars))
}

/// Parse a word list held in memory.
pub fn parse_words(text: &str, options: &WordListOptions) -> WordList {
    let mut list = WordList::default();
    for line in text.lines() {
        list.push_line(line, options);
    }
    list
}

/// Read a word list from any buffered reader.
///
/// Fails on I/O errors and on input that is not valid UTF-8.
pub fn load_words<R: BufRead>(reader: R, options: &WordListOptions) -> Result<WordList, GameError> {
    let mut list = WordList::default();
    for line in reader.lines() {
        list.push_line(&line?, options);
    }
    tracing::debug!(
        accepted = list.words.len(),
        skipped = list.skipped,
        "read word list"
    );
    Ok(list)
}

/// Read a word list file.
pub fn load_file(path: &Path, options: &WordListOptions) -> Result<WordList, GameError> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "opening word list");
    load_words(BufReader::new(file), options)
}
