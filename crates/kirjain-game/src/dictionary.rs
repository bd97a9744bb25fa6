// Case-folded dictionary backed by a suffix trie

use std::ops::Range;

use kirjain_core::character::fold_lower;
use kirjain_trie::SuffixTrie;

use crate::GameError;
use crate::wordlist::WordList;

/// A dictionary word found at the end of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordMatch {
    /// The word in lowercase.
    pub word: String,
    /// Character index of the first letter of the word in the buffer.
    pub start: usize,
    /// Length of the word in characters.
    pub len: usize,
}

impl WordMatch {
    /// Character range of the word within the buffer.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// The set of words the game recognises.
///
/// Words are lowercased when inserted and buffers are lowercased before
/// lookup, so "Auto", "AUTO" and "auto" are the same word. The underlying
/// [`SuffixTrie`] itself compares exact characters.
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: SuffixTrie,
}

impl Dictionary {
    /// Build a dictionary from raw words.
    ///
    /// Blank entries are ignored. Fails with [`GameError::EmptyWordList`] if
    /// nothing is left.
    pub fn from_words<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = SuffixTrie::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            trie.insert(&fold_lower(word))?;
        }
        if trie.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        tracing::debug!(
            words = trie.len(),
            nodes = trie.node_count(),
            longest = trie.max_word_len(),
            "built dictionary"
        );
        Ok(Self { trie })
    }

    pub fn from_word_list(list: &WordList) -> Result<Self, GameError> {
        Self::from_words(list.words())
    }

    /// Dictionary words that `buffer` ends with, shortest first.
    ///
    /// `start` and `len` of each match count characters of `buffer`.
    pub fn matches(&self, buffer: &str) -> Vec<WordMatch> {
        let folded = fold_lower(buffer);
        let total = folded.chars().count();
        self.trie
            .suffix_matches(&folded)
            .map(|m| WordMatch {
                word: m.word.to_string(),
                start: total - m.char_len,
                len: m.char_len,
            })
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&fold_lower(word.trim()))
    }

    /// Number of distinct words after case folding.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Length in characters of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.trie.max_word_len()
    }

    pub fn trie(&self) -> &SuffixTrie {
        &self.trie
    }
}
