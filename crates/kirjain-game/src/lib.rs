//! Game logic for the kirjain letter game.
//!
//! A [`session::GameSession`] receives key presses from an on-screen
//! keyboard, keeps the typed buffer, and after every press reports the
//! dictionary words the buffer now ends with. Each reported word is
//! spoken and scored.
//!
//! - [`wordlist`] -- reading plain-text word lists
//! - [`dictionary`] -- case-folded word lookup backed by a suffix trie
//! - [`scoring`] -- points for matched words
//! - [`speech`] -- utterances and the [`speech::Speaker`] seam
//! - [`session`] -- key presses, buffer and score

pub mod dictionary;
pub mod scoring;
pub mod session;
pub mod speech;
pub mod wordlist;

use kirjain_trie::TrieError;

/// Error type for loading dictionaries and playing the game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// A word was rejected by the trie.
    #[error("invalid dictionary word: {0}")]
    Trie(#[from] TrieError),

    /// The pressed character has no key on the keyboard.
    #[error("no key for character {0:?}")]
    UnknownKey(char),

    /// No usable word was left after filtering.
    #[error("word list contains no usable words")]
    EmptyWordList,
}
