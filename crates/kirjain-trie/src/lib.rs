//! Suffix-lookup trie for the kirjain letter game.
//!
//! Dictionary words are stored with their characters reversed, so asking
//! "which suffixes of this buffer are complete words?" becomes a single
//! root-to-leaf walk that reads the buffer from its last character
//! backwards. The cost of a query is bounded by the buffer length and does
//! not depend on the number of words in the dictionary.
//!
//! # Architecture
//!
//! - [`node`] -- trie nodes keyed by reversed prefixes
//! - [`trie`] -- [`SuffixTrie`] insertion, removal, iteration and suffix queries
//!
//! The trie compares exact Unicode scalar values. Case folding, if wanted,
//! is done by the caller before inserting and before querying.

pub mod node;
pub mod trie;

pub use trie::{SuffixMatch, SuffixMatches, SuffixTrie};

/// Error type for trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The input cannot be stored as a dictionary word.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
