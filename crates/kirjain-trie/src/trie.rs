// SuffixTrie: dictionary of reversed words with suffix queries

use std::iter::FusedIterator;
use std::str::CharIndices;

use crate::TrieError;
use crate::node::Node;

/// A dictionary word found at the end of a query buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<'b> {
    /// The matched suffix, borrowed from the buffer in original order.
    pub word: &'b str,
    /// Byte offset of the suffix within the buffer.
    pub byte_start: usize,
    /// Length of the suffix in characters.
    pub char_len: usize,
}

/// In-memory dictionary indexed by reversed characters.
///
/// Built once from a word list and then queried with
/// [`find_word_suffixes`](SuffixTrie::find_word_suffixes). Queries only
/// take `&self`, so a built trie can be shared between threads.
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    root: Node,
    word_count: usize,
    node_count: usize,
    max_word_len: usize,
}

impl SuffixTrie {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            word_count: 0,
            node_count: 1,
            max_word_len: 0,
        }
    }

    /// Build a trie from a sequence of words.
    ///
    /// Duplicates are stored once. Fails on the first empty word.
    pub fn from_words<I, S>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        let mut duplicates = 0usize;
        for word in words {
            if !trie.insert(word.as_ref())? {
                duplicates += 1;
            }
        }
        tracing::debug!(
            words = trie.word_count,
            nodes = trie.node_count,
            duplicates,
            "built suffix trie"
        );
        Ok(trie)
    }

    /// Add one word to the dictionary.
    ///
    /// Returns `true` if the word was not present before. Inserting the
    /// same word again changes nothing. The empty string is rejected: it
    /// would mark the root itself as a word.
    pub fn insert(&mut self, word: &str) -> Result<bool, TrieError> {
        if word.is_empty() {
            return Err(TrieError::InvalidInput("empty word"));
        }

        let mut node = &mut self.root;
        let mut len = 0;
        for c in word.chars().rev() {
            let (child, created) = node.child_or_insert(c);
            if created {
                self.node_count += 1;
            }
            node = child;
            len += 1;
        }

        let was_word = node.mark_word(true);
        if !was_word {
            self.word_count += 1;
            self.max_word_len = self.max_word_len.max(len);
        }
        Ok(!was_word)
    }

    /// Remove a word from the dictionary.
    ///
    /// Returns `true` if the word was present. Nodes that no longer lead
    /// to any word are pruned; words sharing the removed word's ending
    /// ("to" when removing "auto") are kept.
    pub fn remove(&mut self, word: &str) -> bool {
        let path: Vec<char> = word.chars().rev().collect();
        if path.is_empty() {
            return false;
        }
        let mut pruned = 0;
        if !remove_path(&mut self.root, &path, &mut pruned) {
            return false;
        }
        self.word_count -= 1;
        self.node_count -= pruned;
        if path.len() == self.max_word_len {
            self.max_word_len = self.longest_word_depth();
        }
        true
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for c in word.chars().rev() {
            match node.child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word()
    }

    /// Every dictionary word that is a suffix of `buffer`, shortest first.
    ///
    /// The returned slices borrow from `buffer`. An empty buffer, or one
    /// with no dictionary word at its end, gives an empty result.
    pub fn find_word_suffixes<'b>(&self, buffer: &'b str) -> Vec<&'b str> {
        self.suffix_matches(buffer).map(|m| m.word).collect()
    }

    /// Lazily walk `buffer` from its last character backwards, yielding
    /// each suffix that is a dictionary word.
    ///
    /// Suffixes are tested in order of increasing length. The walk ends at
    /// the first character without a matching edge: no longer suffix can
    /// be a word once its reversed prefix is missing from the trie, and
    /// every shorter suffix has already been tested by then.
    pub fn suffix_matches<'t, 'b>(&'t self, buffer: &'b str) -> SuffixMatches<'t, 'b> {
        SuffixMatches {
            node: Some(&self.root),
            buffer,
            chars: buffer.char_indices(),
            char_len: 0,
            steps: 0,
        }
    }

    /// All words in original orientation, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_word() {
                words.push(node.word());
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        words.sort_unstable();
        words
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length in characters of the longest stored word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    fn longest_word_depth(&self) -> usize {
        let mut longest = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_word() {
                longest = longest.max(node.depth());
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        longest
    }
}

impl Default for SuffixTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the word flag at the end of `path` and prune emptied nodes on
/// the way back up. Returns whether a word was removed.
fn remove_path(node: &mut Node, path: &[char], pruned: &mut usize) -> bool {
    let Some((&c, rest)) = path.split_first() else {
        return node.mark_word(false);
    };
    let Some(child) = node.child_mut(c) else {
        return false;
    };
    if !remove_path(child, rest, pruned) {
        return false;
    }
    if !child.is_word() && child.is_leaf() {
        node.remove_child(c);
        *pruned += 1;
    }
    true
}

/// Iterator returned by [`SuffixTrie::suffix_matches`].
#[derive(Debug, Clone)]
pub struct SuffixMatches<'t, 'b> {
    /// Current trie position; `None` once the walk has ended.
    node: Option<&'t Node>,
    buffer: &'b str,
    chars: CharIndices<'b>,
    /// Characters consumed from the end of the buffer so far.
    char_len: usize,
    /// Buffer characters looked up in the trie, including a final miss.
    steps: usize,
}

impl SuffixMatches<'_, '_> {
    /// Number of buffer characters looked up so far.
    ///
    /// Each character is looked up at most once, so this never exceeds the
    /// buffer's character count whatever the size of the trie.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<'b> Iterator for SuffixMatches<'_, 'b> {
    type Item = SuffixMatch<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.node?;
            let Some((byte_start, c)) = self.chars.next_back() else {
                self.node = None;
                return None;
            };
            self.steps += 1;
            let Some(child) = node.child(c) else {
                self.node = None;
                return None;
            };
            self.node = Some(child);
            self.char_len += 1;
            if child.is_word() {
                return Some(SuffixMatch {
                    word: &self.buffer[byte_start..],
                    byte_start,
                    char_len: self.char_len,
                });
            }
        }
    }
}

impl FusedIterator for SuffixMatches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(words: &[&str]) -> SuffixTrie {
        SuffixTrie::from_words(words).unwrap()
    }

    #[test]
    fn new_trie_is_empty() {
        let t = SuffixTrie::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.max_word_len(), 0);
        assert!(t.find_word_suffixes("auto").is_empty());
    }

    #[test]
    fn insert_reports_new_words() {
        let mut t = SuffixTrie::new();
        assert_eq!(t.insert("auto"), Ok(true));
        assert_eq!(t.insert("auto"), Ok(false));
        assert_eq!(t.len(), 1);
        assert_eq!(t.node_count(), 5);
    }

    #[test]
    fn insert_rejects_empty_word() {
        let mut t = SuffixTrie::new();
        assert_eq!(t.insert(""), Err(TrieError::InvalidInput("empty word")));
        assert!(!t.root().is_word());
        assert!(SuffixTrie::from_words(["auto", ""]).is_err());
    }

    #[test]
    fn shared_endings_share_nodes() {
        let t = trie(&["to", "auto"]);
        // root, o, ot, otu, otua
        assert_eq!(t.node_count(), 5);
        let ot = t.root().child('o').and_then(|n| n.child('t')).unwrap();
        assert!(ot.is_word());
        assert_eq!(ot.key(), "ot");
    }

    #[test]
    fn finds_shortest_suffix_first() {
        let t = trie(&["AUTO", "TO", "OSKARI"]);
        assert_eq!(t.find_word_suffixes("AUTO"), vec!["TO", "AUTO"]);
        assert_eq!(t.find_word_suffixes("OSKARI"), vec!["OSKARI"]);
        assert!(t.find_word_suffixes("XYZ").is_empty());
    }

    #[test]
    fn finds_suffixes_inside_longer_buffer() {
        let t = trie(&["talo", "auto", "to"]);
        assert_eq!(t.find_word_suffixes("taloauto"), vec!["to", "auto"]);
        assert_eq!(t.find_word_suffixes("autotalo"), vec!["talo"]);
    }

    #[test]
    fn empty_buffer_has_no_suffixes() {
        let t = trie(&["a"]);
        assert!(t.find_word_suffixes("").is_empty());
    }

    #[test]
    fn walk_stops_at_first_missing_edge() {
        // "xauto" is not in the trie, so nothing past "auto" is reachable,
        // but the shorter matches before the break are still reported.
        let t = trie(&["to", "auto", "yauto"]);
        assert_eq!(t.find_word_suffixes("xauto"), vec!["to", "auto"]);
        assert_eq!(t.find_word_suffixes("yauto"), vec!["to", "auto", "yauto"]);
        // The last character breaks the walk immediately.
        assert!(t.find_word_suffixes("autox").is_empty());
    }

    #[test]
    fn non_ascii_words() {
        let t = trie(&["\u{00C4}ITI"]); // ÄITI
        assert_eq!(t.find_word_suffixes("\u{00C4}ITI"), vec!["\u{00C4}ITI"]);
        assert_eq!(t.find_word_suffixes("KALA\u{00C4}ITI"), vec!["\u{00C4}ITI"]);
        assert!(t.find_word_suffixes("ITI").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let t = trie(&["auto"]);
        assert!(t.find_word_suffixes("AUTO").is_empty());
        assert!(!t.contains("Auto"));
    }

    #[test]
    fn suffix_matches_report_positions() {
        let t = trie(&["t\u{00E4}", "\u{00E4}"]); // tä, ä
        let buffer = "kyll\u{00E4}t\u{00E4}"; // kyllätä
        let matches: Vec<_> = t.suffix_matches(buffer).collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].word, "\u{00E4}");
        assert_eq!(matches[0].char_len, 1);
        assert_eq!(matches[0].byte_start, buffer.len() - 2);
        assert_eq!(matches[1].word, "t\u{00E4}");
        assert_eq!(matches[1].char_len, 2);
        assert_eq!(matches[1].byte_start, buffer.len() - 3);
    }

    #[test]
    fn steps_stop_at_first_missing_edge() {
        let t = trie(&["auto", "to"]);
        let mut it = t.suffix_matches("kissa");
        assert_eq!(it.next(), None);
        assert_eq!(it.steps(), 1);

        let mut it = t.suffix_matches("taloauto");
        assert_eq!(it.by_ref().count(), 2);
        // o, t, u, a matched, then the o of "talo" is missing
        assert_eq!(it.steps(), 5);

        let mut it = t.suffix_matches("");
        assert_eq!(it.next(), None);
        assert_eq!(it.steps(), 0);
    }

    #[test]
    fn suffix_matches_is_fused() {
        let t = trie(&["o"]);
        let mut it = t.suffix_matches("xo");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn contains_exact_words_only() {
        let t = trie(&["auto"]);
        assert!(t.contains("auto"));
        assert!(!t.contains("uto"));
        assert!(!t.contains("to"));
        assert!(!t.contains("autot"));
        assert!(!t.contains(""));
    }

    #[test]
    fn remove_keeps_words_with_shared_ending() {
        let mut t = trie(&["to", "auto"]);
        assert!(t.remove("auto"));
        assert_eq!(t.find_word_suffixes("auto"), vec!["to"]);
        assert_eq!(t.len(), 1);
        // otu and otua are pruned
        assert_eq!(t.node_count(), 3);
        assert_eq!(t.max_word_len(), 2);
    }

    #[test]
    fn remove_inner_word_keeps_longer_word() {
        let mut t = trie(&["to", "auto"]);
        assert!(t.remove("to"));
        assert!(t.find_word_suffixes("to").is_empty());
        assert_eq!(t.find_word_suffixes("auto"), vec!["auto"]);
        assert_eq!(t.node_count(), 5);
        assert_eq!(t.max_word_len(), 4);
    }

    #[test]
    fn remove_missing_word() {
        let mut t = trie(&["auto"]);
        assert!(!t.remove("to"));
        assert!(!t.remove("kauto"));
        assert!(!t.remove(""));
        assert_eq!(t.len(), 1);
        assert_eq!(t.node_count(), 5);
    }

    #[test]
    fn remove_last_word_leaves_root() {
        let mut t = trie(&["auto"]);
        assert!(t.remove("auto"));
        assert!(t.is_empty());
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.max_word_len(), 0);
        assert!(t.root().is_leaf());
    }

    #[test]
    fn words_lists_original_orientation() {
        let t = trie(&["talo", "auto", "to", "auto"]);
        assert_eq!(t.words(), vec!["auto", "talo", "to"]);
    }

    #[test]
    fn max_word_len_counts_characters() {
        let t = trie(&["\u{00E4}iti", "to"]);
        assert_eq!(t.max_word_len(), 4);
    }
}
