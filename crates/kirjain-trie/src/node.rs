// Trie node: one reversed prefix of one or more dictionary words

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// A node of the suffix trie.
///
/// Each node represents a prefix in reversed-word space: for the word
/// "auto" the path from the root visits the keys "o", "ot", "otu" and
/// "otua". The key of a node at depth `d` is always `d` characters long,
/// and the child reached through character `c` has key `key + c`.
#[derive(Debug, Clone, Default)]
pub struct Node {
    key: String,
    depth: usize,
    is_word: bool,
    children: HashMap<char, Node>,
}

impl Node {
    /// Create the root node: empty key, depth 0.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Reversed prefix represented by this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Distance from the root, in characters.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the key, read in original order, is a dictionary word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// The key in original (non-reversed) character order.
    pub fn word(&self) -> String {
        self.key.chars().rev().collect()
    }

    /// Follow the edge labelled `c`.
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Iterate over the outgoing edges. Order is unspecified.
    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn child_mut(&mut self, c: char) -> Option<&mut Node> {
        self.children.get_mut(&c)
    }

    /// Follow the edge labelled `c`, creating the child if it is missing.
    ///
    /// Returns the child and whether it was created by this call.
    pub(crate) fn child_or_insert(&mut self, c: char) -> (&mut Node, bool) {
        match self.children.entry(c) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let mut key = String::with_capacity(self.key.len() + c.len_utf8());
                key.push_str(&self.key);
                key.push(c);
                let child = Node {
                    key,
                    depth: self.depth + 1,
                    is_word: false,
                    children: HashMap::new(),
                };
                (entry.insert(child), true)
            }
        }
    }

    pub(crate) fn remove_child(&mut self, c: char) -> Option<Node> {
        self.children.remove(&c)
    }

    /// Set the word flag, returning its previous value.
    pub(crate) fn mark_word(&mut self, is_word: bool) -> bool {
        std::mem::replace(&mut self.is_word, is_word)
    }
}
