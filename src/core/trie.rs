// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), terminal: false }
    }
}

/// An arena-allocated character trie over the dictionary lexicon.
/// Used by the maximal-matching tokenizer to find the longest word at a position.
#[derive(Clone, Debug)]
pub struct LexiconTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for LexiconTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], len: 0 }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a word. O(k) where k is the word length in chars.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node_idx = 0;
        for c in word.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        if !self.nodes[node_idx].terminal {
            self.nodes[node_idx].terminal = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node_idx = 0;
        for c in word.chars() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => return false,
            }
        }
        node_idx != 0 && self.nodes[node_idx].terminal
    }

    /// Length in chars of the longest stored word that is a prefix of `chars`.
    pub fn longest_prefix(&self, chars: &[char]) -> Option<usize> {
        let mut node_idx = 0;
        let mut best = None;
        for (i, c) in chars.iter().enumerate() {
            match self.nodes[node_idx].children.get(c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if self.nodes[node_idx].terminal {
                best = Some(i + 1);
            }
        }
        best
    }
}
