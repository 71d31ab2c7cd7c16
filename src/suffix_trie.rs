//! Compressed suffix trie over one fixed text.
//!
//! Edges are ranges into the backing text. Construction inserts every
//! suffix from the rightmost to the leftmost, splitting an edge whenever a
//! new suffix diverges in the middle of it. That is the naive O(n²) build,
//! not a linear-time suffix tree construction.
//!
//! # Example
//!
//! ```
//! use ordsearch_rs::SuffixTrie;
//!
//! let trie = SuffixTrie::from("banana");
//! let pattern: Vec<char> = "ana".chars().collect();
//!
//! let offset = trie.search(&pattern).unwrap();
//! assert!(offset == 1 || offset == 3);
//! assert_eq!(trie.search_all(&pattern), vec![1, 3]);
//! ```

use crate::trie_node::TrieNode;
use slotmap::{DefaultKey, SlotMap};

/// Suffix trie supporting substring search.
pub struct SuffixTrie<T> {
    text: Vec<T>,
    pub(crate) nodes: SlotMap<DefaultKey, TrieNode>,
    pub(crate) root: DefaultKey,
}

impl<T: Eq> SuffixTrie<T> {
    /// Builds the trie for `text`.
    pub fn new<I: IntoIterator<Item = T>>(text: I) -> Self {
        let text: Vec<T> = text.into_iter().collect();
        let mut nodes = SlotMap::new();
        let root = nodes.insert(TrieNode::root());

        let mut trie = Self { text, nodes, root };
        for start in (0..trie.text.len()).rev() {
            trie.insert_suffix(start);
        }

        tracing::debug!(
            text_len = trie.text.len(),
            nodes = trie.nodes.len(),
            "built suffix trie"
        );

        trie
    }

    /// Adds the suffix beginning at `start`.
    fn insert_suffix(&mut self, start: usize) {
        let len = self.text.len();
        let mut node = self.root;
        let mut pos = start;

        while pos < len {
            let text = &self.text;
            let nodes = &self.nodes;
            let found = nodes[node]
                .children
                .iter()
                .position(|&child| text[nodes[child].start] == text[pos]);

            let Some(slot) = found else {
                let leaf = self.nodes.insert(TrieNode::edge(pos, len, node));
                self.nodes[node].children.push(leaf);
                return;
            };

            let child = self.nodes[node].children[slot];
            let (edge_start, edge_end) = (self.nodes[child].start, self.nodes[child].end);

            let mut shared = 1;
            while edge_start + shared < edge_end
                && pos + shared < len
                && self.text[edge_start + shared] == self.text[pos + shared]
            {
                shared += 1;
            }

            if edge_start + shared == edge_end {
                node = child;
                pos += shared;
            } else if pos + shared == len {
                // Already present as a prefix of a longer path
                return;
            } else {
                self.split_edge(node, slot, shared, pos + shared);
                return;
            }
        }
    }

    /// Splits the child in `slot` of `parent` after `shared` symbols.
    ///
    /// The new internal node takes the child's slot and receives the old
    /// continuation and a leaf starting at `leaf_start`.
    fn split_edge(&mut self, parent: DefaultKey, slot: usize, shared: usize, leaf_start: usize) {
        let child = self.nodes[parent].children[slot];
        let edge_start = self.nodes[child].start;
        let split_at = edge_start + shared;

        let internal = self
            .nodes
            .insert(TrieNode::edge(edge_start, split_at, parent));
        let leaf = self
            .nodes
            .insert(TrieNode::edge(leaf_start, self.text.len(), internal));

        self.nodes[child].start = split_at;
        self.nodes[child].parent = Some(internal);
        self.nodes[internal].children = vec![child, leaf];
        self.nodes[parent].children[slot] = internal;

        tracing::trace!(edge_start, split_at, leaf_start, "split suffix trie edge");
    }

    /// Returns the start offset of an occurrence of `pattern`, if any.
    ///
    /// An empty pattern matches at offset 0.
    pub fn search(&self, pattern: &[T]) -> Option<usize> {
        let (node, edge_offset) = self.locate(pattern)?;
        match node {
            None => Some(0),
            Some(node) => {
                let start = self.nodes[node].start + edge_offset;
                Some(start - pattern.len())
            }
        }
    }

    /// Returns true if `pattern` occurs in the text.
    pub fn contains(&self, pattern: &[T]) -> bool {
        self.search(pattern).is_some()
    }

    /// Returns the start offsets of every occurrence of `pattern`, sorted.
    pub fn search_all(&self, pattern: &[T]) -> Vec<usize> {
        let len = self.text.len();
        let Some((node, edge_offset)) = self.locate(pattern) else {
            return Vec::new();
        };
        let Some(node) = node else {
            return (0..len).collect();
        };

        // Depth of the path through the whole edge containing the match end
        let node_depth = pattern.len() + self.nodes[node].edge_len() - edge_offset;

        // Every node whose edge reaches the end of the text closes one suffix
        let mut offsets = Vec::new();
        let mut stack = vec![(node, node_depth)];
        while let Some((key, depth)) = stack.pop() {
            let current = &self.nodes[key];
            if current.end == len {
                offsets.push(len - depth);
            }
            for &child in &current.children {
                stack.push((child, depth + self.nodes[child].edge_len()));
            }
        }

        offsets.sort_unstable();
        offsets
    }

    /// Walks `pattern` down from the root.
    ///
    /// Returns the node whose edge holds the last matched symbol and the
    /// number of that edge's symbols consumed; `None` as the node for an
    /// empty pattern.
    fn locate(&self, pattern: &[T]) -> Option<(Option<DefaultKey>, usize)> {
        if pattern.is_empty() {
            return Some((None, 0));
        }

        let mut node = self.root;
        let mut matched = 0;

        loop {
            let child = *self.nodes[node]
                .children
                .iter()
                .find(|&&child| self.text[self.nodes[child].start] == pattern[matched])?;

            let edge = &self.nodes[child];
            let mut consumed = 0;
            while consumed < edge.edge_len() && matched < pattern.len() {
                if self.text[edge.start + consumed] != pattern[matched] {
                    return None;
                }
                consumed += 1;
                matched += 1;
            }

            if matched == pattern.len() {
                return Some((Some(child), consumed));
            }
            node = child;
        }
    }
}

impl<T> SuffixTrie<T> {
    /// The backing text.
    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of childless nodes, root excluded.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|&(key, node)| key != self.root && node.is_leaf())
            .count()
    }
}

impl From<&str> for SuffixTrie<char> {
    fn from(text: &str) -> Self {
        SuffixTrie::new(text.chars())
    }
}
