use slotmap::DefaultKey;

/// A node of the suffix trie.
///
/// The edge leading into the node is labelled by `text[start..end]` of the
/// trie's backing text. The root has an empty range.
#[derive(Debug)]
pub(crate) struct TrieNode {
    pub start: usize,
    pub end: usize,
    pub children: Vec<DefaultKey>,
    pub parent: Option<DefaultKey>,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            start: 0,
            end: 0,
            children: Vec::new(),
            parent: None,
        }
    }

    pub(crate) fn edge(start: usize, end: usize, parent: DefaultKey) -> Self {
        Self {
            start,
            end,
            children: Vec::new(),
            parent: Some(parent),
        }
    }

    /// Length of the incoming edge label.
    pub(crate) fn edge_len(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
