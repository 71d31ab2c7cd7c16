use slotmap::{DefaultKey, SlotMap};

/// A node of a binary tree keyed by an integer weight.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Leaves carry a payload; merged nodes carry none
    pub payload: Option<T>,
    pub key: u64,
    pub left: Option<DefaultKey>,
    pub right: Option<DefaultKey>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena of binary trees that can be merged pairwise into larger trees.
///
/// Several roots may live in one arena at a time (a forest); merging two
/// roots allocates a parent whose key is the sum of theirs.
#[derive(Debug)]
pub struct Tree<T> {
    nodes: SlotMap<DefaultKey, TreeNode<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::new(),
        }
    }

    /// Allocates a single-node tree.
    pub fn leaf(&mut self, payload: T, key: u64) -> DefaultKey {
        self.nodes.insert(TreeNode {
            payload: Some(payload),
            key,
            left: None,
            right: None,
        })
    }

    /// Joins two roots under a new parent keyed by their sum.
    ///
    /// Returns `None`, allocating nothing, if the sum overflows.
    pub fn merge(&mut self, left: DefaultKey, right: DefaultKey) -> Option<DefaultKey> {
        let key = self.nodes[left].key.checked_add(self.nodes[right].key)?;
        Some(self.nodes.insert(TreeNode {
            payload: None,
            key,
            left: Some(left),
            right: Some(right),
        }))
    }

    pub fn node(&self, id: DefaultKey) -> &TreeNode<T> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaves reachable from `root` with their depth (root depth 0),
    /// left before right.
    pub fn leaves(&self, root: DefaultKey) -> Vec<(DefaultKey, usize)> {
        let mut leaves = Vec::new();
        let mut stack = vec![(root, 0)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                leaves.push((id, depth));
                continue;
            }
            // Right pushed first so the left subtree is visited first
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }

        leaves
    }

    /// Sum of `key × depth` over the leaves below `root`, or `None` on
    /// overflow.
    pub fn depth_weighted_sum(&self, root: DefaultKey) -> Option<u64> {
        self.leaves(root).into_iter().try_fold(0u64, |sum, (id, depth)| {
            sum.checked_add(self.nodes[id].key.checked_mul(depth as u64)?)
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}
