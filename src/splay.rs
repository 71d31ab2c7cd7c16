//! Self-adjusting binary search tree.
//!
//! Every insert and every find splays the touched node to the root through
//! zig, zig-zig and zig-zag rotations, giving amortized O(log n) per
//! operation. A single operation can still cost O(n): inserting keys in
//! sorted order builds a path, and the first find at the far end walks it.
//!
//! # Example
//!
//! ```
//! use ordsearch_rs::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! tree.extend([8, 3, 10]);
//!
//! // Soft miss: the last node on the search path comes back.
//! let near = tree.find(&4).unwrap();
//! assert_eq!(*near.value(), 3);
//! assert_eq!(tree.root_value(), Some(&3));
//! ```

use crate::error::{Error, Result};
use crate::splay_node::{Side, SplayNode};
use slotmap::{DefaultKey, SlotMap};
use std::cmp::Ordering;

/// Splay tree over ordered keys stored in a generational arena.
pub struct SplayTree<T> {
    pub(crate) nodes: SlotMap<DefaultKey, SplayNode<T>>,
    pub(crate) root: Option<DefaultKey>,

    /// Key comparisons made on search paths since the last reset
    comparisons: u64,

    /// Single rotations performed since the last reset
    rotations: u64,
}

impl<T: Ord> SplayTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::new(),
            root: None,
            comparisons: 0,
            rotations: 0,
        }
    }

    /// Inserts a key and splays the new node to the root.
    ///
    /// Equal keys are kept; a duplicate descends into the left subtree.
    pub fn insert(&mut self, key: T) {
        let new_key = match self.root {
            None => {
                let new_key = self.nodes.insert(SplayNode::new(key));
                self.root = Some(new_key);
                return;
            }
            Some(root) => {
                let (parent, side) = self.insertion_point(root, &key);
                let new_key = self.nodes.insert(SplayNode::new(key));
                self.nodes[new_key].parent = Some(parent);
                self.nodes[new_key].side = Some(side);
                self.nodes[parent].set_child(side, Some(new_key));
                new_key
            }
        };

        self.splay(new_key);
    }

    /// Inserts every key from the iterator.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }

    /// Finds `key`, or the last node visited while looking for it.
    ///
    /// The returned node is splayed to the root. Callers compare the value
    /// themselves; `None` is only returned for an empty tree.
    pub fn find(&mut self, key: &T) -> Option<SplayRef<'_, T>> {
        let found = self.locate(key)?;
        self.splay(found);
        Some(SplayRef {
            tree: self,
            node: found,
        })
    }

    /// Exact lookup built on [`find`](Self::find).
    pub fn get(&mut self, key: &T) -> Option<&T> {
        self.find(key)
            .filter(|found| found.is_match(key))
            .map(|found| found.value())
    }

    /// Removal is not supported by this tree.
    pub fn remove(&mut self, _key: &T) -> Result<()> {
        Err(Error::Unsupported {
            operation: "SplayTree::remove",
        })
    }

    /// Walks the search path without restructuring.
    fn locate(&mut self, key: &T) -> Option<DefaultKey> {
        let mut current = self.root?;

        loop {
            self.comparisons += 1;
            let node = &self.nodes[current];
            let next = match key.cmp(&node.key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };

            match next {
                Some(child) => current = child,
                None => return Some(current),
            }
        }
    }

    /// Finds the free child slot where `key` belongs (ties go left).
    fn insertion_point(&mut self, root: DefaultKey, key: &T) -> (DefaultKey, Side) {
        let mut current = root;

        loop {
            self.comparisons += 1;
            let node = &self.nodes[current];
            let side = if *key <= node.key {
                Side::Left
            } else {
                Side::Right
            };

            match node.child(side) {
                Some(child) => current = child,
                None => return (current, side),
            }
        }
    }
}

impl<T> SplayTree<T> {
    /// Moves `node` to the root.
    fn splay(&mut self, node: DefaultKey) {
        while let Some(parent) = self.nodes[node].parent {
            if self.nodes[parent].parent.is_none() {
                // Zig
                self.rotate(node);
            } else if self.nodes[node].side == self.nodes[parent].side {
                // Zig-zig
                self.rotate(parent);
                self.rotate(node);
            } else {
                // Zig-zag
                self.rotate(node);
                self.rotate(node);
            }
        }
    }

    /// Rotates `node` above its parent.
    ///
    /// The parent becomes the child on the opposite side, and the node's
    /// inner subtree moves across to the parent.
    fn rotate(&mut self, node: DefaultKey) {
        let parent = self.nodes[node]
            .parent
            .expect("Rotated node must have a parent");
        let side = self.nodes[node].side.expect("Non-root node must have a side");
        let grandparent = self.nodes[parent].parent;
        let parent_side = self.nodes[parent].side;

        // Inner subtree crosses over to the parent
        let inner = self.nodes[node].child(side.opposite());
        self.nodes[parent].set_child(side, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(parent);
            self.nodes[inner].side = Some(side);
        }

        // Parent moves below the node
        self.nodes[node].set_child(side.opposite(), Some(parent));
        self.nodes[parent].parent = Some(node);
        self.nodes[parent].side = Some(side.opposite());

        // Node takes the parent's old slot
        self.nodes[node].parent = grandparent;
        self.nodes[node].side = parent_side;
        match (grandparent, parent_side) {
            (Some(grandparent), Some(parent_side)) => {
                self.nodes[grandparent].set_child(parent_side, Some(node));
            }
            _ => self.root = Some(node),
        }

        self.rotations += 1;
    }

    /// Returns the key at the root, the most recently accessed key.
    pub fn root_value(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(DefaultKey, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((key, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[key];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Returns an in-order iterator over the keys.
    pub fn iter(&self) -> SplayIter<'_, T> {
        SplayIter::new(self)
    }

    /// Returns operation counters and shape statistics.
    pub fn stats(&self) -> SplayStats {
        SplayStats {
            len: self.len(),
            height: self.height(),
            comparisons: self.comparisons,
            rotations: self.rotations,
        }
    }

    /// Zeroes the comparison and rotation counters.
    pub fn reset_counters(&mut self) {
        self.comparisons = 0;
        self.rotations = 0;
    }
}

impl<T: Ord> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a node returned by [`SplayTree::find`].
pub struct SplayRef<'a, T> {
    tree: &'a SplayTree<T>,
    node: DefaultKey,
}

impl<'a, T: PartialEq> SplayRef<'a, T> {
    pub fn value(&self) -> &'a T {
        &self.tree.nodes[self.node].key
    }

    /// Returns true if the node holds exactly `key`.
    pub fn is_match(&self, key: &T) -> bool {
        self.value() == key
    }

    /// Slot occupied in the parent, `None` at the root.
    pub fn side(&self) -> Option<Side> {
        self.tree.nodes[self.node].side
    }
}

/// In-order iterator using an explicit stack.
pub struct SplayIter<'a, T> {
    tree: &'a SplayTree<T>,
    stack: Vec<DefaultKey>,
}

impl<'a, T> SplayIter<'a, T> {
    fn new(tree: &'a SplayTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<DefaultKey>) {
        while let Some(key) = current {
            self.stack.push(key);
            current = self.tree.nodes[key].left;
        }
    }
}

impl<'a, T> Iterator for SplayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let node = &self.tree.nodes[key];
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

impl<'a, T> IntoIterator for &'a SplayTree<T> {
    type Item = &'a T;
    type IntoIter = SplayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Statistics about a splay tree.
#[derive(Debug, Clone, Copy)]
pub struct SplayStats {
    /// Number of stored keys
    pub len: usize,
    /// Longest root-to-leaf path, in nodes
    pub height: usize,
    /// Key comparisons since the last counter reset
    pub comparisons: u64,
    /// Single rotations since the last counter reset
    pub rotations: u64,
}
