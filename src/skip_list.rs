//! Probabilistic skip list.
//!
//! Each level is a doubly linked row bounded by `NegInf`/`PosInf`
//! sentinels, and every value sits in a tower whose height comes from fair
//! coin flips. Search and insert are O(log n) in expectation; an unlucky
//! coin sequence can still degrade them to O(n).
//!
//! The random source is owned by the list, so a seeded list is fully
//! deterministic.
//!
//! # Example
//!
//! ```
//! use ordsearch_rs::SkipList;
//!
//! let mut list = SkipList::with_seed(7);
//! list.extend([10, 30, 20]);
//!
//! assert_eq!(list.find(&20).value(), Some(&20));
//! // Soft miss: the nearest value not greater than the query
//! assert_eq!(list.find(&25).value(), Some(&20));
//! assert_eq!(list.find(&5).value(), None);
//! ```

use crate::error::{Error, Result};
use crate::skip_node::{Bound, SkipNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::{DefaultKey, SlotMap};

/// Skip list over ordered values.
pub struct SkipList<T, R = StdRng> {
    pub(crate) nodes: SlotMap<DefaultKey, SkipNode<T>>,

    /// NegInf sentinel of the top row
    pub(crate) head: DefaultKey,

    /// PosInf sentinel of the top row
    pub(crate) tail: DefaultKey,

    /// Number of rows above level 0. The top row never holds values.
    height: usize,

    /// Number of values inserted
    length: usize,

    rng: R,
}

impl<T> SkipList<T, StdRng> {
    /// Creates an empty list with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty list whose tower heights are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T, R> SkipList<T, R> {
    /// Creates an empty list drawing coin flips from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut nodes = SlotMap::new();
        let head = nodes.insert(SkipNode::new(Bound::NegInf));
        let tail = nodes.insert(SkipNode::new(Bound::PosInf));
        nodes[head].after = Some(tail);
        nodes[tail].before = Some(head);

        Self {
            nodes,
            head,
            tail,
            height: 0,
            length: 0,
            rng,
        }
    }
}

impl<T: Ord + Clone, R: Rng> SkipList<T, R> {
    /// Inserts a value with a randomly chosen tower height.
    pub fn insert(&mut self, value: T) {
        let tower = self.flip_tower_height();
        while tower >= self.height {
            self.push_level();
        }

        let mut pred = self.find_from(self.head, &value);
        let mut lower = self.link_after(pred, Bound::Value(value));

        for _ in 0..tower {
            // Back up to the nearest node with a tower above it
            while self.nodes[pred].above.is_none() {
                pred = self.nodes[pred]
                    .before
                    .expect("Row must start with a NegInf sentinel");
            }
            pred = self.nodes[pred].above.expect("Checked above");

            let value = self.nodes[lower].value.clone();
            let upper = self.link_after(pred, value);
            self.nodes[upper].below = Some(lower);
            self.nodes[lower].above = Some(upper);
            lower = upper;
        }

        self.length += 1;
    }

    /// Inserts every value from the iterator.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }

    /// Finds `value`, or the level-0 node just before where it would go.
    ///
    /// The result is never `None`: a query below every stored value lands
    /// on the `NegInf` sentinel.
    pub fn find(&self, value: &T) -> SkipRef<'_, T> {
        SkipRef {
            nodes: &self.nodes,
            node: self.find_from(self.head, value),
        }
    }

    /// Returns true if `value` was inserted.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).value() == Some(value)
    }

    /// Removal is not supported by this list.
    pub fn remove(&mut self, _value: &T) -> Result<()> {
        Err(Error::Unsupported {
            operation: "SkipList::remove",
        })
    }

    /// Number of levels in the tower holding `value`, if present.
    pub fn tower_height(&self, value: &T) -> Option<usize> {
        let node = self.find_from(self.head, value);
        if self.nodes[node].value.as_value() != Some(value) {
            return None;
        }

        let mut levels = 1;
        let mut current = node;
        while let Some(up) = self.nodes[current].above {
            levels += 1;
            current = up;
        }
        Some(levels)
    }

    /// Walks from `start` towards `value`.
    ///
    /// Moves forward while the next value is not greater than the target,
    /// drops a level when stuck, and stops at level 0.
    pub(crate) fn find_from(&self, start: DefaultKey, value: &T) -> DefaultKey {
        let mut current = start;

        loop {
            while let Some(next) = self.nodes[current].after {
                if !not_greater(&self.nodes[next].value, value) {
                    break;
                }
                current = next;
            }

            match self.nodes[current].below {
                Some(down) => current = down,
                None => return current,
            }
        }
    }

    fn flip_tower_height(&mut self) -> usize {
        let mut tower = 0;
        while self.rng.gen_bool(0.5) {
            tower += 1;
        }
        tower
    }

    /// Adds an empty sentinel row above the current top.
    fn push_level(&mut self) {
        let head = self.nodes.insert(SkipNode::new(Bound::NegInf));
        let tail = self.nodes.insert(SkipNode::new(Bound::PosInf));

        self.nodes[head].after = Some(tail);
        self.nodes[tail].before = Some(head);

        self.nodes[head].below = Some(self.head);
        self.nodes[tail].below = Some(self.tail);
        self.nodes[self.head].above = Some(head);
        self.nodes[self.tail].above = Some(tail);

        self.head = head;
        self.tail = tail;
        self.height += 1;

        tracing::debug!(height = self.height, "skip list grew a level");
    }

    /// Threads a new node into the row right after `pred`.
    fn link_after(&mut self, pred: DefaultKey, value: Bound<T>) -> DefaultKey {
        let succ = self.nodes[pred]
            .after
            .expect("Only PosInf sentinels lack a successor");
        let node = self.nodes.insert(SkipNode::new(value));

        self.nodes[node].before = Some(pred);
        self.nodes[node].after = Some(succ);
        self.nodes[pred].after = Some(node);
        self.nodes[succ].before = Some(node);

        node
    }
}

impl<T, R> SkipList<T, R> {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of rows above level 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns an iterator over the values in level 0, in order.
    pub fn iter(&self) -> SkipIter<'_, T> {
        let mut current = self.head;
        while let Some(down) = self.nodes[current].below {
            current = down;
        }

        SkipIter {
            nodes: &self.nodes,
            current: self.nodes[current].after,
        }
    }

    /// Returns shape statistics.
    pub fn stats(&self) -> SkipStats {
        SkipStats {
            len: self.length,
            height: self.height,
            nodes: self.nodes.len(),
        }
    }
}

impl<T> Default for SkipList<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_greater<T: Ord>(bound: &Bound<T>, value: &T) -> bool {
    match bound {
        Bound::NegInf => true,
        Bound::Value(v) => v <= value,
        Bound::PosInf => false,
    }
}

/// Handle to a level-0 node returned by [`SkipList::find`].
pub struct SkipRef<'a, T> {
    nodes: &'a SlotMap<DefaultKey, SkipNode<T>>,
    node: DefaultKey,
}

impl<'a, T> SkipRef<'a, T> {
    /// The stored value, or `None` for the `NegInf` sentinel.
    pub fn value(&self) -> Option<&'a T> {
        self.nodes[self.node].value.as_value()
    }

    pub fn bound(&self) -> &'a Bound<T> {
        &self.nodes[self.node].value
    }
}

/// Iterator over level 0 of a skip list.
pub struct SkipIter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, SkipNode<T>>,
    current: Option<DefaultKey>,
}

impl<'a, T> Iterator for SkipIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        let value = node.value.as_value()?;
        self.current = node.after;
        Some(value)
    }
}

impl<'a, T, R> IntoIterator for &'a SkipList<T, R> {
    type Item = &'a T;
    type IntoIter = SkipIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Statistics about a skip list.
#[derive(Debug, Clone, Copy)]
pub struct SkipStats {
    /// Number of values inserted
    pub len: usize,
    /// Rows above level 0
    pub height: usize,
    /// Arena nodes, sentinels and tower nodes included
    pub nodes: usize,
}
