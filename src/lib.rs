//! # ordsearch - Ordered Structures and Substring Search
//!
//! Self-adjusting and randomized ordered structures, plus the classic
//! substring search algorithms:
//!
//! - [`SplayTree`]: binary search tree that splays every accessed node to
//!   the root (amortized O(log n))
//! - [`SkipList`]: layered linked lists with coin-flip tower heights
//!   (expected O(log n)), seeded for reproducibility
//! - [`SuffixTrie`]: compressed trie of every suffix of one text
//! - [`matching`]: brute force, Knuth-Morris-Pratt, Boyer-Moore and longest
//!   common subsequence
//! - [`HuffmanTrie`]: frequency-weighted coding tree built on [`Tree`]
//!
//! Lookups never fail. A miss returns a sentinel instead: `None` for
//! offsets, or the nearest node for tree and list lookups.
//!
//! ## Example
//!
//! ```
//! use ordsearch_rs::{OrderedIndex, SkipList, SplayTree};
//!
//! fn sum_hits<I: OrderedIndex<i64>>(index: &mut I) -> i64 {
//!     for v in (0..10).map(|v| v * 2) {
//!         index.insert(v);
//!     }
//!     (0..20).filter_map(|q| index.lookup(&q).filter(|&&v| v == q).copied()).sum()
//! }
//!
//! assert_eq!(sum_hits(&mut SplayTree::new()), 90);
//! assert_eq!(sum_hits(&mut SkipList::with_seed(1)), 90);
//! ```
//!
//! ## Memory
//!
//! Every linked structure keeps its nodes in a generational arena
//! (SlotMap), and links are arena keys, so parent back references need no
//! shared ownership.

mod error;
mod huffman;
mod index;
pub mod matching;
mod skip_list;
mod skip_node;
mod splay;
mod splay_node;
mod suffix_trie;
mod tree;
mod trie_node;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use huffman::HuffmanTrie;
pub use index::OrderedIndex;
pub use matching::Strategy;
pub use skip_list::{SkipIter, SkipList, SkipRef, SkipStats};
pub use skip_node::Bound;
pub use splay::{SplayIter, SplayRef, SplayStats, SplayTree};
pub use splay_node::Side;
pub use suffix_trie::SuffixTrie;
pub use tree::{Tree, TreeNode};
