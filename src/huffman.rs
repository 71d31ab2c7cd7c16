//! Huffman coding tree.
//!
//! Builds a forest of single-symbol trees keyed by frequency and keeps
//! merging the two lightest roots until one tree remains. The minimum is
//! found by a linear scan over the forest, so construction is O(k²) in the
//! alphabet size; ties go to the root that comes first in the forest.
//!
//! # Example
//!
//! ```
//! use ordsearch_rs::HuffmanTrie;
//!
//! let trie = HuffmanTrie::from_symbols("abab".chars()).unwrap();
//! // Two equally frequent symbols: one bit each
//! assert_eq!(trie.compressed_size(), 4);
//! ```

use crate::error::{Error, Result};
use crate::tree::Tree;
use ahash::AHashMap as HashMap;
use slotmap::DefaultKey;
use std::hash::Hash;

/// Frequency-weighted binary coding tree.
pub struct HuffmanTrie<T> {
    tree: Tree<T>,
    root: DefaultKey,
    symbols: usize,
    total: u64,
    size: u64,
}

impl<T> HuffmanTrie<T> {
    /// Builds the tree from `(symbol, frequency)` pairs.
    ///
    /// Fails with [`Error::EmptyAlphabet`] when no pairs are given, and with
    /// [`Error::FrequencyOverflow`] when the total frequency or the encoded
    /// size does not fit in a `u64`.
    pub fn from_frequencies<I: IntoIterator<Item = (T, u64)>>(frequencies: I) -> Result<Self> {
        let mut tree = Tree::new();
        let mut forest: Vec<DefaultKey> = frequencies
            .into_iter()
            .map(|(symbol, freq)| tree.leaf(symbol, freq))
            .collect();

        if forest.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let symbols = forest.len();
        let total = forest
            .iter()
            .try_fold(0u64, |sum, &id| sum.checked_add(tree.node(id).key))
            .ok_or(Error::FrequencyOverflow)?;

        while forest.len() > 1 {
            let first = lightest(&tree, &forest, None);
            let second = lightest(&tree, &forest, Some(first));
            let merged = tree
                .merge(forest[first], forest[second])
                .ok_or(Error::FrequencyOverflow)?;

            // Remove the higher index first so the lower one stays valid
            forest.remove(first.max(second));
            forest.remove(first.min(second));
            forest.push(merged);
        }

        let root = forest[0];
        let size = tree
            .depth_weighted_sum(root)
            .ok_or(Error::FrequencyOverflow)?;

        tracing::debug!(symbols, total, compressed = size, "built huffman tree");

        Ok(Self {
            tree,
            root,
            symbols,
            total,
            size,
        })
    }

    /// Σ(frequency × depth) over the leaves: the encoded size in bits.
    pub fn compressed_size(&self) -> u64 {
        self.size
    }

    /// Number of distinct symbols.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }

    /// Sum of all symbol frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.total
    }

    /// Decodes a bit stream (`false` = left, `true` = right).
    ///
    /// A one-symbol alphabet has no code words, so only an empty stream
    /// decodes for it.
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let mut symbols = Vec::new();
        let mut current = self.root;

        for &bit in bits {
            let node = self.tree.node(current);
            let next = if bit { node.right } else { node.left };
            current = next.ok_or(Error::InvalidCode)?;

            let node = self.tree.node(current);
            if node.is_leaf() {
                symbols.push(node.payload.clone().ok_or(Error::InvalidCode)?);
                current = self.root;
            }
        }

        if current != self.root {
            return Err(Error::InvalidCode);
        }
        Ok(symbols)
    }
}

impl<T: Hash + Eq + Clone> HuffmanTrie<T> {
    /// Counts symbol frequencies and builds the tree.
    ///
    /// Symbols enter the forest in order of first appearance.
    pub fn from_symbols<I: IntoIterator<Item = T>>(symbols: I) -> Result<Self> {
        let mut index: HashMap<T, usize> = HashMap::new();
        let mut frequencies: Vec<(T, u64)> = Vec::new();

        for symbol in symbols {
            match index.get(&symbol) {
                Some(&i) => frequencies[i].1 += 1,
                None => {
                    index.insert(symbol.clone(), frequencies.len());
                    frequencies.push((symbol, 1));
                }
            }
        }

        Self::from_frequencies(frequencies)
    }

    /// Returns the code word of every symbol.
    pub fn codes(&self) -> HashMap<T, Vec<bool>> {
        let mut codes = HashMap::new();
        let mut stack = vec![(self.root, Vec::new())];

        while let Some((id, path)) = stack.pop() {
            let node = self.tree.node(id);
            if node.is_leaf() {
                if let Some(symbol) = &node.payload {
                    codes.insert(symbol.clone(), path);
                }
                continue;
            }
            if let Some(right) = node.right {
                let mut code = path.clone();
                code.push(true);
                stack.push((right, code));
            }
            if let Some(left) = node.left {
                let mut code = path;
                code.push(false);
                stack.push((left, code));
            }
        }

        codes
    }

    /// Encodes a symbol sequence into bits.
    pub fn encode<'a, I>(&self, symbols: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let codes = self.codes();
        let mut bits = Vec::new();
        for symbol in symbols {
            let code = codes.get(symbol).ok_or(Error::UnknownSymbol)?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

/// Index of the lightest root in `forest`, skipping `exclude`.
fn lightest<T>(tree: &Tree<T>, forest: &[DefaultKey], exclude: Option<usize>) -> usize {
    let mut best: Option<usize> = None;
    for (i, &id) in forest.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if tree.node(forest[b]).key <= tree.node(id).key => {}
            _ => best = Some(i),
        }
    }
    best.expect("Forest holds at least two roots while merging")
}
