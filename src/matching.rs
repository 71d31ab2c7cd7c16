//! Substring search and sequence comparison algorithms.
//!
//! All functions are pure and work on slices of any comparable symbol, so
//! the same code serves `&[u8]`, `&[char]` and integer sequences. Offsets
//! are indices into the text slice; a miss is `None`.
//!
//! # Example
//!
//! ```
//! use ordsearch_rs::matching::{boyer_moore, knuth_morris_pratt, Strategy};
//!
//! let text = b"ababcabcabababd";
//! assert_eq!(knuth_morris_pratt(text, b"ababd"), Some(10));
//! assert_eq!(boyer_moore(text, b"ababd"), Some(10));
//!
//! let strategy: Strategy = "brute-force".parse().unwrap();
//! assert_eq!(strategy.search(text, b"cab"), Some(4));
//! ```

use crate::error::{Error, Result};
use crate::huffman::HuffmanTrie;
use crate::suffix_trie::SuffixTrie;
use ahash::AHashMap as HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Slides the pattern over the text one offset at a time. O(n·m).
pub fn brute_force<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.len() > text.len() {
        return None;
    }

    (0..=text.len() - pattern.len()).find(|&i| {
        pattern
            .iter()
            .zip(&text[i..])
            .all(|(p, t)| p == t)
    })
}

/// KMP failure function.
///
/// `failure[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
pub fn failure_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut i = 1;
    let mut j = 0;

    while i < pattern.len() {
        if pattern[i] == pattern[j] {
            failure[i] = j + 1;
            i += 1;
            j += 1;
        } else if j > 0 {
            j = failure[j - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

/// Knuth-Morris-Pratt search. O(n + m).
///
/// On a mismatch the pattern index falls back through the failure function
/// instead of re-scanning text.
pub fn knuth_morris_pratt<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let failure = failure_function(pattern);
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            if j == pattern.len() - 1 {
                return Some(i - j);
            }
            i += 1;
            j += 1;
        } else if j > 0 {
            j = failure[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

/// Boyer-Moore last-occurrence function: rightmost index of each symbol in
/// the pattern. Symbols absent from the map count as −1.
pub fn last_occurrence<T: Hash + Eq + Clone>(pattern: &[T]) -> HashMap<T, usize> {
    let mut last = HashMap::with_capacity(pattern.len());
    for (i, symbol) in pattern.iter().enumerate() {
        last.insert(symbol.clone(), i);
    }
    last
}

/// Boyer-Moore search with the last-occurrence heuristic.
///
/// Compares right to left. On a mismatch at pattern index `j` against text
/// symbol `c` the text index advances by `m − min(j, 1 + last(c))`, which is
/// never less than one. Sub-linear on typical text, O(n·m) worst case.
pub fn boyer_moore<T: Hash + Eq + Clone>(text: &[T], pattern: &[T]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m > text.len() {
        return None;
    }

    let last = last_occurrence(pattern);
    let mut i = m - 1;
    let mut j = m - 1;

    while i < text.len() {
        if text[i] == pattern[j] {
            if j == 0 {
                return Some(i);
            }
            i -= 1;
            j -= 1;
        } else {
            let after_last = last.get(&text[i]).map_or(0, |&l| l + 1);
            i += m - j.min(after_last);
            j = m - 1;
        }
    }

    None
}

/// Length of the longest common subsequence. O(n·m) time, O(m) space.
pub fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            row[j + 1] = if x == y {
                prev[j] + 1
            } else {
                row[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}

/// One longest common subsequence, recovered from the full DP table.
pub fn longest_common_subsequence_of<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];

    for i in 0..a.len() {
        for j in 0..b.len() {
            table[(i + 1) * width + j + 1] = if a[i] == b[j] {
                table[i * width + j] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(table[a.len() * width + b.len()]);
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            result.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * width + j] >= table[i * width + j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.reverse();
    result
}

/// Bits needed to Huffman-code `text` with its own symbol frequencies.
///
/// Fails with [`Error::EmptyAlphabet`] for empty text.
pub fn huffman_compressed_size<T: Hash + Eq + Clone>(text: &[T]) -> Result<u64> {
    Ok(HuffmanTrie::from_symbols(text.iter().cloned())?.compressed_size())
}

/// Builds a suffix trie over `text` and searches it once.
pub fn suffix_trie_search<T: Eq + Clone>(text: &[T], pattern: &[T]) -> Option<usize> {
    SuffixTrie::new(text.iter().cloned()).search(pattern)
}

/// Interchangeable substring search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BruteForce,
    KnuthMorrisPratt,
    BoyerMoore,
    SuffixTrie,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BruteForce,
        Strategy::KnuthMorrisPratt,
        Strategy::BoyerMoore,
        Strategy::SuffixTrie,
    ];

    /// Runs this strategy over `text`.
    pub fn search<T: Hash + Eq + Clone>(self, text: &[T], pattern: &[T]) -> Option<usize> {
        match self {
            Strategy::BruteForce => brute_force(text, pattern),
            Strategy::KnuthMorrisPratt => knuth_morris_pratt(text, pattern),
            Strategy::BoyerMoore => boyer_moore(text, pattern),
            Strategy::SuffixTrie => suffix_trie_search(text, pattern),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::KnuthMorrisPratt => "kmp",
            Strategy::BoyerMoore => "boyer-moore",
            Strategy::SuffixTrie => "suffix-trie",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "brute-force" | "bruteforce" | "brute" => Ok(Strategy::BruteForce),
            "kmp" | "knuth-morris-pratt" => Ok(Strategy::KnuthMorrisPratt),
            "boyer-moore" | "boyermoore" | "bm" => Ok(Strategy::BoyerMoore),
            "suffix-trie" | "suffixtrie" | "trie" => Ok(Strategy::SuffixTrie),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"ababcabcabababd";

    #[test]
    fn test_first_match_agreement() {
        for strategy in [
            Strategy::BruteForce,
            Strategy::KnuthMorrisPratt,
            Strategy::BoyerMoore,
        ] {
            assert_eq!(strategy.search(TEXT, b"ababd"), Some(10), "{strategy}");
            assert_eq!(strategy.search(TEXT, b"abc"), Some(2), "{strategy}");
            assert_eq!(strategy.search(TEXT, b"xyz"), None, "{strategy}");
            assert_eq!(strategy.search(TEXT, b""), Some(0), "{strategy}");
        }
    }

    #[test]
    fn test_suffix_trie_strategy() {
        let search = |p: &[u8]| Strategy::SuffixTrie.search(TEXT, p);
        // Single occurrence, so the trie has no choice
        assert_eq!(search(b"ababd"), Some(10));
        assert!(matches!(search(b"abc"), Some(2) | Some(5)));
        assert_eq!(search(b"xyz"), None);
        assert_eq!(search(b""), Some(0));
    }

    #[test]
    fn test_suffix_trie_strategy_returns_some_occurrence() {
        // The trie reports an occurrence, not necessarily the first one
        let offset = Strategy::SuffixTrie.search(b"banana", b"ana").unwrap();
        assert!(offset == 1 || offset == 3);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert_eq!(brute_force(b"ab", b"abc"), None);
        assert_eq!(knuth_morris_pratt(b"ab", b"abc"), None);
        assert_eq!(boyer_moore(b"ab", b"abc"), None);
    }

    #[test]
    fn test_failure_function() {
        assert_eq!(failure_function(b"abacab"), vec![0, 0, 1, 0, 1, 2]);
        assert_eq!(failure_function(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(failure_function(b""), Vec::<usize>::new());
    }

    #[test]
    fn test_last_occurrence() {
        let last = last_occurrence(b"abacab");
        assert_eq!(last[&b'a'], 4);
        assert_eq!(last[&b'b'], 5);
        assert_eq!(last[&b'c'], 3);
        assert!(!last.contains_key(&b'd'));
    }

    #[test]
    fn test_boyer_moore_shift_never_stalls() {
        // The mismatching symbol occurs right of j in the pattern
        assert_eq!(boyer_moore(b"aaaaaaaab", b"ab"), Some(7));
        assert_eq!(boyer_moore(b"baaaaaaaa", b"ab"), None);
        assert_eq!(boyer_moore(b"abababab", b"bab"), Some(1));
    }

    #[test]
    fn test_chars() {
        let text: Vec<char> = "naïve café".chars().collect();
        let pattern: Vec<char> = "café".chars().collect();
        assert_eq!(knuth_morris_pratt(&text, &pattern), Some(6));
        assert_eq!(boyer_moore(&text, &pattern), Some(6));
    }

    #[test]
    fn test_lcs() {
        assert_eq!(longest_common_subsequence(b"ABCBDAB", b"BDCABA"), 4);
        assert_eq!(longest_common_subsequence(b"", b"abc"), 0);
        assert_eq!(longest_common_subsequence(b"abc", b"abc"), 3);
        assert_eq!(longest_common_subsequence(b"abc", b"def"), 0);
    }

    #[test]
    fn test_lcs_of() {
        let lcs = longest_common_subsequence_of(b"ABCBDAB", b"BDCABA");
        assert_eq!(lcs.len(), 4);
        // Must be a subsequence of both inputs
        for source in [&b"ABCBDAB"[..], &b"BDCABA"[..]] {
            let mut it = source.iter();
            assert!(lcs.iter().all(|c| it.any(|s| s == c)));
        }
    }

    #[test]
    fn test_huffman_compressed_size() {
        assert_eq!(huffman_compressed_size(b"abababab").unwrap(), 8);
        assert!(matches!(
            huffman_compressed_size::<u8>(&[]),
            Err(Error::EmptyAlphabet)
        ));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("KMP".parse::<Strategy>(), Ok(Strategy::KnuthMorrisPratt));
        assert_eq!("trie".parse::<Strategy>(), Ok(Strategy::SuffixTrie));
        assert_eq!(
            "fast".parse::<Strategy>(),
            Err(Error::UnknownStrategy("fast".into()))
        );
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }
}
