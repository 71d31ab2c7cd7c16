use crate::huffman::HuffmanTrie;
use crate::matching::{
    boyer_moore, brute_force, huffman_compressed_size, knuth_morris_pratt,
    longest_common_subsequence, longest_common_subsequence_of, Strategy,
};
use proptest::prelude::*;

/// Returns true if `sub` can be read off `seq` left to right.
fn is_subsequence(sub: &[u8], seq: &[u8]) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|c| it.any(|s| s == c))
}

proptest! {
    /// Property 1: First-match agreement
    /// Brute force, KMP and Boyer-Moore report the same first offset.
    #[test]
    fn prop_first_match_agreement(text in "[abc]{0,60}", pattern in "[abc]{0,6}") {
        let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
        let expected = brute_force(text, pattern);

        prop_assert_eq!(knuth_morris_pratt(text, pattern), expected);
        prop_assert_eq!(boyer_moore(text, pattern), expected);
    }

    /// Property 2: Every strategy reports a real occurrence
    #[test]
    fn prop_strategies_report_occurrences(text in "[ab]{0,40}", pattern in "[ab]{1,5}") {
        let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
        let first = brute_force(text, pattern);

        for strategy in Strategy::ALL {
            let found = strategy.search(text, pattern);
            prop_assert_eq!(found.is_some(), first.is_some(), "{}", strategy);
            if let Some(offset) = found {
                prop_assert_eq!(&text[offset..offset + pattern.len()], pattern);
                prop_assert!(offset >= first.unwrap_or(0));
            }
        }
    }

    /// Property 3: LCS is symmetric and bounded
    #[test]
    fn prop_lcs(a in "[abcd]{0,30}", b in "[abcd]{0,30}") {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let len = longest_common_subsequence(a, b);

        prop_assert_eq!(len, longest_common_subsequence(b, a));
        prop_assert!(len <= a.len().min(b.len()));

        let lcs = longest_common_subsequence_of(a, b);
        prop_assert_eq!(lcs.len(), len);
        prop_assert!(is_subsequence(&lcs, a));
        prop_assert!(is_subsequence(&lcs, b));
    }

    /// Property 4: Huffman size matches the code words
    /// Encoding the text takes exactly the reported bits, and decodes back.
    #[test]
    fn prop_huffman_roundtrip(text in prop::collection::vec(0u8..12, 1..200)) {
        let trie = HuffmanTrie::from_symbols(text.iter().copied()).unwrap();
        let bits = trie.encode(&text).unwrap();

        prop_assert_eq!(bits.len() as u64, trie.compressed_size());
        prop_assert_eq!(huffman_compressed_size(&text).unwrap(), trie.compressed_size());
        if trie.symbol_count() > 1 {
            prop_assert_eq!(trie.decode(&bits).unwrap(), text.clone());
        }
    }

    /// Property 5: Huffman never loses to a fixed-length code
    #[test]
    fn prop_huffman_beats_fixed_length(text in prop::collection::vec(0u8..12, 1..200)) {
        let trie = HuffmanTrie::from_symbols(text.iter().copied()).unwrap();
        let k = trie.symbol_count() as u64;
        let fixed_bits = 64 - (k - 1).leading_zeros() as u64;

        prop_assert!(trie.compressed_size() <= fixed_bits * text.len() as u64);
    }

    /// Property 6: Balanced two-symbol alphabet costs one bit per symbol
    #[test]
    fn prop_huffman_balanced_pair(n in 1u64..10_000) {
        let trie = HuffmanTrie::from_frequencies([('x', n), ('y', n)]).unwrap();
        prop_assert_eq!(trie.compressed_size(), 2 * n);
    }
}

/// Bolero fuzz test: matchers agree on arbitrary bytes
#[test]
fn fuzz_matchers_agree() {
    bolero::check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(text, pattern)| {
            let expected = brute_force(text, pattern);
            assert_eq!(knuth_morris_pratt(text, pattern), expected);
            assert_eq!(boyer_moore(text, pattern), expected);
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_documented_cases() {
        assert_eq!(knuth_morris_pratt(b"ababcabcabababd", b"ababd"), Some(10));
        assert_eq!(boyer_moore(b"ababcabcabababd", b"ababd"), Some(10));
        assert_eq!(brute_force(b"ababcabcabababd", b"ababd"), Some(10));
        assert_eq!(longest_common_subsequence(b"ABCBDAB", b"BDCABA"), 4);
    }

    #[test]
    fn test_worst_case_inputs_terminate() {
        let text = vec![b'a'; 2000];
        let mut pattern = vec![b'a'; 50];
        pattern[0] = b'b';
        assert_eq!(brute_force(&text, &pattern), None);
        assert_eq!(knuth_morris_pratt(&text, &pattern), None);
        assert_eq!(boyer_moore(&text, &pattern), None);
    }
}
