use crate::skip_list::SkipList;
use crate::splay::SplayTree;
use rand::Rng;

/// Common insert/lookup surface of the ordered structures.
///
/// Lets a workload drive either structure without knowing which one it has.
pub trait OrderedIndex<T> {
    fn insert(&mut self, value: T);

    /// Returns the value the structure lands on while looking for `value`.
    ///
    /// This is `value` itself on a hit. On a miss it is whatever nearby value
    /// the structure reports, or `None` when there is nothing to report.
    fn lookup(&mut self, value: &T) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> OrderedIndex<T> for SplayTree<T> {
    fn insert(&mut self, value: T) {
        SplayTree::insert(self, value);
    }

    fn lookup(&mut self, value: &T) -> Option<&T> {
        self.find(value).map(|found| found.value())
    }

    fn len(&self) -> usize {
        SplayTree::len(self)
    }
}

impl<T: Ord + Clone, R: Rng> OrderedIndex<T> for SkipList<T, R> {
    fn insert(&mut self, value: T) {
        SkipList::insert(self, value);
    }

    fn lookup(&mut self, value: &T) -> Option<&T> {
        self.find(value).value()
    }

    fn len(&self) -> usize {
        SkipList::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inserts even numbers and sums the hits over a query range.
    fn even_workload<I: OrderedIndex<i64>>(index: &mut I, n: i64) -> i64 {
        for v in 0..n {
            index.insert(2 * v);
        }
        (0..2 * n)
            .filter_map(|q| index.lookup(&q).copied().filter(|&v| v == q))
            .sum()
    }

    #[test]
    fn test_structures_agree_on_hits() {
        let mut tree = SplayTree::new();
        let mut list = SkipList::with_seed(17);

        let expected: i64 = (0..100).map(|v| 2 * v).sum();
        assert_eq!(even_workload(&mut tree, 100), expected);
        assert_eq!(even_workload(&mut list, 100), expected);
        assert_eq!(OrderedIndex::len(&tree), 100);
        assert!(!OrderedIndex::is_empty(&list));
    }

    #[test]
    fn test_lookup_empty() {
        let mut tree = SplayTree::<i64>::new();
        let mut list = SkipList::<i64>::with_seed(1);
        assert_eq!(OrderedIndex::lookup(&mut tree, &4), None);
        assert_eq!(OrderedIndex::lookup(&mut list, &4), None);
    }
}
