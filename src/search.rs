use crate::{bst::Bst, merge_sort, SearchIndex, SearchScheme};

/// Linear scan for an exact match. No precondition on order.
pub fn sequential_search(vals: &[i32], q: i32) -> bool {
    for &x in vals {
        if x == q {
            return true;
        }
    }
    false
}

/// Halving-interval search. `vals` must be sorted non-decreasing.
pub fn binary_search(vals: &[i32], q: i32) -> bool {
    // Nothing to find, and no last element to compare against.
    let Some(&max) = vals.last() else {
        return false;
    };
    // Queries above the maximum skip the loop entirely.
    if q > max {
        return false;
    }

    let mut start = 0;
    let mut end = vals.len() - 1;
    while start <= end {
        let mid = start + (end - start) / 2;
        let x = vals[mid];
        if x == q {
            return true;
        }
        if x > q {
            // Everything left of index 0 is empty.
            let Some(e) = mid.checked_sub(1) else {
                return false;
            };
            end = e;
        } else {
            start = mid + 1;
        }
    }
    false
}

/// Search a tree built by [`Bst`] insertion.
pub fn tree_search(tree: &Bst, q: i32) -> bool {
    tree.contains(&q)
}

/// The dataset after preparation for binary search: sorted in place by merge sort.
#[derive(Clone, Debug, Default)]
pub struct SortedVec {
    vals: Vec<i32>,
}

impl SortedVec {
    pub fn as_slice(&self) -> &[i32] {
        &self.vals
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.vals
    }
}

impl SearchIndex for SortedVec {
    fn new(mut vals: Vec<i32>) -> Self {
        merge_sort::sort(&mut vals);
        SortedVec { vals }
    }
}

pub struct SequentialSearch;

impl SearchScheme<SortedVec> for SequentialSearch {
    fn query_one(&self, index: &SortedVec, q: i32) -> bool {
        sequential_search(&index.vals, q)
    }
    fn name(&self) -> &'static str {
        "sequential_search"
    }
}

pub struct BinarySearch;

impl SearchScheme<SortedVec> for BinarySearch {
    fn query_one(&self, index: &SortedVec, q: i32) -> bool {
        binary_search(&index.vals, q)
    }
    fn name(&self) -> &'static str {
        "binary_search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset() {
        for q in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!(!sequential_search(&[], q));
            assert!(!binary_search(&[], q));
        }
    }

    #[test]
    fn single_element() {
        for q in [-2, -1, 0, 1, 2] {
            assert_eq!(sequential_search(&[0], q), q == 0);
            assert_eq!(binary_search(&[0], q), q == 0);
        }
    }

    #[test]
    fn binary_search_bounds() {
        let vals = [-7, -3, 0, 0, 2, 8, 8, 8, 15];
        for q in -10..20 {
            assert_eq!(
                binary_search(&vals, q),
                vals.contains(&q),
                "disagreement on {q}"
            );
        }
        assert!(!binary_search(&vals, i32::MAX));
        assert!(!binary_search(&vals, i32::MIN));
    }

    #[test]
    fn extreme_keys() {
        let vals = [i32::MIN, 0, i32::MAX];
        for q in vals {
            assert!(binary_search(&vals, q));
        }
        assert!(!binary_search(&vals, i32::MIN + 1));
        assert!(!binary_search(&vals, i32::MAX - 1));
    }

    #[test]
    fn sorted_vec_sorts() {
        let index = SortedVec::new(vec![5, 1, 9]);
        assert_eq!(index.as_slice(), &[1, 5, 9]);
        assert_eq!(index.query(&[1, 9, 7], &SequentialSearch), vec![true, true, false]);
        assert_eq!(index.query(&[1, 9, 7], &BinarySearch), vec![true, true, false]);
    }

    #[test]
    fn tree_search_delegates() {
        let tree: Bst = [5, 1, 9].into_iter().collect();
        assert!(tree_search(&tree, 5));
        assert!(!tree_search(&tree, 6));
    }
}
