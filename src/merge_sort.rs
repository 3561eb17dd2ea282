//! Stable top-down merge sort over a closed index range.
use itertools::Itertools;
use std::cmp::Ordering;

/// Sort the whole slice. Empty slices are a no-op.
pub fn sort<T: Ord + Clone>(seq: &mut [T]) {
    if !seq.is_empty() {
        let last = seq.len() - 1;
        merge_sort(seq, 0, last);
    }
}

/// Sort `seq[first..=last]` into non-decreasing order, in place.
///
/// Indices must lie inside `seq`; `first > last` is an empty range and does nothing.
pub fn merge_sort<T: Ord + Clone>(seq: &mut [T], first: usize, last: usize) {
    merge_sort_by(seq, first, last, &mut |a: &T, b: &T| a.cmp(b));
}

/// Like [`merge_sort`], ordering elements with `cmp`. Equal elements keep their relative order.
pub fn merge_sort_by<T: Clone, F>(seq: &mut [T], first: usize, last: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if first < last {
        let mid = first + (last - first) / 2;
        merge_sort_by(seq, first, mid, cmp);
        merge_sort_by(seq, mid + 1, last, cmp);
        merge(seq, first, mid, last, cmp);
    }
}

/// Merge the sorted runs `seq[first..=mid]` and `seq[mid+1..=last]`.
fn merge<T: Clone, F>(seq: &mut [T], first: usize, mid: usize, last: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let left = seq[first..=mid].to_vec();
    let right = seq[mid + 1..=last].to_vec();

    let (mut i, mut j) = (0, 0);
    let mut k = first;
    while i < left.len() && j < right.len() {
        // Ties take from the left run.
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            seq[k] = left[i].clone();
            i += 1;
        } else {
            seq[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    for x in &left[i..] {
        seq[k] = x.clone();
        k += 1;
    }
    for x in &right[j..] {
        seq[k] = x.clone();
        k += 1;
    }
}

/// Check that adjacent pairs are non-decreasing.
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.iter().tuple_windows().all(|(x, y)| x <= y)
}
