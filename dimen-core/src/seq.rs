//! Ordered sequence helpers: split, stable merge and merge sort.
//!
//! These are the building blocks of dimension canonicalization, but they are written against arbitrary element
//! types and comparators so they can be used (and tested) on their own.
//!
//! ```rust
//! use dimen_core::seq;
//!
//! let (head, tail) = seq::split(vec!["int", "long", "double"], 2);
//! assert_eq!(head, ["int", "long"]);
//! assert_eq!(tail, ["double"]);
//!
//! let sorted = seq::sort_by(vec![3, 1, 2], |a, b| a.cmp(b));
//! assert_eq!(sorted, [1, 2, 3]);
//! ```

use core::cmp::Ordering;

/// Splits `seq` into its first `n` elements and the remaining ones, both in original order.
///
/// # Panics
///
/// Panics if `n` is greater than the length of the sequence.
pub fn split<T>(mut seq: Vec<T>, n: usize) -> (Vec<T>, Vec<T>) {
    assert!(
        n <= seq.len(),
        "split index {} out of range for sequence of length {}",
        n,
        seq.len()
    );
    let tail = seq.split_off(n);
    (seq, tail)
}

/// Prepends `items` (kept in their own order) to `seq`.
pub fn push_front<T>(seq: Vec<T>, items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = items.into_iter().collect();
    out.extend(seq);
    out
}

/// Appends `items` (kept in their own order) to `seq`.
pub fn push_back<T>(mut seq: Vec<T>, items: impl IntoIterator<Item = T>) -> Vec<T> {
    seq.extend(items);
    seq
}

/// Merges two sequences already sorted by `cmp` into one sorted sequence.
///
/// The merge is stable: when elements compare equal, the one from `left` comes first.
pub fn merge_sorted<T, F>(left: Vec<T>, right: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_with(left, right, &mut cmp)
}

/// Sorts `seq` with a stable top-down merge sort.
///
/// The sequence is split at `ceil(n / 2)`, both halves are sorted recursively, then merged with
/// [`merge_sorted`].
pub fn sort_by<T, F>(seq: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_with(seq, &mut cmp)
}

fn sort_with<T, F>(seq: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq;
    }
    let mid = seq.len().div_ceil(2);
    let (left, right) = split(seq, mid);
    let left = sort_with(left, cmp);
    let right = sort_with(right, cmp);
    merge_with(left, right, cmp)
}

fn merge_with<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }

    out
}
