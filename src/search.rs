//! Binary search over slices sorted in ascending order.
//!
//! Every entry point returns the insertion point of the target: the smallest index
//! `i` such that `a[i] >= x`, or `a.len()` if there is none. Whether the target is
//! actually present is for the caller to check:
//!
//! ```
//! use sorthelper::search;
//!
//! let a = [1, 3, 6, 10, 15, 21, 28, 36, 45, 55];
//! let i = search(&a, &6);
//!
//! assert!(i < a.len() && a[i] == 6);
//! assert_eq!(i, 2);
//! ```
//!
//! The slice must be sorted in ascending order. This is not checked; on unsorted
//! input the returned index is unspecified (but always within `0..=a.len()`).

use crate::core::{Float, Integer};

/// Searches for `x` in the ascending slice `a` and returns its insertion point.
pub fn search<T: Ord>(a: &[T], x: &T) -> usize {
    a.partition_point(|e| e < x)
}

/// Returns the smallest index at which `pred` holds, or `a.len()` if it never does.
///
/// `pred` must be monotone over `a`: false for some prefix and true for the rest.
///
/// # Examples
///
/// ```
/// use sorthelper::search_by;
///
/// let words = ["apple", "fig", "banana", "cherry"];
/// // Monotone once the words are ordered by length.
/// let mut by_len = words;
/// by_len.sort_by_key(|w| w.len());
///
/// assert_eq!(search_by(&by_len, |w| w.len() >= 5), 1);
/// ```
pub fn search_by<T, F>(a: &[T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    a.partition_point(|e| !pred(e))
}

/// Searches for `x` in an ascending slice of integers and returns its insertion point,
/// as specified by [`search`].
///
/// # Examples
///
/// ```
/// use sorthelper::search_ints;
///
/// let a = [1, 2, 3, 4, 6, 7, 8];
///
/// assert_eq!(search_ints(&a, 2), 1);
/// assert_eq!(search_ints(&a, 5), 4); // not present, insert at 4
/// ```
pub fn search_ints<T: Integer>(a: &[T], x: T) -> usize {
    a.partition_point(|&e| e < x)
}

/// Searches for `x` in an ascending slice of floating-point numbers and returns its
/// insertion point, as specified by [`search`].
///
/// The probe is the IEEE-754 comparison `a[i] >= x`. NaN elements never satisfy it,
/// which matches their position at the front of a [`crate::floats`]-sorted slice.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn search_floats<T: Float>(a: &[T], x: T) -> usize {
    a.partition_point(|&e| !(e >= x))
}

/// Searches for `x` in an ascending slice of strings and returns its insertion point,
/// as specified by [`search`].
pub fn search_strings<T: AsRef<str>>(a: &[T], x: &str) -> usize {
    a.partition_point(|e| e.as_ref() < x)
}
