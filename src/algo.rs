//! Sort drivers and typed convenience entry points.
//!
//! The drivers ([`sort`], [`stable`], [`is_sorted`], [`reverse`]) work on any [`Sortable`].
//! They hand the actual sorting to the standard library:
//! 1. The positions `0..len` are sorted with `slice::sort_unstable_by` (or `slice::sort_by`
//!    for the stable variant), comparing two positions through [`Sortable::less`].
//! 2. The resulting permutation is applied to the collection in place, one
//!    [`Sortable::swap`] at a time.
//!
//! Elements are never copied or cloned, and the collection is not touched until the
//! permutation is complete.
//!
//! A predicate that is not a strict weak ordering never crashes the caller. If the
//! standard sort detects the inconsistency and panics, the collection is left in its
//! input order, which is one of the permutations such a predicate permits. The check
//! relies on unwinding, so under `panic = "abort"` the process still aborts.

use crate::core::{
    Float, FloatSlice, IntSlice, Integer, Lexical, NanFirst, Natural, Order, Reverse, Sortable,
    StringSlice,
};
use std::any::Any;
use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

/// Sorts `data` in increasing order as determined by [`Sortable::less`].
///
/// The sort is not guaranteed to be stable: equal elements may be reversed from their
/// original order. For a stable sort, use [`stable`].
///
/// # Examples
///
/// ```
/// use sorthelper::sort;
///
/// let mut data = vec![5, 2, 6, 3, 1, 4];
/// sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    if data.len() < 2 {
        return;
    }

    if let Some(indices) = sorted_positions(&*data, false) {
        apply_permutation(data, indices);
    }
}

/// Sorts `data` in increasing order as determined by [`Sortable::less`], keeping equal
/// elements in their original order.
///
/// Two elements are equal when neither is less than the other.
pub fn stable<S: Sortable + ?Sized>(data: &mut S) {
    if data.len() < 2 {
        return;
    }

    if let Some(indices) = sorted_positions(&*data, true) {
        apply_permutation(data, indices);
    }
}

/// Sorts `data` in decreasing order: [`sort`] over the inverted relation.
pub fn reverse<S: Sortable + ?Sized>(data: &mut S) {
    sort(&mut Reverse(data))
}

/// Reports whether `data` is sorted in increasing order.
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

/// Sorts the positions `0..len` of `data`.
///
/// Returns `None` when the standard sort gave up on an inconsistent `less`. Any other
/// panic, including one raised by `less` itself, is resumed.
fn sorted_positions<S: Sortable + ?Sized>(data: &S, stable: bool) -> Option<Vec<usize>> {
    let mut indices: Vec<usize> = (0..data.len()).collect();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        if stable {
            // Equal positions keep their input order, which is exactly the order of `indices`.
            indices.sort_by(|&i, &j| compare_positions(data, i, j));
        } else {
            indices.sort_unstable_by(|&i, &j| compare_positions(data, i, j));
        }
    }));

    match outcome {
        Ok(()) => Some(indices),
        Err(payload) if is_total_order_violation(&*payload) => None,
        Err(payload) => panic::resume_unwind(payload),
    }
}

// The standard sort reports a comparator that is not a total order with a fixed message.
fn is_total_order_violation(payload: &(dyn Any + Send)) -> bool {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str));

    message.is_some_and(|m| m.contains("does not correctly implement a total order"))
}

/// Three-way comparison of two positions derived from the strict `less` relation.
///
/// Both directions are asked, so positions neither of which precedes the other compare
/// `Equal`; the stable sort relies on this to keep them in order.
#[inline(always)]
fn compare_positions<S: Sortable + ?Sized>(data: &S, i: usize, j: usize) -> Ordering {
    if data.less(i, j) {
        Ordering::Less
    } else if data.less(j, i) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Reorders `data` so that position `k` holds the element previously at `indices[k]`.
///
/// Walks each permutation cycle once; every step is a single [`Sortable::swap`].
fn apply_permutation<S: Sortable + ?Sized>(data: &mut S, mut indices: Vec<usize>) {
    for i in 0..indices.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as placed
            current = next;
        }
        indices[current] = current;
    }
}

/// Sorts a slice of naturally ordered elements in increasing order.
///
/// The sort is not guaranteed to be stable. For a stable sort, use [`slice_stable`].
pub fn slice_sort<T: Ord>(x: &mut [T]) {
    x.sort_unstable()
}

/// Sorts a slice of naturally ordered elements in increasing order, keeping equal
/// elements in their original order.
pub fn slice_stable<T: Ord>(x: &mut [T]) {
    x.sort()
}

/// Reports whether `x` is sorted in increasing order.
pub fn slice_is_sorted<T: Ord>(x: &[T]) -> bool {
    x.is_sorted()
}

/// Sorts a slice of integers in increasing order.
pub fn ints<T: Integer>(x: &mut [T]) {
    IntSlice::new(x).sort()
}

/// Sorts a slice of floating-point numbers in increasing order.
/// Not-a-number (NaN) values are ordered before other values.
///
/// # Examples
///
/// ```
/// use sorthelper::floats;
///
/// let mut data = vec![5.2, -1.3, 0.7, -3.8, 2.6];
/// floats(&mut data);
///
/// assert_eq!(data, vec![-3.8, -1.3, 0.7, 2.6, 5.2]);
/// ```
pub fn floats<T: Float>(x: &mut [T]) {
    FloatSlice::new(x).sort()
}

/// Sorts a slice of strings in increasing order.
pub fn strings<T: AsRef<str>>(x: &mut [T]) {
    StringSlice::new(x).sort()
}

/// Reports whether `x` is sorted in increasing order.
pub fn ints_are_sorted<T: Integer>(x: &[T]) -> bool {
    sorted_by(x, Natural)
}

/// Reports whether `x` is sorted in increasing order, with not-a-number (NaN) values
/// before any other values.
pub fn floats_are_sorted<T: Float>(x: &[T]) -> bool {
    sorted_by(x, NanFirst)
}

/// Reports whether `x` is sorted in increasing order.
pub fn strings_are_sorted<T: AsRef<str>>(x: &[T]) -> bool {
    sorted_by(x, Lexical)
}

// Shared-borrow counterpart of `is_sorted` for the typed entry points.
fn sorted_by<T, O: Order<T>>(x: &[T], order: O) -> bool {
    x.windows(2).all(|w| !order.less(&w[1], &w[0]))
}
