//! Core traits and types for sorthelper.
//!
//! This module defines:
//! - [`Sortable`]: The adapter trait the sort drivers operate on.
//! - [`Order`]: A comparison strategy, with [`Natural`], [`NanFirst`] and [`Lexical`].
//! - [`Slice`]: The generic adapter binding a slice to a strategy, and its typed aliases.
//! - [`Reverse`]: An adapter inverting another adapter's order.

use crate::algo;
use crate::search;
use std::collections::VecDeque;

/// A collection that can be sorted in place through its positions.
///
/// The sort drivers in [`crate::algo`] never look at elements directly: they only ask
/// whether the element at one position precedes the element at another, and exchange
/// two positions. Any indexable collection can therefore be sorted without copying
/// its elements into an intermediate representation.
///
/// Indices passed to [`Sortable::swap`] and [`Sortable::less`] are always supplied
/// by the driver and are within `0..self.len()`.
///
/// # Examples
///
/// ```
/// use sorthelper::{sort, Sortable};
///
/// // Two parallel columns sorted by the first one.
/// struct Columns {
///     keys: Vec<u32>,
///     names: Vec<&'static str>,
/// }
///
/// impl Sortable for Columns {
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.keys.swap(i, j);
///         self.names.swap(i, j);
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.keys[i] < self.keys[j]
///     }
/// }
///
/// let mut columns = Columns {
///     keys: vec![3, 1, 2],
///     names: vec!["c", "a", "b"],
/// };
/// sort(&mut columns);
///
/// assert_eq!(columns.names, vec!["a", "b", "c"]);
/// ```
pub trait Sortable {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Exchanges the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Reports whether the element at `i` must precede the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Natural ordering for the plain collections, so they need no adapter.
impl<T: Ord> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }
}

impl<T: Ord> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }
}

// O(1) random access and swap, so it sorts as well as a slice does.
impl<T: Ord> Sortable for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }
}

/// A comparison strategy: reports whether `a` strictly precedes `b`.
///
/// The built-in strategies are zero-sized markers selected through the type parameter
/// of [`Slice`]. A strategy that carries state is passed by value to
/// [`Slice::with_order`].
pub trait Order<T: ?Sized> {
    /// Returns `true` if `a` must sort before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural `<` ordering of a totally ordered type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Order<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Ascending floating-point ordering with not-a-number values first.
///
/// IEEE-754 `<` is not a total order once NaN is involved. This strategy uses
///
/// ```text
/// a < b || (a.is_nan() && !b.is_nan())
/// ```
///
/// so every NaN precedes every other value, including negative infinity. NaNs
/// compare equal among themselves, and their relative order after an unstable
/// sort is unspecified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NanFirst;

impl<T: Float> Order<T> for NanFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        *a < *b || (a.is_nan() && !b.is_nan())
    }
}

/// Lexicographic ordering of anything viewable as a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lexical;

impl<T: AsRef<str> + ?Sized> Order<T> for Lexical {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a.as_ref() < b.as_ref()
    }
}

/// Integer element types accepted by the integer entry points.
///
/// Implemented for all primitive integers. Unit newtypes over an integer can
/// implement it too, as long as their `Ord` is the numeric one.
pub trait Integer: Copy + Ord {}

macro_rules! integers {
    ($($t:ty),* $(,)?) => {
        $(impl Integer for $t {})*
    };
}

integers! {
    i8, u8,
    i16, u16,
    i32, u32,
    i64, u64,
    i128, u128,
    isize, usize,
}

/// Floating-point element types accepted by the floating-point entry points.
pub trait Float: Copy + PartialOrd {
    /// Returns `true` if this value is not-a-number.
    fn is_nan(self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Float for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

/// A mutable slice bound to a comparison strategy.
///
/// This is the one adapter behind [`IntSlice`], [`FloatSlice`] and [`StringSlice`];
/// the aliases only fix the strategy.
///
/// # Examples
///
/// ```
/// use sorthelper::FloatSlice;
///
/// let mut data = vec![f64::INFINITY, f64::NAN, f64::NEG_INFINITY, 0.0];
/// let mut slice = FloatSlice::new(&mut data);
/// slice.sort();
///
/// assert!(slice.is_sorted());
/// assert!(data[0].is_nan());
/// assert_eq!(&data[1..], &[f64::NEG_INFINITY, 0.0, f64::INFINITY]);
/// ```
#[derive(Debug)]
pub struct Slice<'a, T, O> {
    data: &'a mut [T],
    order: O,
}

/// Integers in increasing order.
pub type IntSlice<'a, T> = Slice<'a, T, Natural>;

/// Floating-point numbers in increasing order, NaNs first.
pub type FloatSlice<'a, T> = Slice<'a, T, NanFirst>;

/// Strings in increasing lexicographic order.
pub type StringSlice<'a, T> = Slice<'a, T, Lexical>;

impl<'a, T, O: Order<T> + Default> Slice<'a, T, O> {
    /// Binds `data` to the strategy `O`.
    pub fn new(data: &'a mut [T]) -> Self {
        Self::with_order(data, O::default())
    }
}

impl<'a, T, O: Order<T>> Slice<'a, T, O> {
    /// Binds `data` to an explicit strategy value, for strategies that are not
    /// [`Default`] or that carry parameters.
    pub fn with_order(data: &'a mut [T], order: O) -> Self {
        Self { data, order }
    }

    /// Sorts in increasing order. The sort is not guaranteed to be stable.
    pub fn sort(&mut self) {
        algo::sort(self)
    }

    /// Sorts in increasing order, keeping equal elements in their original order.
    pub fn stable(&mut self) {
        algo::stable(self)
    }

    /// Sorts in decreasing order.
    pub fn reverse(&mut self) {
        algo::reverse(self)
    }

    /// Reports whether the slice is sorted in increasing order.
    pub fn is_sorted(&self) -> bool {
        algo::is_sorted(self)
    }

    /// Returns the underlying elements in their current order.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T, O: Order<T>> Sortable for Slice<'_, T, O> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.order.less(&self.data[i], &self.data[j])
    }
}

impl<T: Integer> Slice<'_, T, Natural> {
    /// Returns the result of [`search::search_ints`] applied to the slice and `x`.
    pub fn search(&self, x: T) -> usize {
        search::search_ints(&*self.data, x)
    }
}

impl<T: Float> Slice<'_, T, NanFirst> {
    /// Returns the result of [`search::search_floats`] applied to the slice and `x`.
    pub fn search(&self, x: T) -> usize {
        search::search_floats(&*self.data, x)
    }
}

impl<T: AsRef<str>> Slice<'_, T, Lexical> {
    /// Returns the result of [`search::search_strings`] applied to the slice and `x`.
    pub fn search(&self, x: &str) -> usize {
        search::search_strings(&*self.data, x)
    }
}

/// Inverts the order of the borrowed collection: `less(i, j)` becomes `less(j, i)`.
///
/// # Examples
///
/// ```
/// use sorthelper::{sort, Reverse};
///
/// let mut data = vec![1, 4, 2, 3];
/// sort(&mut Reverse(&mut data));
///
/// assert_eq!(data, vec![4, 3, 2, 1]);
/// ```
#[derive(Debug)]
pub struct Reverse<'a, S: ?Sized>(pub &'a mut S);

impl<S: Sortable + ?Sized> Sortable for Reverse<'_, S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }
}
