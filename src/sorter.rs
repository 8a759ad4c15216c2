//! Sorting slices of arbitrary records by closures.
//!
//! - [`Sorter`] binds a slice to one "precedes" predicate.
//! - [`MultiSorter`] binds a slice to an ordered chain of predicates and sorts
//!   lexicographically: the first predicate that tells two records apart decides.
//!
//! Both are single-use: the sorting methods take `self`, so a sorter is created,
//! given its predicate(s), sorts once, and is gone.

use crate::algo;
use crate::core::Sortable;
use crate::error::SortError;

/// A comparison predicate: reports whether the first record strictly precedes the second.
pub type Less<'p, T> = dyn Fn(&T, &T) -> bool + 'p;

/// Sorts a slice by a single predicate.
///
/// # Examples
///
/// ```
/// use sorthelper::Sorter;
///
/// struct Planet {
///     name: &'static str,
///     distance: f64,
/// }
///
/// let mut planets = vec![
///     Planet { name: "Mercury", distance: 0.4 },
///     Planet { name: "Venus", distance: 0.7 },
///     Planet { name: "Earth", distance: 1.0 },
///     Planet { name: "Mars", distance: 1.5 },
/// ];
///
/// Sorter::new(&mut planets).ordered_by(|p1, p2| p1.distance > p2.distance);
///
/// let names: Vec<_> = planets.iter().map(|p| p.name).collect();
/// assert_eq!(names, vec!["Mars", "Earth", "Venus", "Mercury"]);
/// ```
#[derive(Debug)]
pub struct Sorter<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> Sorter<'a, T> {
    /// Returns a sorter for `data`. Call [`Sorter::ordered_by`] or [`Sorter::stable_by`]
    /// to sort it.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Sorts the slice according to `by`.
    ///
    /// The sort is not guaranteed to be stable. For a stable sort, use [`Sorter::stable_by`].
    pub fn ordered_by<F>(self, by: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        algo::sort(&mut By {
            data: self.data,
            by,
        })
    }

    /// Sorts the slice according to `by`, keeping equal records in their original order.
    pub fn stable_by<F>(self, by: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        algo::stable(&mut By {
            data: self.data,
            by,
        })
    }
}

/// A slice bound to its predicate for the duration of one sort.
struct By<'a, T, F> {
    data: &'a mut [T],
    by: F,
}

impl<T, F> Sortable for By<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.by)(&self.data[i], &self.data[j])
    }
}

/// Sorts a slice by an ordered chain of predicates.
///
/// Records are compared with each predicate in turn. The first predicate under which
/// one record precedes the other decides; if every predicate but the last reports a
/// tie, the last one decides alone.
///
/// # Examples
///
/// ```
/// use sorthelper::MultiSorter;
///
/// struct Change {
///     user: &'static str,
///     language: &'static str,
///     lines: u32,
/// }
///
/// let mut changes = vec![
///     Change { user: "gri", language: "Go", lines: 100 },
///     Change { user: "ken", language: "C", lines: 150 },
///     Change { user: "glenda", language: "Go", lines: 200 },
///     Change { user: "dmr", language: "C", lines: 100 },
/// ];
///
/// let language = |c1: &Change, c2: &Change| c1.language < c2.language;
/// let increasing_lines = |c1: &Change, c2: &Change| c1.lines < c2.lines;
///
/// MultiSorter::new(&mut changes).ordered_by(&[&language, &increasing_lines])?;
///
/// let users: Vec<_> = changes.iter().map(|c| c.user).collect();
/// assert_eq!(users, vec!["dmr", "ken", "gri", "glenda"]);
/// # Ok::<(), sorthelper::SortError>(())
/// ```
#[derive(Debug)]
pub struct MultiSorter<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> MultiSorter<'a, T> {
    /// Returns a sorter for `data`. Call [`MultiSorter::ordered_by`] or
    /// [`MultiSorter::stable_by`] to sort it.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Sorts the slice according to the `less` predicates, in order.
    ///
    /// The sort is not guaranteed to be stable. For a stable sort, use
    /// [`MultiSorter::stable_by`].
    ///
    /// # Errors
    ///
    /// Returns [`SortError::EmptyChain`] if `less` is empty; the slice is left untouched.
    pub fn ordered_by(self, less: &[&Less<'_, T>]) -> Result<(), SortError> {
        let mut chain = Chain::new(self.data, less)?;
        algo::sort(&mut chain);
        Ok(())
    }

    /// Sorts the slice according to the `less` predicates, in order, keeping records
    /// that tie under every predicate in their original order.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::EmptyChain`] if `less` is empty; the slice is left untouched.
    pub fn stable_by(self, less: &[&Less<'_, T>]) -> Result<(), SortError> {
        let mut chain = Chain::new(self.data, less)?;
        algo::stable(&mut chain);
        Ok(())
    }
}

/// A slice bound to a non-empty predicate chain, split into the tie-breaking
/// predicates and the final one.
struct Chain<'a, 'c, 'p, T> {
    data: &'a mut [T],
    init: &'c [&'c Less<'p, T>],
    last: &'c Less<'p, T>,
}

impl<'a, 'c, 'p, T> Chain<'a, 'c, 'p, T> {
    fn new(data: &'a mut [T], less: &'c [&'c Less<'p, T>]) -> Result<Self, SortError> {
        let (last, init) = less.split_last().ok_or(SortError::EmptyChain)?;
        Ok(Self {
            data,
            init,
            last: *last,
        })
    }
}

impl<T> Sortable for Chain<'_, '_, '_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }

    // May call each predicate but the last twice per comparison.
    fn less(&self, i: usize, j: usize) -> bool {
        let (p, q) = (&self.data[i], &self.data[j]);

        for less in self.init {
            if less(p, q) {
                return true;
            }
            if less(q, p) {
                return false;
            }
            // p == q under this predicate; try the next one.
        }

        (self.last)(p, q)
    }
}
