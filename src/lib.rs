//! # sorthelper
//!
//! `sorthelper` provides convenience for sorting slices and user-defined collections,
//! on top of the standard library's sorts and binary search.
//!
//! It does not implement a sorting algorithm of its own. Instead it adapts caller data
//! to the standard sort and composes caller-supplied "precedes" predicates, so that
//! records can be ordered by field-level closures without writing an [`Ord`]
//! implementation by hand.
//!
//! ## Key Features
//!
//! - **Closure-driven sorting**: [`Sorter`] orders a slice by one predicate,
//!   [`MultiSorter`] by a chain of predicates with lexicographic tie-breaking.
//! - **Adapter contract**: any collection implementing [`Sortable`] (length, swap,
//!   and `less` between two positions) can be sorted in place without copying its
//!   elements.
//! - **Typed helpers**: [`ints`], [`floats`] (NaNs first) and [`strings`], plus the
//!   [`IntSlice`], [`FloatSlice`] and [`StringSlice`] adapters.
//! - **Binary search**: [`search`] and its typed variants return insertion points in
//!   ascending slices.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sorthelper::{ints, search_ints};
//!
//! let mut data = vec![5, 2, 6, 3, 1, 4];
//! ints(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(search_ints(&data, 4), 3);
//! ```
//!
//! ### Sorting Records by Several Keys
//!
//! ```rust
//! use sorthelper::MultiSorter;
//!
//! struct Change {
//!     user: &'static str,
//!     lines: u32,
//! }
//!
//! let mut changes = vec![
//!     Change { user: "r", lines: 150 },
//!     Change { user: "gri", lines: 80 },
//!     Change { user: "r", lines: 100 },
//! ];
//!
//! let user = |c1: &Change, c2: &Change| c1.user < c2.user;
//! let decreasing_lines = |c1: &Change, c2: &Change| c1.lines > c2.lines;
//!
//! MultiSorter::new(&mut changes).ordered_by(&[&user, &decreasing_lines])?;
//!
//! let lines: Vec<_> = changes.iter().map(|c| c.lines).collect();
//! assert_eq!(lines, vec![80, 150, 100]);
//! # Ok::<(), sorthelper::SortError>(())
//! ```
//!
//! ## Preconditions
//!
//! - Predicates should define a strict weak ordering. An inconsistent predicate does not
//!   crash the sort; the collection ends up in an unspecified order holding exactly the
//!   elements it started with.
//! - The search functions require input sorted in ascending order; this is not checked.
//! - A multi-key sort needs at least one predicate, otherwise it returns
//!   [`SortError::EmptyChain`].

pub mod algo;
pub mod core;
pub mod error;
pub mod search;
pub mod sorter;

pub use crate::algo::{
    floats, floats_are_sorted, ints, ints_are_sorted, is_sorted, reverse, slice_is_sorted,
    slice_sort, slice_stable, sort, stable, strings, strings_are_sorted,
};
pub use crate::core::{
    Float, FloatSlice, IntSlice, Integer, Lexical, NanFirst, Natural, Order, Reverse, Slice,
    Sortable, StringSlice,
};
pub use crate::error::SortError;
pub use crate::search::{search, search_by, search_floats, search_ints, search_strings};
pub use crate::sorter::{Less, MultiSorter, Sorter};

pub mod prelude {
    pub use crate::algo::{floats, ints, is_sorted, sort, stable, strings};
    pub use crate::core::{FloatSlice, IntSlice, Sortable, StringSlice};
    pub use crate::error::SortError;
    pub use crate::search::search;
    pub use crate::sorter::{MultiSorter, Sorter};
}
