//! Errors reported by the sorters.

/// The ways a sort request can be rejected before any element is moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// A multi-key sort was requested with no comparison predicates.
    #[error("multi-key sort requires at least one comparison predicate")]
    EmptyChain,
}
