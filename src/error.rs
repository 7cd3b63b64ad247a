//! Errors for operations whose preconditions weren't met. Looking up or deleting a value that
//! isn't stored is never an error.

/// Why an operation on a tree, heap, or queue couldn't be performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one stored value.
    #[error("the container is empty")]
    Empty,
    /// A heap already holds as many values as it was created for.
    #[error("the heap is full ({capacity} values)")]
    Full {
        /// The fixed number of values the heap can hold.
        capacity: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
