//! Error types for textchain.

/// Errors that can occur when addressing a range of a chain.
///
/// These are declines, not failures: the chain is never mutated, partially
/// or otherwise, when an operation returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A range operation was given `count == 0`.
    #[error("empty range requested")]
    EmptyRange,

    /// The requested range extends past the end of the chain.
    #[error("range [{index}, {index} + {count}) is out of bounds for chain of length {length}")]
    OutOfBounds {
        /// Start of the requested range.
        index: usize,
        /// Length of the requested range.
        count: usize,
        /// Total length of the chain.
        length: usize,
    },
}

/// Result type for textchain operations.
pub type Result<T> = std::result::Result<T, Error>;
