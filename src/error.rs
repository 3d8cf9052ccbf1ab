//! The out-of-range error raised by index and range based operations.
//!
//! Fallible operations return `anyhow::Result`; the typed [`Error`] can be recovered
//! with `error.downcast_ref::<sequin::error::Error>()`.

/// Every variant is the same kind of failure: an index, range or length argument
/// outside what the target sequence accepts. Nothing is clamped or substituted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Index {index} out of bounds for sequence of length {length}. '{operation}' method can only operate on existing indexes.")]
    OutOfBounds {
        operation: &'static str,
        index: isize,
        length: usize,
    },

    #[error("Range {start}..{stop} out of bounds for sequence of length {length}. '{operation}' method requires 0 <= start <= stop <= length.")]
    InvalidRange {
        operation: &'static str,
        start: isize,
        stop: isize,
        length: usize,
    },

    #[error("Length {length} is negative. '{operation}' method can only build sequences of non-negative length.")]
    NegativeLength { operation: &'static str, length: isize },
}

impl Error {
    pub(crate) fn out_of_bounds(operation: &'static str, index: isize, length: usize) -> anyhow::Error {
        tracing::debug!(operation, index, length, "index out of bounds");
        Self::OutOfBounds { operation, index, length }.into()
    }

    pub(crate) fn invalid_range(operation: &'static str, start: isize, stop: isize, length: usize) -> anyhow::Error {
        tracing::debug!(operation, start, stop, length, "invalid range");
        Self::InvalidRange { operation, start, stop, length }.into()
    }

    pub(crate) fn negative_length(operation: &'static str, length: isize) -> anyhow::Error {
        tracing::debug!(operation, length, "negative length");
        Self::NegativeLength { operation, length }.into()
    }

    /// The name of the operation that rejected its argument.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::OutOfBounds { operation, .. }
            | Self::InvalidRange { operation, .. }
            | Self::NegativeLength { operation, .. } => operation,
        }
    }
}

/// Converts a library-produced index for error reporting.
pub(crate) fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
