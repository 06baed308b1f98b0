//! Error types for the sort entry points.

use std::fmt;

/// Errors that can occur before a sort starts.
///
/// Once the engine begins exchanging elements it cannot fail. A comparator that violates the
/// total order contract yields an unspecified order, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// An argument was missing or unusable, the payload names it.
    InvalidArgument(&'static str),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
        }
    }
}

impl std::error::Error for SortError {}
