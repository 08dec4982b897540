//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors returned by [`DynArray`](crate::DynArray) operations.
///
/// Every operation validates its arguments before touching the buffer,
/// so an `Err` always leaves the array exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DynArrayError {
    /// The index lies outside the range the operation accepts.
    ///
    /// `get` and `remove_at` accept `0..len`; `insert` accepts `0..=len`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
        }
    }
}

impl Error for DynArrayError {}
