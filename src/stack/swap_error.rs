use std::error;
use std::fmt;

/// An error raised when a swap on a [`Stack`] cannot be performed.
///
/// [`Stack`]: crate::Stack
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SwapError {
    /// One or both of the items to swap are not present in the stack.
    ItemsNotFound,
    /// One or both indexes are out of range for the stack.
    InvalidIndexes {
        /// The first index given.
        index1: usize,
        /// The second index given.
        index2: usize,
        /// The number of elements in the stack.
        len: usize,
    },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SwapError::ItemsNotFound => {
                write!(f, "Items not found")
            }
            SwapError::InvalidIndexes { index1, index2, len } => {
                write!(
                    f,
                    "Invalid indexes {index1} and {index2} for stack of length {len}"
                )
            }
        }
    }
}

impl error::Error for SwapError {}
