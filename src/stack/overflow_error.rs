use std::error;
use std::fmt;

/// An error raised when an operation would push a strict [`Stack`] beyond
/// its configured size.
///
/// [`Stack`]: crate::Stack
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverflowError {
    /// Construction was attempted with more initial items than the
    /// configured size allows.
    Init {
        /// The configured maximum size.
        size: usize,
        /// The number of items construction was attempted with.
        count: usize,
    },
    /// A push was attempted against a full stack.
    Push {
        /// The configured maximum size.
        size: usize,
    },
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OverflowError::Init { size, count } => {
                write!(
                    f,
                    "Stack size is {size}, attempt to initialize stack with {count} items"
                )
            }
            OverflowError::Push { size } => {
                write!(f, "Stack size is {size}, attempt to push item to full stack")
            }
        }
    }
}

impl error::Error for OverflowError {}
