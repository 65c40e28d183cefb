use std::error;
use std::fmt;

use crate::stack::{OverflowError, SwapError};

/// Result alias using an [`Error`] as the error type by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error raised by this crate.
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind) -> Error {
        Self { kind }
    }
}

impl From<OverflowError> for Error {
    #[inline]
    fn from(error: OverflowError) -> Self {
        Self::new(ErrorKind::Overflow(error))
    }
}

impl From<SwapError> for Error {
    #[inline]
    fn from(error: SwapError) -> Self {
        Self::new(ErrorKind::Swap(error))
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Overflow(error) => error.fmt(f),
            ErrorKind::Swap(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Overflow(error) => Some(error),
            ErrorKind::Swap(error) => Some(error),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ErrorKind {
    Overflow(OverflowError),
    Swap(SwapError),
}
