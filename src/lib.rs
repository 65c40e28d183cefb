//! A generic LIFO stack with an optional maximum size.
//!
//! A [`Stack`] is unbounded by default. Configuring a size through
//! [`StackBuilder`] bounds it, and the `strict` flag decides what happens
//! when the bound is exceeded: a strict stack rejects the operation with an
//! [`OverflowError`], a non-strict stack silently evicts the oldest (bottom)
//! element to make room.
//!
//! # Examples
//!
//! ```
//! use bounded_stack::StackBuilder;
//!
//! let mut stack = StackBuilder::new().size(2).build();
//!
//! stack.push(1)?;
//! stack.push(2)?;
//! stack.push(3)?;
//!
//! // The oldest element was evicted to respect the bound.
//! assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [2, 3]);
//! assert_eq!(stack.pop(), Some(3));
//! # Ok::<_, bounded_stack::Error>(())
//! ```

#![allow(clippy::module_inception)]

#[doc(inline)]
pub use self::error::{Error, Result};
mod error;

#[doc(inline)]
pub use self::stack::{IntoIter, Iter, OverflowError, Stack, StackBuilder, SwapError};
mod stack;
