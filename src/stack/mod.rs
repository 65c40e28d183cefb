pub use self::overflow_error::OverflowError;
mod overflow_error;

pub use self::swap_error::SwapError;
mod swap_error;

pub use self::builder::StackBuilder;
mod builder;

pub use self::iter::{IntoIter, Iter};
mod iter;

pub use self::stack::Stack;
mod stack;

#[cfg(test)]
mod tests;
