use std::collections::VecDeque;

use crate::stack::{OverflowError, Stack};

/// Builder of a [`Stack`].
///
/// A builder starts out unbounded and non-strict, matching [`Stack::new`].
///
/// # Examples
///
/// ```
/// use bounded_stack::StackBuilder;
///
/// let stack = StackBuilder::new().size(4).strict(true).build::<u32>();
///
/// assert_eq!(stack.max_size(), Some(4));
/// assert!(stack.is_strict());
/// ```
pub struct StackBuilder {
    size: Option<usize>,
    strict: bool,
}

impl StackBuilder {
    /// Construct a new stack builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let builder = StackBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            size: None,
            strict: false,
        }
    }

    /// Set the maximum number of elements the stack may hold.
    ///
    /// Without this, the stack is unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let stack = StackBuilder::new().size(2).build::<u32>();
    ///
    /// assert_eq!(stack.max_size(), Some(2));
    /// ```
    pub fn size(&mut self, size: usize) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Set whether exceeding the maximum size fails the operation instead of
    /// evicting the oldest element (default `false`).
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let stack = StackBuilder::new().size(2).strict(true).build::<u32>();
    ///
    /// assert!(stack.is_strict());
    /// ```
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Construct an empty [`Stack`] with the current configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let mut stack = StackBuilder::new().size(1).build();
    ///
    /// assert!(stack.is_empty());
    ///
    /// stack.push(1)?;
    /// stack.push(2)?;
    ///
    /// assert_eq!(stack.peek(), Some(&2));
    /// assert_eq!(stack.len(), 1);
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn build<T>(&self) -> Stack<T> {
        Stack::from_parts(VecDeque::new(), self.size, self.strict)
    }

    /// Construct a [`Stack`] with the current configuration, initialized
    /// with the given items in order, the last one on top.
    ///
    /// If the stack is strict and the items exceed the configured size,
    /// construction fails. If it is not strict, the earliest-supplied items
    /// are dropped so that only the last `size` items are kept.
    ///
    /// # Errors
    ///
    /// Errors with [`OverflowError::Init`] if the stack is strict and more
    /// items are supplied than the configured size allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let stack = StackBuilder::new().size(2).build_from([1, 2, 3])?;
    ///
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [2, 3]);
    ///
    /// let result = StackBuilder::new()
    ///     .size(2)
    ///     .strict(true)
    ///     .build_from([1, 2, 3]);
    ///
    /// assert!(result.is_err());
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn build_from<T, I>(&self, items: I) -> Result<Stack<T>, OverflowError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter().collect::<VecDeque<T>>();

        if let Some(size) = self.size {
            if items.len() > size {
                if self.strict {
                    return Err(OverflowError::Init {
                        size,
                        count: items.len(),
                    });
                }

                let excess = items.len() - size;
                items.drain(..excess);
            }
        }

        Ok(Stack::from_parts(items, self.size, self.strict))
    }
}

impl Default for StackBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
