use std::collections::VecDeque;

use super::{IntoIter, Iter, OverflowError, SwapError};

/// A LIFO stack with an optional maximum size.
///
/// Elements are ordered bottom to top: index 0 is the bottom, the last index
/// is the top. [`push`] and [`pop`] operate on the top.
///
/// A stack constructed through [`Stack::new`] is unbounded. Bounding and
/// strictness are configured through [`StackBuilder`]:
///
/// * Non-strict (default): pushing beyond the bound evicts the oldest
///   (bottom) element.
/// * Strict: any operation that would exceed the bound fails with an
///   [`OverflowError`] and leaves the stack untouched.
///
/// [`push`]: Stack::push
/// [`pop`]: Stack::pop
/// [`StackBuilder`]: crate::StackBuilder
///
/// # Examples
///
/// ```
/// use bounded_stack::Stack;
///
/// let mut stack = Stack::new();
///
/// stack.push("a")?;
/// stack.push("b")?;
///
/// assert_eq!(stack.peek(), Some(&"b"));
/// assert_eq!(stack.pop(), Some("b"));
/// assert_eq!(stack.pop(), Some("a"));
/// assert_eq!(stack.pop(), None);
/// # Ok::<_, bounded_stack::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: VecDeque<T>,
    size: Option<usize>,
    strict: bool,
}

impl<T> Stack<T> {
    /// Construct a new empty stack without a maximum size.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::<u32>::new();
    ///
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.max_size(), None);
    /// assert!(!stack.is_strict());
    /// ```
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            size: None,
            strict: false,
        }
    }

    /// Construct a new empty stack bounded to `size` elements, evicting the
    /// oldest element on overflow.
    ///
    /// Equivalent to `StackBuilder::new().size(size).build()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let mut stack = Stack::bounded(2);
    ///
    /// stack.push(1)?;
    /// stack.push(2)?;
    /// stack.push(3)?;
    ///
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn bounded(size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(size),
            size: Some(size),
            strict: false,
        }
    }

    pub(super) fn from_parts(items: VecDeque<T>, size: Option<usize>, strict: bool) -> Self {
        Self {
            items,
            size,
            strict,
        }
    }

    /// Push an item onto the top of the stack.
    ///
    /// If the stack is at its maximum size, a non-strict stack evicts the
    /// bottom element to make room, while a strict stack fails and is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Errors with [`OverflowError::Push`] if the stack is strict and full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::StackBuilder;
    ///
    /// let mut stack = StackBuilder::new().size(1).strict(true).build();
    ///
    /// stack.push(1)?;
    /// assert!(stack.push(2).is_err());
    /// assert_eq!(stack.items(), &[1]);
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn push(&mut self, item: T) -> Result<(), OverflowError> {
        match self.size {
            Some(size) if self.items.len() >= size => {
                if self.strict {
                    return Err(OverflowError::Push { size });
                }

                self.items.push_back(item);

                // NB: a zero bound evicts the element just pushed.
                while self.items.len() > size {
                    self.items.pop_front();
                }
            }
            _ => self.items.push_back(item),
        }

        Ok(())
    }

    /// Remove and return the top element.
    ///
    /// Returns `None` if the stack is empty. This never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let mut stack = Stack::from([1, 2]);
    ///
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Return a reference to the top element without removing it.
    ///
    /// Returns `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::from([1, 2]);
    ///
    /// assert_eq!(stack.peek(), Some(&2));
    /// assert_eq!(stack.len(), 2);
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// The number of elements in the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// assert!(Stack::<u32>::new().is_empty());
    /// assert!(!Stack::from([1]).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Test if the stack holds exactly its maximum number of elements.
    ///
    /// An unbounded stack is never full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::{Stack, StackBuilder};
    ///
    /// let stack = StackBuilder::new().size(2).build_from([1, 2])?;
    /// assert!(stack.is_full());
    ///
    /// let stack = Stack::from([1, 2]);
    /// assert!(!stack.is_full());
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self.size, Some(size) if self.items.len() == size)
    }

    /// Swap the positions of the first occurrence of `item1` and the first
    /// occurrence of `item2`, compared with `==`.
    ///
    /// # Errors
    ///
    /// Errors with [`SwapError::ItemsNotFound`] if either item is not
    /// present in the stack. The stack is never partially swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let mut stack = Stack::from([1, 2]);
    ///
    /// stack.swap(&1, &2)?;
    /// assert_eq!(stack.items(), &[2, 1]);
    ///
    /// assert!(stack.swap(&1, &3).is_err());
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn swap(&mut self, item1: &T, item2: &T) -> Result<(), SwapError>
    where
        T: PartialEq,
    {
        let index1 = self.items.iter().position(|item| item == item1);
        let index2 = self.items.iter().position(|item| item == item2);

        match (index1, index2) {
            (Some(index1), Some(index2)) => self.swap_by_index(index1, index2),
            _ => Err(SwapError::ItemsNotFound),
        }
    }

    /// Swap the elements at the two given indexes, where index 0 is the
    /// bottom of the stack.
    ///
    /// # Errors
    ///
    /// Errors with [`SwapError::InvalidIndexes`] if either index is out of
    /// range. The stack is not mutated on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let mut stack = Stack::from([1, 2]);
    ///
    /// stack.swap_by_index(0, 1)?;
    /// assert_eq!(stack.items(), &[2, 1]);
    ///
    /// assert!(stack.swap_by_index(0, 2).is_err());
    /// # Ok::<_, bounded_stack::Error>(())
    /// ```
    pub fn swap_by_index(&mut self, index1: usize, index2: usize) -> Result<(), SwapError> {
        let len = self.items.len();

        if index1 >= len || index2 >= len {
            return Err(SwapError::InvalidIndexes {
                index1,
                index2,
                len,
            });
        }

        self.items.swap(index1, index2);
        Ok(())
    }

    /// The elements of the stack, bottom to top.
    ///
    /// This is a live view of the stored sequence, not a copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::from([1, 2, 3]);
    ///
    /// assert_eq!(stack.items(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn items(&self) -> &VecDeque<T> {
        &self.items
    }

    /// The configured maximum size, or `None` if the stack is unbounded.
    #[inline]
    #[must_use]
    pub fn max_size(&self) -> Option<usize> {
        self.size
    }

    /// Test if exceeding the maximum size fails instead of evicting.
    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Construct an iterator over the elements of the stack, bottom to top.
    ///
    /// Note that this is the reverse of the order in which repeated calls to
    /// [`pop`] drain the stack.
    ///
    /// [`pop`]: Stack::pop
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::from([1, 2, 3]);
    /// let mut it = stack.iter();
    ///
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.items.iter())
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Construct an unbounded stack from a vector, the last element on top.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::from(vec![1, 2]);
    ///
    /// assert_eq!(stack.peek(), Some(&2));
    /// ```
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::from_parts(VecDeque::from(items), None, false)
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    /// Construct an unbounded stack from an array, the last element on top.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_stack::Stack;
    ///
    /// let stack = Stack::from([1]);
    ///
    /// assert_eq!(stack.peek(), Some(&1));
    /// ```
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::from_parts(VecDeque::from(items), None, false)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_parts(iter.into_iter().collect(), None, false)
    }
}

/// The [`IntoIterator`] implementation for [`Stack`], bottom to top.
///
/// # Examples
///
/// ```
/// use bounded_stack::Stack;
///
/// let stack = Stack::from([1, 2]);
///
/// let mut values = Vec::new();
///
/// for value in stack {
///     values.push(value);
/// }
///
/// assert_eq!(values, [1, 2]);
/// ```
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
