use std::collections::vec_deque;

/// An iterator over the elements of a [`Stack`], bottom to top.
///
/// Constructed through [`Stack::iter`].
///
/// [`Stack`]: crate::Stack
/// [`Stack::iter`]: crate::Stack::iter
pub struct Iter<'a, T> {
    iter: vec_deque::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(iter: vec_deque::Iter<'a, T>) -> Self {
        Self { iter }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// An owning iterator over the elements of a [`Stack`], bottom to top.
///
/// Constructed through the [`IntoIterator`] implementation for [`Stack`].
///
/// [`Stack`]: crate::Stack
pub struct IntoIter<T> {
    iter: vec_deque::IntoIter<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) fn new(iter: vec_deque::IntoIter<T>) -> Self {
        Self { iter }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
