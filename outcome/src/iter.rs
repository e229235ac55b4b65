/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Zero-or-one item iterators over container payloads.
//!
//! A container yields its payload exactly once when it is in the
//! "continue" variant and nothing otherwise. The payload is treated
//! as opaque: it is always yielded whole, never recursed into, even
//! when it happens to be iterable itself.

use std::iter::FusedIterator;

/// Borrowing iterator over a container's payload.
///
/// Yields one item for a success/present container, none otherwise.
/// Every call to a container's `iter` produces a fresh, restartable
/// instance.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    item: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(item: Option<&'a T>) -> Self {
        Self { item }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.item.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator over a container's payload.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    item: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.item.is_some() { 1 } else { 0 };
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_at_most_once() {
        let mut iter = IntoIter::new(Some(1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        // Fused: stays exhausted.
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn empty_yields_nothing() {
        let mut iter = IntoIter::<i32>::new(None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn double_ended_over_single_item() {
        let value = 5;
        let mut iter = Iter::new(Some(&value));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn payload_is_yielded_whole() {
        // An iterable payload is not recursed into.
        let payload = vec![1, 2, 3];
        let mut iter = IntoIter::new(Some(payload));
        assert_eq!(iter.next(), Some(vec![1, 2, 3]));
        assert_eq!(iter.next(), None);
    }
}
