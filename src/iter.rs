// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `Iter<'a, T>` / `IterMut<'a, T>` borrow the live prefix and yield references.
//! - `IntoIter<T>` yields by value.
//!
//! All three support `DoubleEndedIterator`, `ExactSizeIterator`, and
//! `FusedIterator`. For removal during traversal see [`Cursor`](crate::Cursor).

// Crate imports
use crate::vec::DynamicArray;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, iter::FusedIterator, slice};

/// Borrowing iterator returned by [`DynamicArray::iter`].
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable borrowing iterator returned by [`DynamicArray::iter_mut`].
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(live: &'a mut [Option<T>]) -> Self {
        Self {
            slots: live.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next().and_then(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yet yielded are dropped
/// together with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            self.buf[i].take()
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            for slot in &mut self.buf[self.front..self.back] {
                *slot = None;
            }
            self.front = self.back;
            return None;
        }
        let i = self.front + n; // n < rem == back - front
        for slot in &mut self.buf[self.front..i] {
            *slot = None;
        }
        self.front = i + 1;
        self.buf[i].take()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            self.buf[self.back].take()
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            buf: self.buf,
        }
    }
}
