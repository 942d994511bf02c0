// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable vector that owns a boxed slot buffer and
//! tracks a logical length. Methods mirror slice/vector semantics, with
//! explicit bounds checks returning [`Error`] where a caller could supply a
//! bad index.

mod clone;
mod default;
mod extend;
mod grow;
mod insert;
mod new;
mod remove;
mod set;

// Crate imports
use crate::{
    cursor::Cursor,
    error::Error,
    iter::{Iter, IterMut},
};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Capacity of a container built with [`DynamicArray::new`] or `Default`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable, indexable sequence backed by a contiguous slot buffer.
///
/// `DynamicArray<T>` stores its elements in a heap buffer of `capacity` slots
/// and tracks a logical length `len ∈ 0..=capacity`.
///
/// # Layout and invariants
///
/// Internally, `DynamicArray<T>` maintains:
///
/// - a buffer `buf: Box<[Option<T>]>` whose length is the capacity (always
///   at least 1); and
/// - a logical length `len` with `0 <= len <= buf.len()`.
///
/// Slots `buf[..len]` are all `Some` and hold the elements in order, with no
/// gaps. Slots `buf[len..]` are all `None`: removing an element clears the slot
/// it vacates, so the container never keeps a logically removed value alive.
///
/// # Complexity characteristics
///
/// - [`push`](DynamicArray::push) is amortized `O(1)`. When the buffer is full
///   it is reallocated to exactly twice its capacity before the write.
/// - [`insert`](DynamicArray::insert) and [`remove`](DynamicArray::remove) are
///   `O(len - index)` because they shift the tail by one slot.
/// - [`get`](DynamicArray::get), [`set`](DynamicArray::set) and
///   [`pop`](DynamicArray::pop) are `O(1)`.
/// - Capacity never shrinks.
///
/// # Iteration and mutation
///
/// [`cursor`](DynamicArray::cursor) hands out a [`Cursor`] that may remove the
/// element it last yielded. The cursor keeps the container mutably borrowed,
/// so structural mutation through any other path is rejected at compile time
/// for as long as the cursor lives.
///
/// # Thread safety
///
/// There is no internal synchronization. Share a `DynamicArray` across threads
/// only behind your own lock.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut a: DynamicArray<i32> = DynamicArray::new();
/// a.push(10);
/// a.push(30);
/// a.insert(1, 20).unwrap();
/// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
/// assert_eq!(a.set(0, 11), Ok(10));
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, or [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.buf[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::OutOfRange { index })
    }

    /// Returns the element at `index` mutably, or [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.buf[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::OutOfRange { index })
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Returns `true` if the container holds an element equal to `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    // iterators
    /// Returns a borrowing iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf[..self.len])
    }

    /// Returns a borrowing iterator that allows modifying each element in place.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut::new(&mut self.buf[..len])
    }

    /// Returns a [`Cursor`] positioned before the first element.
    ///
    /// The cursor reads the live contents on every call and can remove the
    /// element it most recently yielded.
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.iter())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for e in self.iter() {
            e.hash(state);
        }
    }
}
