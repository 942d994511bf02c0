// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single-pass cursor over a [`DynamicArray`] that can remove the element it
//! last yielded.
//!
//! State is `(index, removable)`:
//!
//! - `index` is the position of the *next* element to yield, `0..=len`;
//! - `removable` is set by a successful [`Cursor::next`] and cleared by
//!   [`Cursor::remove`].
//!
//! The cursor re-reads the container's live length on every call. Removal goes
//! through [`DynamicArray::remove`], after which `index` steps back one slot so
//! the element that shifted into the hole is yielded next.

// Crate imports
use crate::{error::Error, vec::DynamicArray};

/// Cursor returned by [`DynamicArray::cursor`].
///
/// The cursor mutably borrows its container. While it is alive the container
/// can only change through [`Cursor::remove`], which is the one structural
/// mutation the cursor compensates for.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::{DynamicArray, Error};
///
/// let mut a: DynamicArray<i32> = [1, 2, 3, 4].into_iter().collect();
/// let mut cursor = a.cursor();
/// while cursor.has_next() {
///     if cursor.next()? % 2 == 0 {
///         cursor.remove()?;
///     }
/// }
/// assert_eq!(cursor.next(), Err(Error::NoSuchElement));
/// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 3]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a mut DynamicArray<T>,
    index: usize,
    removable: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut DynamicArray<T>) -> Self {
        Self {
            list,
            index: 0,
            removable: false,
        }
    }

    /// Returns `true` if another element is available.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.list.len()
    }

    /// Yields the next element and makes it removable.
    ///
    /// Returns [`Error::NoSuchElement`] once the end is reached, and keeps
    /// doing so on every further call.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, Error> {
        if !self.has_next() {
            return Err(Error::NoSuchElement);
        }
        let i = self.index;
        self.index += 1;
        self.removable = true;
        self.list.get(i)
    }

    /// Returns the element the next call to [`next`](Cursor::next) would yield,
    /// without advancing or touching the removal state.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.get(self.index).ok()
    }

    /// Removes and returns the element most recently yielded by
    /// [`next`](Cursor::next).
    ///
    /// Returns [`Error::IllegalState`] if nothing is pending: before the first
    /// `next`, or after a `remove` with no `next` in between.
    pub fn remove(&mut self) -> Result<T, Error> {
        if !self.removable {
            return Err(Error::IllegalState);
        }
        let out = self.list.remove(self.index - 1)?;
        self.index -= 1;
        self.removable = false;
        Ok(out)
    }
}
