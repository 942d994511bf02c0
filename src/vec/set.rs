// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Replaces the element at `index` with `value` and returns the previous one.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`; `value` is dropped and
    /// the container is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.get_mut(index).map(|slot| core::mem::replace(slot, value))
    }
}
