// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{DEFAULT_CAPACITY, DynamicArray},
};

// Alloc imports
use alloc::boxed::Box;

impl<T> DynamicArray<T> {
    /// Constructs an empty container with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: vacant_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Constructs an empty container with `capacity` slots.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity == 0`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            buf: vacant_slots(capacity),
            len: 0,
        })
    }
}

/// Allocates `capacity` empty slots.
pub(crate) fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{DynamicArray, Error};

    #[test]
    fn test_with_capacity_zero_is_rejected() {
        let res = DynamicArray::<u8>::with_capacity(0);
        assert_eq!(res.unwrap_err(), Error::InvalidCapacity);
    }

    #[test]
    fn test_with_capacity_allocates_exactly() {
        let a = DynamicArray::<u8>::with_capacity(3).unwrap();
        assert_eq!(a.capacity(), 3);
        assert!(a.is_empty());
        assert!(a.buf.iter().all(Option::is_none));
    }

    #[test]
    fn test_non_clone_elements_are_supported() {
        struct Opaque(#[allow(dead_code)] u8);
        let mut a = DynamicArray::with_capacity(1).unwrap();
        a.push(Opaque(1));
        a.push(Opaque(2));
        assert_eq!(a.len(), 2);
    }
}
