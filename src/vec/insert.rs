// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - Returns [`Error::OutOfRange`] if `index > len`; the container is unchanged.
    /// - `index == len` appends.
    /// - Grows (doubling) before the shift when the buffer is full.
    ///
    /// `O(len - index)`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfRange { index });
        }
        self.reserve_one();
        let len = self.len;

        // Write into the first vacant slot, then rotate it down to `index`:
        // [index..len] -> value, [index..len)
        self.buf[len] = Some(value);
        self.buf[index..=len].rotate_right(1);

        self.len = len + 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{DynamicArray, Error};
    use alloc::vec::Vec;

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut a = DynamicArray::with_capacity(4).unwrap();
        a.insert(0, 1).unwrap(); // front of empty
        a.insert(1, 3).unwrap(); // tail
        a.insert(1, 2).unwrap(); // middle
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        a.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(a.capacity(), 4);
    }

    #[test]
    fn test_insert_when_full_grows_first() {
        let mut a = DynamicArray::with_capacity(2).unwrap();
        a.extend([10, 20]);
        a.insert(0, 5).unwrap();
        assert_eq!(a.capacity(), 4);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [5, 10, 20]);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut a = DynamicArray::with_capacity(2).unwrap();
        a.extend([10, 20]);
        assert_eq!(a.insert(3, 99), Err(Error::OutOfRange { index: 3 }));
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [10, 20]);
        // A rejected insert never triggers growth.
        assert_eq!(a.capacity(), 2);
    }
}
