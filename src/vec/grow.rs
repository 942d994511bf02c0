// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DynamicArray, new::vacant_slots};

impl<T> DynamicArray<T> {
    /// Appends `value` at the end.
    ///
    /// If the buffer is full it is first reallocated to twice its capacity,
    /// then `value` is written. Amortized `O(1)`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.buf[self.len] = Some(value);
        self.len += 1;
    }

    /// Ensures at least one vacant slot, doubling the capacity if there is none.
    #[inline]
    pub(crate) fn reserve_one(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    /// Moves the elements into a fresh buffer of twice the capacity and drops
    /// the old one.
    fn grow(&mut self) {
        let Some(new_capacity) = self.capacity().checked_mul(2) else {
            panic!("capacity overflow");
        };
        let mut buf = vacant_slots(new_capacity);
        for (dst, src) in buf.iter_mut().zip(&mut self.buf[..self.len]) {
            *dst = src.take();
        }
        self.buf = buf;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynamicArray;
    use alloc::vec::Vec;

    #[test]
    fn test_push_fills_then_doubles() {
        let mut a = DynamicArray::with_capacity(2).unwrap();
        a.push(1);
        a.push(2);
        assert_eq!(a.capacity(), 2);
        a.push(3);
        assert_eq!(a.capacity(), 4);
        a.push(4);
        assert_eq!(a.capacity(), 4);
        a.push(5);
        assert_eq!(a.capacity(), 8);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_growth_from_capacity_one() {
        let mut a = DynamicArray::with_capacity(1).unwrap();
        let mut seen = Vec::new();
        for i in 0..17 {
            a.push(i);
            if seen.last() != Some(&a.capacity()) {
                seen.push(a.capacity());
            }
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_grow_leaves_tail_vacant() {
        let mut a = DynamicArray::with_capacity(2).unwrap();
        a.extend([1, 2, 3]);
        assert!(a.buf[..3].iter().all(Option::is_some));
        assert!(a.buf[3..].iter().all(Option::is_none));
    }
}
