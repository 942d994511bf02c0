// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Removes and returns the element at `index`, shifting `(index..len)` one
    /// slot to the left.
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`. The vacated last slot is
    /// cleared, so the container holds no reference to the removed element.
    ///
    /// `O(len - index)`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfRange { index });
        }
        let len = self.len;

        // Shift left: [index+1..len) -> [index..len-1), removed element lands in len-1
        self.buf[index..len].rotate_left(1);
        let out = self.buf[len - 1].take();

        self.len = len - 1;
        out.ok_or(Error::OutOfRange { index })
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.buf[self.len].take()
    }

    /// Drops every element and sets `len = 0`. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{DynamicArray, Error};
    use alloc::{rc::Rc, vec::Vec};

    #[test]
    fn test_remove_first_middle_and_last() {
        let mut a: DynamicArray<i32> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(a.remove(0), Ok(1));
        assert_eq!(a.remove(a.len() - 1), Ok(5));
        assert_eq!(a.remove(1), Ok(3));
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [2, 4]);
    }

    #[test]
    fn test_remove_err_is_noop() {
        let mut a: DynamicArray<i32> = [1, 2].into_iter().collect();
        assert_eq!(a.remove(2), Err(Error::OutOfRange { index: 2 }));
        assert_eq!(a.remove(8), Err(Error::OutOfRange { index: 8 }));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_remove_clears_vacated_slot() {
        let shared = Rc::new(7);
        let mut a = DynamicArray::new();
        a.push(Rc::clone(&shared));
        a.push(Rc::new(8));
        assert_eq!(Rc::strong_count(&shared), 2);

        let removed = a.remove(0).unwrap();
        drop(removed);
        // The container must not keep the removed handle alive.
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(a.buf[1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_pop() {
        let mut a: DynamicArray<i32> = [1, 2].into_iter().collect();
        assert_eq!(a.pop(), Some(2));
        assert_eq!(a.pop(), Some(1));
        assert_eq!(a.pop(), None);
        assert!(a.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity_and_releases_elements() {
        let shared = Rc::new(());
        let mut a = DynamicArray::with_capacity(2).unwrap();
        for _ in 0..5 {
            a.push(Rc::clone(&shared));
        }
        let capacity = a.capacity();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), capacity);
        assert_eq!(Rc::strong_count(&shared), 1);
        a.push(Rc::clone(&shared));
        assert_eq!(a.len(), 1);
    }
}
