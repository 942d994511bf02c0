// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! `a[i]` mirrors slice behavior and panics when `i >= len`. Use
//! [`DynamicArray::get`] for the fallible form.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Ok(e) => e,
            Err(_) => out_of_bounds(i, self.len),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(i) {
            Ok(e) => e,
            Err(_) => out_of_bounds(i, len),
        }
    }
}

#[cold]
#[track_caller]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}
