// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
