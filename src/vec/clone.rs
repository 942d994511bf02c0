// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

/// Shallow copy: a fresh buffer of the same capacity holding a clone of each
/// element.
///
/// For handle types such as `Rc<E>` the clone shares the pointee, so element
/// identity is preserved while the two containers' structure is independent.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}
