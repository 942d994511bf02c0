// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArray` and its `Cursor`.
//!
//! These errors represent bounds, iteration and construction conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynamicArray`](crate::DynamicArray)
/// and [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the valid range for the operation.
    ///
    /// `get`, `set` and `remove` accept `0..len`; `insert` also accepts `len`.
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// [`Cursor::next`](crate::Cursor::next) was called with no element left.
    NoSuchElement,
    /// [`Cursor::remove`](crate::Cursor::remove) was called without a pending
    /// element: before the first `next`, or twice after one `next`.
    IllegalState,
    /// A container was requested with a capacity of zero.
    InvalidCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index } => write!(f, "illegal index {index}"),
            Self::NoSuchElement => f.write_str("no next element"),
            Self::IllegalState => f.write_str("nothing to remove"),
            Self::InvalidCapacity => f.write_str("capacity must be positive"),
        }
    }
}

impl CoreError for Error {}
