// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` (with `alloc`), growable, indexable sequence container,
//! **with no `unsafe`**.
//!
//! The core type, [`DynamicArray<T>`], owns a heap-allocated slot buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Elements
//! always occupy the contiguous prefix `[0..len)` in insertion order.
//!
//! ## Growth
//!
//! - A fresh container has [`DEFAULT_CAPACITY`] slots, or whatever was passed
//!   to [`DynamicArray::with_capacity`] (which must be positive).
//! - When an append or insert finds the buffer full, the buffer is reallocated
//!   to **exactly twice** its capacity *before* the new element is written.
//!   `N` appends therefore cost `O(N)` copying in total.
//! - Capacity never shrinks, not even on [`DynamicArray::clear`].
//!
//! ## Fallible operations
//!
//! Indexed operations return [`Error::OutOfRange`] carrying the offending
//! index instead of panicking:
//!
//! - [`DynamicArray::get`], [`DynamicArray::set`] and [`DynamicArray::remove`]
//!   accept `0..len`;
//! - [`DynamicArray::insert`] additionally accepts `len` (append position).
//!
//! `Index`/`IndexMut` (`a[i]`) follow slice semantics and **panic** on
//! out-of-range indices.
//!
//! A failed operation leaves the container unchanged.
//!
//! ## Iteration
//!
//! - [`DynamicArray::iter`] / [`DynamicArray::iter_mut`] borrow the container
//!   and yield references. Any number of `iter()`s may be live at once.
//! - [`DynamicArray::cursor`] returns a [`Cursor`], a single-pass cursor that
//!   can remove the element it most recently yielded (once per `next`). It
//!   holds the container mutably borrowed, so the container cannot be mutated
//!   behind its back.
//! - `into_iter()` consumes the container and yields elements by value.
//!
//! ## Shallow copies
//!
//! `Clone` allocates a new buffer of the same capacity and clones each element
//! into it. With reference-counted elements (`Rc<E>`, `Arc<E>`) that is a copy
//! of the handle, so both containers share the same element objects while their
//! structure stays independent.
//!
//! ## Thread safety
//!
//! `DynamicArray` performs no internal synchronization. It is meant for
//! sequential use; wrap it in a lock of your own to share it across threads.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynamicArray<T>` as a plain
//!     sequence of the live elements.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::{DynamicArray, Error};
//!
//! let mut a = DynamicArray::with_capacity(2).unwrap();
//! a.push(1);
//! a.push(2);
//! a.push(3); // grows to 4 slots
//! assert_eq!(a.capacity(), 4);
//!
//! a.insert(1, 99).unwrap();
//! assert_eq!(a.remove(0), Ok(1));
//! assert_eq!(a.get(7), Err(Error::OutOfRange { index: 7 }));
//!
//! let mut cursor = a.cursor();
//! assert_eq!(cursor.next(), Ok(&99));
//! assert_eq!(cursor.remove(), Ok(99));
//! assert_eq!(cursor.remove(), Err(Error::IllegalState));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod cursor;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cursor::Cursor;
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use vec::{DEFAULT_CAPACITY, DynamicArray};
