// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-storage-vec`
//!
//! A `no_std`, fixed-capacity vector that lives in storage somebody else owns.
//!
//! The core type, [`FixedVec<'s, T>`](FixedVec), is a view over a
//! caller-supplied region of uninitialized slots. It keeps a logical length `len ∈ 0..=capacity`,
//! constructs elements in place as they are added and destroys them as they
//! are removed. It never allocates, grows or moves its region.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want `Vec`-like semantics with a hard upper bound known up front.
//! - The memory should come from somewhere specific: a stack frame, a single
//!   pre-sized heap block, a static buffer, a foreign allocation.
//! - Elements are arbitrary types with destructors, not just `Copy` data.
//! - Element addresses must stay put for as long as the element is live
//!   (apart from an explicit [`erase`](FixedVec::erase), which shifts the tail).
//!
//! It may not be the best fit if you need growth or want every capacity
//! failure reported as a value: most contract violations here panic.
//!
//! ## Storage providers
//!
//! The region is handed in through the [`Storage`] trait:
//!
//! - [`StackStorage<T, N>`]: `N` inline slots, usually on the caller's stack.
//! - `HeapStorage<T>` (feature `alloc`, on by default): one heap block of
//!   exactly `capacity` slots, released when the provider drops.
//! - Any `[MaybeUninit<T>; N]` or `&mut [MaybeUninit<T>]`.
//! - A raw pointer and a slot count via the `unsafe`
//!   [`FixedVec::from_raw_parts`].
//!
//! The container mutably borrows its provider, so the region cannot be freed
//! or reused while elements are live in it. Providers never drop elements;
//! the container destroys whatever is still live when it goes away.
//!
//! ## Failure policy
//!
//! Violating a precondition is a bug in the caller and **panics** with the
//! `Display` form of the matching [`Error`]:
//!
//! - [`Error::CapacityExceeded`]: push, extend, resize or assign beyond capacity;
//! - [`Error::EmptyContainer`]: `pop_back`, `front` or `back` on an empty container;
//! - [`Error::OutOfRangeIndex`]: `at`, `v[i]` or `v[pos]` outside `[0, len)`;
//! - [`Error::InvalidIteratorRange`]: `erase`/`erase_range` with positions outside
//!   the live range or out of order.
//!
//! [`FixedVec::try_push_back`], [`FixedVec::try_pop_back`] and
//! [`FixedVec::try_resize`] report the same conditions as values.
//!
//! ## Positions
//!
//! [`Position`] is a plain slot index with `next`/`prev` stepping, obtained
//! from [`begin`](FixedVec::begin), [`end`](FixedVec::end),
//! [`position`](FixedVec::position) or [`find`](FixedVec::find). Ordinary
//! Rust iteration (`iter`, `iter_mut`, `into_iter`) works as well.
//!
//! ## Features
//!
//! - `alloc` (default): enables `HeapStorage`.
//! - `serde`: `Serialize` for `FixedVec`, and `DeserializeSeed` for
//!   `&mut FixedVec` (decodes into existing storage).
//! - `log`: emits `trace`-level records for view creation, bulk destruction
//!   and heap block allocation/release through the `log` facade.
//!
//! ## Thread safety
//!
//! None internally. Concurrent access must be serialized by the caller.
//!
//! ## Example
//!
//! ```rust
//! use fixed_storage_vec::StackStorage;
//!
//! let mut storage: StackStorage<i32, 5> = StackStorage::new();
//! let mut v = storage.as_vec();
//! v.extend([1, 2, 3, 4, 5]);
//!
//! let two = v.find(&2);
//! v.erase(two);
//! assert_eq!(v, [1, 3, 4, 5]);
//!
//! v.pop_back();
//! v.pop_back();
//! v.resize(4, 9);
//! assert_eq!(v, [1, 3, 9, 9]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod position;
#[cfg(feature = "serde")]
mod serde;
mod storage;
#[cfg(test)]
mod test_support;
mod trace;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use position::Position;
#[cfg(feature = "alloc")]
pub use storage::HeapStorage;
pub use storage::{StackStorage, Storage};
pub use vec::FixedVec;
