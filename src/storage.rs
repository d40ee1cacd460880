// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing-memory providers for [`FixedVec`](crate::FixedVec).
//!
//! A provider owns a region of `MaybeUninit<T>` slots and lends it out
//! through [`Storage::slots`]. It never constructs or destroys elements: that
//! is the container's job. Because
//! [`FixedVec::with_storage`](crate::FixedVec::with_storage) borrows the
//! provider mutably, the region cannot be freed, moved or handed to a second
//! container while elements are live in it.
//!
//! - [`StackStorage`]: an inline `[MaybeUninit<T>; N]`, typically placed in
//!   the caller's stack frame.
//! - `HeapStorage` (feature `alloc`): one boxed block of exactly `capacity`
//!   slots, released when the provider is dropped and never resized.
//!
//! Plain `[MaybeUninit<T>; N]` arrays and `[MaybeUninit<T>]` slices are
//! providers too.

#[cfg(feature = "alloc")]
mod heap;
mod stack;

#[cfg(feature = "alloc")]
pub use heap::HeapStorage;
pub use stack::StackStorage;

// Core imports
use core::mem::MaybeUninit;

/// A region of typed, possibly uninitialized slots.
///
/// Implementations must hand out the same region, with the same length, on
/// every call: a container created from an earlier borrow relies on nothing
/// else touching it, and a later container starts from scratch.
pub trait Storage<T> {
    /// Lends out the slot region.
    fn slots(&mut self) -> &mut [MaybeUninit<T>];

    /// Number of slots in the region.
    fn capacity(&self) -> usize;
}

impl<T> Storage<T> for [MaybeUninit<T>] {
    #[inline]
    fn slots(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
    #[inline]
    fn capacity(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Storage<T> for [MaybeUninit<T>; N] {
    #[inline]
    fn slots(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}
