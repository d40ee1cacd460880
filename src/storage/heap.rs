// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{storage::Storage, trace::trace, vec::FixedVec};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, mem::MaybeUninit};

/// One heap block of exactly `capacity` slots.
///
/// The block is allocated in [`with_capacity`](Self::with_capacity) and
/// released when the provider is dropped. It is never resized, so the
/// address handed to a [`FixedVec`] is stable for the provider's whole life.
///
/// ```rust
/// use fixed_storage_vec::HeapStorage;
///
/// let mut storage = HeapStorage::with_capacity(1024);
/// let mut v = storage.as_vec();
/// v.resize(1024, 0u32);
/// assert!(v.is_full());
/// ```
pub struct HeapStorage<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> HeapStorage<T> {
    /// Allocates an uninitialized block for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = Box::new_uninit_slice(capacity);
        trace!("heap storage: allocated {} slots", capacity);
        Self { slots }
    }

    /// An empty container over this storage.
    #[inline]
    pub fn as_vec(&mut self) -> FixedVec<'_, T> {
        FixedVec::with_storage(self)
    }
}

impl<T> Storage<T> for HeapStorage<T> {
    #[inline]
    fn slots(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.slots
    }
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Drop for HeapStorage<T> {
    fn drop(&mut self) {
        trace!("heap storage: releasing {} slots", self.slots.len());
    }
}

impl<T> fmt::Debug for HeapStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapStorage")
            .field("capacity", &self.slots.len())
            .finish_non_exhaustive()
    }
}
