// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

impl<T> FixedVec<'_, T> {
    /// Returns a raw pointer to the first slot of the backing region.
    ///
    /// Only the first `len` slots hold live elements. Code that dereferences
    /// this pointer must not read `ptr.add(i)` as `T` for any `i >= len`.
    ///
    /// The pointer stays the same for the whole life of the container: the
    /// region is never reallocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the first slot of the backing region.
    ///
    /// Writing past `len` through this pointer does **not** update `len`; such
    /// writes are invisible to the container and are never dropped by it.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }
}
