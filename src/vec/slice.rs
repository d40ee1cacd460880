// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVec;

impl<T> FixedVec<'_, T> {
    /// Returns the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `slots[..len]` are live elements and `len <= capacity`; the
        // pointer comes from the region, so it is aligned and non-null.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` makes the borrow unique.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}
