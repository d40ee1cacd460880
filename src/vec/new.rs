// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{storage::Storage, trace::trace, vec::FixedVec};

// Core imports
use core::{marker::PhantomData, mem::MaybeUninit};

impl<'s, T> FixedVec<'s, T> {
    /// Creates an empty container over `slots`. Capacity is `slots.len()`.
    ///
    /// No slot is initialized; whatever the region held before is ignored.
    #[inline]
    pub fn new(slots: &'s mut [MaybeUninit<T>]) -> Self {
        trace!("fixed vec view over {} slots", slots.len());
        Self {
            slots,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Creates an empty container over the slots handed out by `storage`.
    #[inline]
    pub fn with_storage<S: Storage<T> + ?Sized>(storage: &'s mut S) -> Self {
        Self::new(storage.slots())
    }

    /// Creates an empty container over `capacity` slots starting at `ptr`.
    ///
    /// # Safety
    ///
    /// - `ptr` must be non-null and aligned for `T`, even when `capacity == 0`
    ///   (use [`NonNull::dangling`](core::ptr::NonNull::dangling) then).
    /// - `ptr` must be valid for reads and writes of `capacity * size_of::<T>()`
    ///   bytes for all of `'s`.
    /// - The region must not be accessed through any other pointer while the
    ///   returned container is alive.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, capacity: usize) -> Self {
        // SAFETY: `MaybeUninit<T>` has the layout of `T` and places no
        // requirement on the contents; the caller upholds the validity,
        // alignment and exclusivity requirements above.
        let slots =
            unsafe { core::slice::from_raw_parts_mut(ptr.cast::<MaybeUninit<T>>(), capacity) };
        Self::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedVec, test_support::DropLog};
    use core::{mem::MaybeUninit, ptr::NonNull};

    #[test]
    fn test_new_over_array_slots() {
        let mut slots = [const { MaybeUninit::<u16>::uninit() }; 3];
        let mut v = FixedVec::new(&mut slots[..2]);
        assert_eq!(v.capacity(), 2);
        v.push_back(10);
        v.push_back(20);
        assert!(v.is_full());
    }

    #[test]
    fn test_with_storage_over_plain_array() {
        let mut slots = [const { MaybeUninit::<u16>::uninit() }; 3];
        let mut v = FixedVec::with_storage(&mut slots);
        assert_eq!(v.capacity(), 3);
        v.push_back(1);
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_from_raw_parts_manages_lifetimes_in_foreign_block() {
        let log = DropLog::new();
        let mut block: Vec<MaybeUninit<crate::test_support::Tracked>> = Vec::with_capacity(4);
        // SAFETY: `block` owns 4 aligned slots and is not touched while `v` lives.
        let mut v = unsafe { FixedVec::from_raw_parts(block.as_mut_ptr().cast(), 4) };
        v.push_back(log.track(1));
        v.push_back(log.track(2));
        drop(v);
        assert_eq!(log.dropped(), [2, 1]);
        // `block` never had its length changed, so it drops no elements.
        assert_eq!(block.len(), 0);
    }

    #[test]
    fn test_from_raw_parts_zero_capacity() {
        // SAFETY: zero slots over a dangling, aligned pointer.
        let v: FixedVec<'_, u64> =
            unsafe { FixedVec::from_raw_parts(NonNull::dangling().as_ptr(), 0) };
        assert_eq!(v.capacity(), 0);
        assert!(v.is_full());
    }
}
