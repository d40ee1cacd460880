// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail_at},
    vec::FixedVec,
};

impl<T> FixedVec<'_, T> {
    /// Moves `value` into the slot at `len` and increments `len`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if the container is full.
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            fail_at(Error::CapacityExceeded, self.len + 1, self.capacity());
        }
        self.slots[self.len].write(value);
        self.len += 1;
    }

    /// Constructs an element with `make` directly into the slot at `len`.
    ///
    /// Capacity is checked before `make` runs. Returns the new element.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if the container is full.
    /// If `make` panics, the container is left unchanged.
    #[inline]
    #[track_caller]
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            fail_at(Error::CapacityExceeded, self.len + 1, self.capacity());
        }
        let len = self.len;
        let slot = self.slots[len].write(make());
        self.len = len + 1;
        slot
    }

    /// Pushes `value` if there is room; otherwise hands it back in `Err`.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, T> {
        if self.is_full() {
            return Err(value);
        }
        let len = self.len;
        let slot = self.slots[len].write(value);
        self.len = len + 1;
        Ok(slot)
    }
}
