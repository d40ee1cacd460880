// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail_at},
    trace::trace,
    vec::FixedVec,
};

impl<T> FixedVec<'_, T> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking destroys `[new_len, len)` from the tail backward.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `new_len > capacity()`.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.check_new_len(new_len);
        if new_len > self.len {
            self.extend_with(new_len - self.len, value);
        } else {
            self.truncate(new_len);
        }
    }

    /// Resizes to `new_len`, default-constructing new elements.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `new_len > capacity()`.
    #[track_caller]
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, constructing each new element with `make`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `new_len > capacity()`.
    /// If `make` panics, the elements built so far stay live.
    #[track_caller]
    pub fn resize_with<F>(&mut self, new_len: usize, mut make: F)
    where
        F: FnMut() -> T,
    {
        self.check_new_len(new_len);
        while self.len < new_len {
            self.slots[self.len].write(make());
            self.len += 1;
        }
        self.truncate(new_len);
    }

    /// Fallible variant of [`resize`](FixedVec::resize).
    ///
    /// Returns [`Error::CapacityExceeded`] and leaves the container unchanged
    /// if `new_len > capacity()`.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > self.capacity() {
            return Err(Error::CapacityExceeded);
        }
        self.resize(new_len, value);
        Ok(())
    }

    /// Destroys `[new_len, len)` from the tail backward; no-op if
    /// `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        trace!("destroying {} trailing elements", self.len - new_len);
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot was inside the initialized prefix before the
            // decrement and is now outside it, so it is dropped exactly once.
            unsafe { self.slots[self.len].assume_init_drop() };
        }
    }

    /// Destroys every element from the tail backward; `len` becomes 0.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // Appends `n` elements: `n - 1` clones of `value`, then `value` itself.
    // Callers have checked `len + n <= capacity`.
    pub(crate) fn extend_with(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        debug_assert!(n <= self.spare_capacity());
        if n == 0 {
            return;
        }
        for _ in 1..n {
            self.slots[self.len].write(value.clone());
            self.len += 1;
        }
        self.slots[self.len].write(value);
        self.len += 1;
    }

    #[track_caller]
    fn check_new_len(&self, new_len: usize) {
        if new_len > self.capacity() {
            fail_at(Error::CapacityExceeded, new_len, self.capacity());
        }
    }
}
