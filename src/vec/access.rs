// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail, fail_at},
    vec::FixedVec,
};

impl<T> FixedVec<'_, T> {
    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::OutOfRangeIndex`] if `index >= len`. The bound is
    /// the length, not the capacity.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(x) => x,
            None => fail_at(Error::OutOfRangeIndex, index, self.len),
        }
    }

    /// Mutable variant of [`at`](FixedVec::at).
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(x) => x,
            None => fail_at(Error::OutOfRangeIndex, index, len),
        }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::EmptyContainer`] if the container is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.first() {
            Some(x) => x,
            None => fail(Error::EmptyContainer),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::EmptyContainer`] if the container is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(x) => x,
            None => fail(Error::EmptyContainer),
        }
    }

    /// Mutable variant of [`front`](FixedVec::front).
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => fail(Error::EmptyContainer),
        }
    }

    /// Mutable variant of [`back`](FixedVec::back).
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => fail(Error::EmptyContainer),
        }
    }
}
