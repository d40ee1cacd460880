// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Position markers for [`FixedVec`](crate::FixedVec).
//!
//! A [`Position`] names a slot by index. It is a plain value: it does not
//! borrow the container, so it can be held across mutations, but it tracks
//! nothing either. After an [`erase`](crate::FixedVec::erase) or a length
//! change, a position at or after the affected slot refers to whatever now
//! lives there, or to nothing. Reading through a position outside `[0, len)`
//! panics instead of touching raw memory.

// Crate imports
use crate::{
    error::{Error, fail, fail_at},
    vec::FixedVec,
};

/// A slot position inside a [`FixedVec`].
///
/// Two positions are equal iff they name the same slot. `begin()` is slot 0
/// and `end()` is slot `len`, one past the last live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    index: usize,
}

impl Position {
    /// The position of slot `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// The following slot.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            index: self.index + 1,
        }
    }

    /// The preceding slot.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::InvalidIteratorRange`] when called on slot 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn prev(self) -> Self {
        match self.checked_prev() {
            Some(p) => p,
            None => fail(Error::InvalidIteratorRange),
        }
    }

    /// The preceding slot, or `None` at slot 0.
    #[inline]
    pub const fn checked_prev(self) -> Option<Self> {
        match self.index.checked_sub(1) {
            Some(index) => Some(Self { index }),
            None => None,
        }
    }

    /// Number of steps from `self` forward to `other`, or `None` if `other`
    /// comes first.
    #[inline]
    pub const fn distance_to(self, other: Self) -> Option<usize> {
        other.index.checked_sub(self.index)
    }
}

impl<T> FixedVec<'_, T> {
    /// Position of the first slot.
    #[inline]
    pub const fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Position one past the last live element.
    #[inline]
    pub const fn end(&self) -> Position {
        Position::new(self.len)
    }

    /// Position of slot `index`; `index == len` gives `end()`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::OutOfRangeIndex`] if `index > len`.
    #[inline]
    #[track_caller]
    pub fn position(&self, index: usize) -> Position {
        if index > self.len {
            fail_at(Error::OutOfRangeIndex, index, self.len);
        }
        Position::new(index)
    }

    /// Position of the first element equal to `value`, or `end()`.
    pub fn find(&self, value: &T) -> Position
    where
        T: PartialEq,
    {
        self.find_by(|x| x == value)
    }

    /// Position of the first element matching `pred`, or `end()`.
    pub fn find_by<P>(&self, pred: P) -> Position
    where
        P: FnMut(&T) -> bool,
    {
        Position::new(self.iter().position(pred).unwrap_or(self.len))
    }

    /// The element at `pos`, or `None` if `pos` is not in `[begin, end)`.
    #[inline]
    pub fn get_at(&self, pos: Position) -> Option<&T> {
        self.get(pos.index)
    }

    /// Mutable variant of [`get_at`](FixedVec::get_at).
    #[inline]
    pub fn get_at_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.get_mut(pos.index)
    }
}
