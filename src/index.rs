// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVec`](crate::FixedVec).
//!
//! - `v[i]` and `v[pos]` go through [`at`](crate::FixedVec::at) and panic with
//!   [`Error::OutOfRangeIndex`](crate::Error::OutOfRangeIndex) outside `[0, len)`;
//! - range forms mirror slice behavior on the live prefix `[0, len)`.

// Crate imports
use crate::{position::Position, vec::FixedVec};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T> Index<usize> for FixedVec<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &T {
        self.at(i)
    }
}
impl<T> IndexMut<usize> for FixedVec<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.at_mut(i)
    }
}

impl<T> Index<Position> for FixedVec<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        self.at(pos.index())
    }
}
impl<T> IndexMut<Position> for FixedVec<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        self.at_mut(pos.index())
    }
}

macro_rules! range_index {
    ($($range:ty),+ $(,)?) => {$(
        impl<T> Index<$range> for FixedVec<'_, T> {
            type Output = [T];
            fn index(&self, r: $range) -> &[T] {
                &self.as_slice()[r]
            }
        }
        impl<T> IndexMut<$range> for FixedVec<'_, T> {
            fn index_mut(&mut self, r: $range) -> &mut [T] {
                &mut self.as_mut_slice()[r]
            }
        }
    )+};
}

range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);
