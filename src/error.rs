// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for [`FixedVec`](crate::FixedVec).
//!
//! Every variant names a violated caller contract. The primary API reports
//! them by panicking (see [`fail`]); the few `try_*` methods hand them back as
//! values instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Contract violations detected by [`FixedVec`](crate::FixedVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// An insertion, resize or bulk assign needed more slots than the capacity.
    CapacityExceeded,
    /// `pop_back`, `front` or `back` on a container with no live elements.
    EmptyContainer,
    /// Indexed access outside `[0, len)`.
    OutOfRangeIndex,
    /// A position or position range outside `[begin, end]`, or with
    /// `first > last`.
    InvalidIteratorRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::EmptyContainer => f.write_str("container is empty"),
            Self::OutOfRangeIndex => f.write_str("index out of range"),
            Self::InvalidIteratorRange => f.write_str("invalid position range"),
        }
    }
}

impl CoreError for Error {}

/// Reports a violated precondition. Never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: Error) -> ! {
    panic!("{err}")
}

/// Like [`fail`], with the offending value and the bound it broke.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail_at(err: Error, got: usize, bound: usize) -> ! {
    panic!("{err}: {got} (bound {bound})")
}
