// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Removal from arbitrary positions.
//!
//! Closing the gap relocates the trailing run with one overlapping
//! `ptr::copy`. A Rust move is a bitwise copy after which the source is
//! never dropped, so this is the per-slot "move, then retire the source"
//! sequence for every `T`, not only `Copy` ones. No destructor runs on a
//! relocated slot.

// Crate imports
use crate::{
    error::{Error, fail_at},
    position::Position,
    trace::trace,
    vec::FixedVec,
};

// Core imports
use core::ptr;

impl<T> FixedVec<'_, T> {
    /// Destroys the element at `pos` and shifts everything after it one slot
    /// toward the front.
    ///
    /// Returns the position that now holds the element that followed `pos`,
    /// which is `end()` if the last element was erased. Positions at or after
    /// `pos` are invalidated.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::InvalidIteratorRange`] unless `begin() <= pos < end()`.
    #[track_caller]
    pub fn erase(&mut self, pos: Position) -> Position {
        let index = pos.index();
        if index >= self.len {
            fail_at(Error::InvalidIteratorRange, index, self.len);
        }
        // The element is dropped after the gap is closed, so a panicking
        // destructor cannot leave a hole in the live prefix.
        drop(self.take(index));
        pos
    }

    /// Destroys the elements in `[first, last)` and shifts the trailing run
    /// down to close the gap. `first == last` is a no-op.
    ///
    /// Returns `first`, which now holds the element that followed the range.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::InvalidIteratorRange`] unless
    /// `begin() <= first <= last <= end()`.
    #[track_caller]
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        let (start, end) = (first.index(), last.index());
        if start > end {
            fail_at(Error::InvalidIteratorRange, start, end);
        }
        if end > self.len {
            fail_at(Error::InvalidIteratorRange, end, self.len);
        }
        if start == end {
            return first;
        }

        let len = self.len;
        trace!(
            "erase_range: destroying {} elements, relocating {}",
            end - start,
            len - end
        );

        let gap = CloseGap {
            vec: self,
            start,
            end,
            len,
        };
        // Hide the doomed range and the tail while destructors run.
        gap.vec.len = start;
        // SAFETY: `start < end <= len`, so `slots[start..end]` are initialized
        // and, with `len` lowered to `start`, owned by nobody else. Each is
        // dropped once; `CloseGap` then moves the tail over them.
        unsafe {
            let doomed =
                ptr::slice_from_raw_parts_mut(gap.vec.as_mut_ptr().add(start), end - start);
            ptr::drop_in_place(doomed);
        }
        drop(gap);
        first
    }

    /// Removes the element at `index` and returns it, shifting the tail down.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::OutOfRangeIndex`] if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            fail_at(Error::OutOfRangeIndex, index, self.len);
        }
        self.take(index)
    }

    // Caller guarantees `index < len`.
    fn take(&mut self, index: usize) -> T {
        let len = self.len;
        debug_assert!(index < len);
        // SAFETY: `index < len`, so the slot is initialized; it is read once and
        // immediately overwritten by the tail shift (or falls out of `len` if it
        // was the last one). `[index + 1, len)` are initialized and fit in the
        // region; `ptr::copy` handles the overlap.
        unsafe {
            let hole = self.as_mut_ptr().add(index);
            let out = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            out
        }
    }
}

/// Moves `[end, len)` down to `start` and fixes `len`, also when a destructor
/// in the erased range unwinds.
struct CloseGap<'a, 's, T> {
    vec: &'a mut FixedVec<'s, T>,
    start: usize,
    end: usize,
    len: usize,
}

impl<T> Drop for CloseGap<'_, '_, T> {
    fn drop(&mut self) {
        let tail = self.len - self.end;
        // SAFETY: `[end, len)` are still initialized and untouched; the
        // destination `[start, start + tail)` lies inside the region.
        unsafe {
            let base = self.vec.as_mut_ptr();
            ptr::copy(base.add(self.end), base.add(self.start), tail);
        }
        self.vec.len = self.start + tail;
    }
}
