// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVec`](crate::FixedVec).
//!
//! - `IntoIter<'s, T>` moves elements out by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!   Elements it does not yield are destroyed when it is dropped.
//! - `&FixedVec` and `&mut FixedVec` iterate as slices.

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `FixedVec::into_iter()`.
///
/// Yields elements by value from front to back. The backing storage stays
/// borrowed until the iterator is dropped.
pub struct IntoIter<'s, T> {
    // `v.len` is 0 while the iterator lives; `[front, back)` are the
    // elements still owned by the iterator.
    pub(crate) v: FixedVec<'s, T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> IntoIter<'_, T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are initialized and owned by the iterator.
        unsafe {
            core::slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front)
        }
    }

    // Drops `[front, front + n)` and advances `front` past them.
    fn skip_front(&mut self, n: usize) {
        let start = self.front;
        self.front += n;
        // SAFETY: `n <= back - front`, so the range is initialized and, with
        // `front` already moved past it, dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.v.as_mut_ptr().add(start),
                n,
            ));
        }
    }

    // Drops `[back - n, back)` and moves `back` before them.
    fn skip_back(&mut self, n: usize) {
        self.back -= n;
        // SAFETY: as in `skip_front`, mirrored.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.v.as_mut_ptr().add(self.back),
                n,
            ));
        }
    }
}

impl<T> Iterator for IntoIter<'_, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `[front, back)`; it is now outside, so it
            // is read exactly once.
            Some(unsafe { self.v.slots[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.skip_front(n.min(rem));
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last slot of `[front, back)`, read exactly once.
            Some(unsafe { self.v.slots[self.back].assume_init_read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.skip_back(n.min(rem));
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<'_, T> {}

impl<T> Drop for IntoIter<'_, T> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        self.skip_front(rem);
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FixedVec<'_, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut FixedVec<'_, T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<'s, T> IntoIterator for FixedVec<'s, T> {
    type Item = T;
    type IntoIter = IntoIter<'s, T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Ownership of the live elements moves to the iterator.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{StackStorage, test_support::DropLog};

    #[test]
    fn test_double_ended_and_nth() {
        let mut storage: StackStorage<i32, 6> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let mut storage: StackStorage<i32, 6> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([1, 2, 3, 4, 5]);
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 4, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let mut storage: StackStorage<i32, 6> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.as_slice(), &[20, 30, 40]);
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth_overflow_drains_and_drops() {
        let log = DropLog::new();
        let mut storage: StackStorage<_, 5> = StackStorage::new();
        let mut v = storage.as_vec();
        for id in 1..=3 {
            v.push_back(log.track(id));
        }
        let mut it = v.into_iter();
        assert!(it.nth_back(3).is_none());
        assert_eq!(log.dropped(), [1, 2, 3]);
        assert!(it.next().is_none());
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_unyielded_elements_dropped_once() {
        let log = DropLog::new();
        let mut storage: StackStorage<_, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        for id in 1..=4 {
            v.push_back(log.track(id));
        }
        let mut it = v.into_iter();
        let first = it.next().unwrap();
        let skipped_to = it.nth(1).unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(skipped_to.id(), 3);
        assert_eq!(log.dropped(), [2]);
        drop(it);
        assert_eq!(log.dropped(), [2, 4]);
        drop((first, skipped_to));
        assert_eq!(log.dropped(), [2, 4, 1, 3]);
    }

    #[test]
    fn test_borrowed_iteration() {
        let mut storage: StackStorage<i32, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([1, 2, 3]);
        for x in &mut v {
            *x *= 2;
        }
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 12);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [6, 4, 2]);
    }

    #[test]
    fn test_into_iter_zero_capacity() {
        let mut storage: StackStorage<u8, 0> = StackStorage::new();
        let mut it = storage.as_vec().into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
