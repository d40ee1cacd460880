// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail},
    vec::FixedVec,
};

impl<T> FixedVec<'_, T> {
    /// Moves the last element out and decrements `len`.
    ///
    /// The element is destroyed when the caller drops the returned value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::EmptyContainer`] if there is nothing to pop.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.try_pop_back() {
            Some(out) => out,
            None => fail(Error::EmptyContainer),
        }
    }

    /// Pops the last element if any.
    #[inline]
    pub fn try_pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: before decrementing, `slots[..old_len]` were initialized by
        // invariant, so the old last slot holds a `T`. `len` no longer covers
        // it, so it is read out exactly once.
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }
}

#[cfg(test)]
mod tests {
    use crate::{StackStorage, test_support::DropLog};

    #[test]
    fn test_pop_back_moves_out_without_extra_drop() {
        let log = DropLog::new();
        let mut storage: StackStorage<_, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.push_back(log.track(1));
        v.push_back(log.track(2));
        let two = v.pop_back();
        assert_eq!(two.id(), 2);
        assert!(log.dropped().is_empty());
        drop(two);
        assert_eq!(log.dropped(), [2]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn test_pop_back_on_empty_panics() {
        let mut storage: StackStorage<u8, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.pop_back();
    }

    #[test]
    fn test_push_pop_net_count() {
        let mut storage: StackStorage<u32, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        let (mut pushes, mut pops) = (0, 0);
        for round in 0..20u32 {
            if round % 3 == 2 {
                if v.try_pop_back().is_some() {
                    pops += 1;
                }
            } else if v.try_push_back(round).is_ok() {
                pushes += 1;
            }
            assert_eq!(v.len(), pushes - pops);
        }
    }
}
