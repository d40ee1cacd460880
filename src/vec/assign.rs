// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail_at},
    vec::FixedVec,
};

impl<T> FixedVec<'_, T> {
    /// Replaces the contents with the items of `iter`.
    ///
    /// Clears the container, then appends each item through
    /// [`push_back`](FixedVec::push_back).
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] once `iter` yields more than
    /// `capacity()` items. The items accepted up to that point stay live.
    #[track_caller]
    pub fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        for item in iter {
            self.push_back(item);
        }
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `src.len() > capacity()`;
    /// the container is left untouched in that case.
    #[track_caller]
    pub fn assign_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        if src.len() > self.capacity() {
            fail_at(Error::CapacityExceeded, src.len(), self.capacity());
        }
        self.clear();
        self.extend_from_slice(src);
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `n > capacity()`; the
    /// container is left untouched in that case.
    #[track_caller]
    pub fn assign_fill(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        if n > self.capacity() {
            fail_at(Error::CapacityExceeded, n, self.capacity());
        }
        self.clear();
        self.extend_with(n, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::{StackStorage, test_support::DropLog};

    #[test]
    fn test_assign_from_other_container() {
        let mut s1: StackStorage<u8, 10> = StackStorage::new();
        let mut s2: StackStorage<u8, 10> = StackStorage::new();
        let mut src = s1.as_vec();
        let mut dst = s2.as_vec();
        for i in 0..9 {
            src.push_back(i);
        }
        dst.push_back(99);
        dst.assign(src.iter().copied());
        assert_eq!(dst, src);
        assert_eq!(dst.len(), 9);
    }

    #[test]
    fn test_assign_destroys_previous_contents() {
        let log = DropLog::new();
        let mut storage: StackStorage<_, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        v.push_back(log.track(1));
        v.push_back(log.track(2));
        v.assign([log.track(3)]);
        assert_eq!(log.dropped(), [2, 1]);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].id(), 3);
    }

    #[test]
    fn test_assign_fill() {
        let mut storage: StackStorage<String, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        v.push_back("old".into());
        v.assign_fill(3, "z".into());
        assert_eq!(v, ["z", "z", "z"]);
        v.assign_fill(0, "gone".into());
        assert!(v.is_empty());
    }

    #[test]
    fn test_assign_fill_clones_all_but_last() {
        let log = DropLog::new();
        let mut storage: StackStorage<_, 4> = StackStorage::new();
        let mut v = storage.as_vec();
        v.assign_fill(3, log.track(7));
        assert!(log.dropped().is_empty());
        v.clear();
        assert_eq!(log.dropped(), [7, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_assign_longer_than_capacity_panics() {
        let mut storage: StackStorage<u8, 2> = StackStorage::new();
        let mut v = storage.as_vec();
        v.assign(0..3);
    }

    #[test]
    fn test_assign_fill_over_capacity_leaves_contents() {
        let mut storage: StackStorage<u8, 2> = StackStorage::new();
        let mut v = storage.as_vec();
        v.push_back(5);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| v.assign_fill(3, 1)));
        assert!(res.is_err());
        assert_eq!(v, [5]);
    }

    #[test]
    fn test_assign_from_slice() {
        let mut storage: StackStorage<i64, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.assign_from_slice(&[4, 5, 6]);
        assert_eq!(v, [4, 5, 6]);
        v.assign_from_slice(&[]);
        assert!(v.is_empty());
    }
}
