// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, fail_at},
    vec::FixedVec,
};

/// Appends every item through [`FixedVec::push_back`].
///
/// # Panics
///
/// Panics with [`Error::CapacityExceeded`] once the container is full and the
/// iterator still yields items.
impl<T> Extend<T> for FixedVec<'_, T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for FixedVec<'_, T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(*item);
        }
    }
}

impl<T> FixedVec<'_, T> {
    /// Appends clones of `src`.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::CapacityExceeded`] if `src` does not fit in the
    /// spare capacity; nothing is appended in that case.
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            fail_at(
                Error::CapacityExceeded,
                self.len + src.len(),
                self.capacity(),
            );
        }
        for item in src {
            self.slots[self.len].write(item.clone());
            self.len += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::StackStorage;

    #[test]
    fn test_extend_by_value_and_by_ref() {
        let mut storage: StackStorage<u8, 5> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend([1, 2]);
        v.extend(&[3, 4]);
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_extend_from_slice_err_is_noop() {
        let mut storage: StackStorage<i32, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend_from_slice(&[1, 2]);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.extend_from_slice(&[3, 4]);
        }));
        assert!(res.is_err());
        assert_eq!(v, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_extend_past_capacity_panics() {
        let mut storage: StackStorage<u8, 2> = StackStorage::new();
        let mut v = storage.as_vec();
        v.extend(0..3);
    }
}
