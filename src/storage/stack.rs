// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{storage::Storage, vec::FixedVec};

// Core imports
use core::{fmt, mem::MaybeUninit};

/// Inline storage for `N` elements of `T`.
///
/// Holds the slots by value, so it lives wherever it is placed (usually the
/// caller's stack frame). Its lifetime must contain that of every
/// [`FixedVec`] built over it, which the borrow in [`as_vec`](Self::as_vec)
/// enforces.
///
/// ```rust
/// use fixed_storage_vec::StackStorage;
///
/// let mut storage: StackStorage<u8, 16> = StackStorage::new();
/// let mut v = storage.as_vec();
/// v.extend(b"hi".iter());
/// assert_eq!(v, *b"hi");
/// ```
pub struct StackStorage<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
}

impl<T, const N: usize> StackStorage<T, N> {
    /// The fixed capacity of this storage.
    pub const CAPACITY: usize = N;

    /// Uninitialized storage for `N` elements.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
        }
    }

    /// An empty container over this storage.
    #[inline]
    pub fn as_vec(&mut self) -> FixedVec<'_, T> {
        FixedVec::with_storage(self)
    }
}

impl<T, const N: usize> Default for StackStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Storage<T> for StackStorage<T, N> {
    #[inline]
    fn slots(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.slots
    }
    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> fmt::Debug for StackStorage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackStorage")
            .field("capacity", &N)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::StackStorage;
    use crate::Storage;

    #[test]
    fn test_capacity_and_default() {
        let storage: StackStorage<u64, 7> = StackStorage::default();
        assert_eq!(storage.capacity(), 7);
        assert_eq!(StackStorage::<u64, 7>::CAPACITY, 7);
        assert!(format!("{storage:?}").contains("capacity: 7"));
    }

    #[test]
    fn test_non_copy_elements_without_default() {
        struct NoDefault(String);

        let mut storage: StackStorage<NoDefault, 3> = StackStorage::new();
        let mut v = storage.as_vec();
        v.push_back(NoDefault("a".into()));
        v.emplace_back(|| NoDefault("b".into()));
        let joined: String = v.iter().map(|n| n.0.as_str()).collect();
        assert_eq!(joined, "ab");
    }
}
