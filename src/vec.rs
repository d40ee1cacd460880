// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVec` type and its inherent API.
//!
//! `FixedVec<'s, T>` is a fixed-capacity vector over caller-supplied slots.
//! It borrows the slot region for `'s`, constructs elements into it on
//! insertion, and destroys them on removal. The region itself is never
//! allocated, grown or freed by the container.

// Invariants:
// - `0 <= len <= slots.len()` always holds.
// - `slots[..len]` hold initialized `T` values owned by the container.
// - `slots[len..]` are logically uninitialized and never read as `T`.
// - Every method restores these before returning or running user code
//   (`Clone`, `Drop`, closures) that may panic.

mod access;
mod as_ptr;
mod assign;
mod erase;
mod extend;
mod new;
mod pop;
mod push;
mod resize;
mod slice;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector living in storage it does not own.
///
/// The container is a view over a region of `MaybeUninit<T>` slots, borrowed
/// for `'s`, plus a logical length `len ∈ 0..=capacity`:
///
/// - capacity is the slot count of the region and never changes;
/// - slots `[0, len)` hold live elements, the rest is raw memory;
/// - elements are constructed in place on insertion and destroyed on removal;
/// - existing elements are never moved to another region (no reallocation).
///
/// The region comes from a [`Storage`](crate::Storage) provider such as
/// [`StackStorage`](crate::StackStorage) or `HeapStorage`, or directly from a
/// `&mut [MaybeUninit<T>]`. The borrow guarantees the region outlives the
/// container and is not reused while elements are live.
///
/// # Contract violations
///
/// Exceeding the capacity, reading past `len`, popping an empty container or
/// passing a position outside the live range is a bug in the caller and
/// **panics** with the matching [`Error`](crate::Error) message. The
/// container never grows to satisfy a request. A few `try_*` methods
/// ([`try_push_back`](FixedVec::try_push_back),
/// [`try_pop_back`](FixedVec::try_pop_back),
/// [`try_resize`](FixedVec::try_resize)) report the same conditions as values.
///
/// # Destruction order
///
/// [`pop_back`](FixedVec::pop_back), [`truncate`](FixedVec::truncate),
/// [`clear`](FixedVec::clear) and `Drop` destroy elements from the tail
/// backward, one at a time.
///
/// # Examples
///
/// ```rust
/// use fixed_storage_vec::{FixedVec, StackStorage};
///
/// let mut storage: StackStorage<String, 4> = StackStorage::new();
/// let mut v = FixedVec::with_storage(&mut storage);
/// v.push_back("a".to_string());
/// v.emplace_back(|| "b".to_string());
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v.back(), "b");
/// ```
///
/// # Thread safety
///
/// No internal synchronization. `FixedVec` is `Send`/`Sync` exactly when a
/// unique borrow of `[T]` is; concurrent use needs an external lock.
pub struct FixedVec<'s, T> {
    pub(crate) slots: &'s mut [MaybeUninit<T>],
    pub(crate) len: usize,
    pub(crate) _owns: PhantomData<T>,
}

impl<T> FixedVec<'_, T> {
    /// Returns the number of slots in the backing region.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns `capacity - len`, the number of elements that can still be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the container holds `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for FixedVec<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedVec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<FixedVec<'_, U>> for FixedVec<'_, T> {
    fn eq(&self, other: &FixedVec<'_, U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U> PartialEq<[U]> for FixedVec<'_, T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U> PartialEq<&[U]> for FixedVec<'_, T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, const M: usize> PartialEq<[U; M]> for FixedVec<'_, T> {
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for FixedVec<'_, T> {}
impl<T: Ord> Ord for FixedVec<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for FixedVec<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for FixedVec<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for FixedVec<'_, T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for FixedVec<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for FixedVec<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for FixedVec<'_, T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for FixedVec<'_, T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for FixedVec<'_, T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
