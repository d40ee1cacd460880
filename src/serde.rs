// This file is part of fixed-storage-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVec`](crate::FixedVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: a container cannot conjure its own storage, so decoding
//!   goes *into* an existing one through [`DeserializeSeed`] on
//!   `&mut FixedVec`. It has [`assign`](crate::FixedVec::assign) semantics:
//!   the current elements are destroyed, then each decoded element is
//!   appended.
//!
//! Decoding more elements than the capacity is a deserialization error, not
//! a panic: the input is untrusted, the caller did nothing wrong.
//!
//! ```rust
//! use fixed_storage_vec::StackStorage;
//! use serde::de::DeserializeSeed;
//!
//! let mut storage: StackStorage<u8, 4> = StackStorage::new();
//! let mut v = storage.as_vec();
//! let mut de = serde_json::Deserializer::from_str("[1, 2, 3]");
//! (&mut v).deserialize(&mut de).unwrap();
//! assert_eq!(v, [1, 2, 3]);
//! ```

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for FixedVec<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct AssignVisitor<'v, 's, T>(&'v mut FixedVec<'s, T>);

impl<'de, T> de::Visitor<'de> for AssignVisitor<'_, '_, T>
where
    T: Deserialize<'de>,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "array or sequence with at most {} elements",
            self.0.capacity()
        )
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<(), A::Error> {
        let out = self.0;
        out.clear();
        while let Some(elem) = a.next_element::<T>()? {
            if out.try_push_back(elem).is_err() {
                let cap = out.capacity();
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {cap})"
                )));
            }
        }
        Ok(())
    }
}

impl<'de, T> de::DeserializeSeed<'de> for &mut FixedVec<'_, T>
where
    T: Deserialize<'de>,
{
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, d: D) -> Result<(), D::Error> {
        d.deserialize_seq(AssignVisitor(self))
    }
}
