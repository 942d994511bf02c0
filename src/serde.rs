// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence; the container grows as needed.
//!
//! Capacity is not part of the serialized form. A deserialized container
//! starts at the sequence's size hint, bounded below by [`DEFAULT_CAPACITY`]
//! and above by a fixed preallocation limit, then grows by doubling.

// Crate imports
use crate::vec::{DEFAULT_CAPACITY, DynamicArray};

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

// Size hints come from the input and are not trusted beyond this.
const MAX_PREALLOCATED: usize = 1 << 12;

struct ArrayVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity = a
            .size_hint()
            .unwrap_or(0)
            .clamp(DEFAULT_CAPACITY, MAX_PREALLOCATED);
        let mut out =
            DynamicArray::with_capacity(capacity).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynamicArray;
    use alloc::vec::Vec;

    #[test]
    fn test_serde_roundtrip_json() {
        let a: DynamicArray<i32> = [1, 2, 3].into_iter().collect();
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: DynamicArray<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let a: DynamicArray<i32> = DynamicArray::new();
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[]");
        let back: DynamicArray<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.capacity(), 10);
    }

    #[test]
    fn test_deserialize_grows_past_default_capacity() {
        let json = serde_json::to_string(&(0..30).collect::<Vec<i32>>()).unwrap();
        let a: DynamicArray<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(a.len(), 30);
        assert_eq!(a.get(29), Ok(&29));
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<DynamicArray<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence"),
            "unexpected error message: {msg}"
        );
    }
}
