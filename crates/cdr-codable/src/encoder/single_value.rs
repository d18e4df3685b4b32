// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Container for one scalar, string, blob or absent value.

use super::{checked_length, Encoder};
use crate::config::UserInfo;
use crate::encode::CdrEncode;
use crate::error::{CdrError, Result};
use crate::path::CodingPath;
use crate::primitive::Primitive;
use crate::store::DataStore;

/// Generate `encode_<type>` methods for the fixed-width primitives.
macro_rules! impl_encode_primitive {
    ($($name:ident => $type:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&mut self, value: $type) -> Result<()> {
                self.encode_primitive(value)
            }
        )*
    };
}

/// Writes exactly one value at the current position.
pub struct SingleValueContainer<'a> {
    store: &'a mut DataStore,
    coding_path: &'a CodingPath,
    user_info: &'a UserInfo,
}

impl<'a> SingleValueContainer<'a> {
    pub(super) fn new(
        store: &'a mut DataStore,
        coding_path: &'a CodingPath,
        user_info: &'a UserInfo,
    ) -> Self {
        Self {
            store,
            coding_path,
            user_info,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.coding_path
    }

    /// Absent value: CDR has no null marker, nothing is written.
    pub fn encode_nil(&mut self) -> Result<()> {
        Ok(())
    }

    /// Booleans are written as a 4-byte unsigned 0 or 1.
    pub fn encode_bool(&mut self, value: bool) -> Result<()> {
        self.store.write(u32::from(value));
        Ok(())
    }

    #[inline]
    pub fn encode_primitive<P: Primitive>(&mut self, value: P) -> Result<()> {
        self.store.write(value);
        Ok(())
    }

    impl_encode_primitive!(
        encode_u8 => u8,
        encode_i8 => i8,
        encode_u16 => u16,
        encode_i16 => i16,
        encode_u32 => u32,
        encode_i32 => i32,
        encode_u64 => u64,
        encode_i64 => i64,
        encode_f32 => f32,
        encode_f64 => f64,
    );

    /// `u32` length (UTF-8 bytes + 1), the bytes, then a NUL terminator.
    pub fn encode_str(&mut self, value: &str) -> Result<()> {
        let len = value
            .len()
            .checked_add(1)
            .and_then(checked_length)
            .ok_or_else(|| CdrError::LengthOverflow {
                len: value.len(),
                path: self.coding_path.clone(),
            })?;
        self.store.write(len);
        self.store.write_raw(value.as_bytes(), 1);
        self.store.push(0);
        Ok(())
    }

    /// Opaque blob: `u32` byte count, then the bytes verbatim.
    pub fn encode_bytes(&mut self, value: &[u8]) -> Result<()> {
        let len = checked_length(value.len()).ok_or_else(|| CdrError::LengthOverflow {
            len: value.len(),
            path: self.coding_path.clone(),
        })?;
        self.store.write(len);
        self.store.write_raw(value, 1);
        Ok(())
    }

    /// Hand the position to another `CdrEncode` value (same coding path).
    pub fn encode<T: CdrEncode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let mut encoder =
            Encoder::new(&mut *self.store, self.coding_path.clone(), self.user_info);
        value.encode(&mut encoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ByteOrder;

    fn with_container(f: impl FnOnce(&mut SingleValueContainer<'_>) -> Result<()>) -> Vec<u8> {
        let mut store = DataStore::new(ByteOrder::LittleEndian);
        let path = CodingPath::root();
        let info = UserInfo::new();
        let mut container = SingleValueContainer::new(&mut store, &path, &info);
        f(&mut container).expect("single value encode should succeed");
        store.into_inner()
    }

    #[test]
    fn test_encode_bool_is_four_bytes() {
        assert_eq!(with_container(|c| c.encode_bool(false)), [0, 0, 0, 0]);
        assert_eq!(with_container(|c| c.encode_bool(true)), [1, 0, 0, 0]);
    }

    #[test]
    fn test_encode_nil_writes_nothing() {
        assert!(with_container(|c| c.encode_nil()).is_empty());
    }

    #[test]
    fn test_encode_str_has_terminator_no_padding() {
        let bytes = with_container(|c| c.encode_str("hello"));
        assert_eq!(bytes, [6, 0, 0, 0, b'h', b'e', b'l', b'l', b'o', 0]);
    }

    #[test]
    fn test_encode_empty_str() {
        assert_eq!(with_container(|c| c.encode_str("")), [1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_str_utf8_byte_count() {
        let bytes = with_container(|c| c.encode_str("é"));
        assert_eq!(bytes, [3, 0, 0, 0, 0xC3, 0xA9, 0]);
    }

    #[test]
    fn test_encode_bytes_no_terminator() {
        let bytes = with_container(|c| c.encode_bytes(b"hello"));
        assert_eq!(bytes, [5, 0, 0, 0, b'h', b'e', b'l', b'l', b'o']);
    }

    #[test]
    fn test_length_prefix_is_aligned() {
        let bytes = with_container(|c| {
            c.encode_u8(0xEE)?;
            c.encode_bytes(&[0xAB])
        });
        assert_eq!(bytes, [0xEE, 0, 0, 0, 1, 0, 0, 0, 0xAB]);
    }

    #[test]
    fn test_encode_primitives() {
        assert_eq!(with_container(|c| c.encode_i32(42)), [0x2A, 0, 0, 0]);
        assert_eq!(with_container(|c| c.encode_u32(128)), [0x80, 0, 0, 0]);
        assert_eq!(
            with_container(|c| c.encode_f64(3.14159)),
            [0x6E, 0x86, 0x1B, 0xF0, 0xF9, 0x21, 0x09, 0x40]
        );
        assert_eq!(with_container(|c| c.encode_i8(-1)), [0xFF]);
    }

    #[test]
    fn test_encode_delegates_to_value() {
        let bytes = with_container(|c| c.encode(&7_u16));
        assert_eq!(bytes, [7, 0]);
    }
}
