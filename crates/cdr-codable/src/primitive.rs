// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-width primitive types.
//!
//! A primitive's alignment is its own byte width (1, 2, 4 or 8).

use crate::config::ByteOrder;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width value the [`DataStore`](crate::DataStore) can write aligned.
///
/// Sealed: implemented for `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64` only.
pub trait Primitive: Copy + sealed::Sealed {
    /// Byte width, which is also the alignment.
    const WIDTH: usize;

    /// Append the value's bytes to `out` in `order`.
    fn put(self, out: &mut Vec<u8>, order: ByteOrder);

    /// Overwrite `dst[..WIDTH]` with the value's bytes in `order`.
    fn put_at(self, dst: &mut [u8], order: ByteOrder);
}

/// Generate `Primitive` impls (identical apart from type and width).
macro_rules! impl_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $type {}

            impl Primitive for $type {
                const WIDTH: usize = std::mem::size_of::<$type>();

                #[inline]
                fn put(self, out: &mut Vec<u8>, order: ByteOrder) {
                    match order {
                        ByteOrder::LittleEndian => out.extend_from_slice(&self.to_le_bytes()),
                        ByteOrder::BigEndian => out.extend_from_slice(&self.to_be_bytes()),
                    }
                }

                #[inline]
                fn put_at(self, dst: &mut [u8], order: ByteOrder) {
                    let bytes = match order {
                        ByteOrder::LittleEndian => self.to_le_bytes(),
                        ByteOrder::BigEndian => self.to_be_bytes(),
                    };
                    dst[..Self::WIDTH].copy_from_slice(&bytes);
                }
            }
        )*
    };
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as Primitive>::WIDTH, 1);
        assert_eq!(<i16 as Primitive>::WIDTH, 2);
        assert_eq!(<f32 as Primitive>::WIDTH, 4);
        assert_eq!(<u64 as Primitive>::WIDTH, 8);
        assert_eq!(<f64 as Primitive>::WIDTH, 8);
    }

    #[test]
    fn test_put_respects_byte_order() {
        let mut le = Vec::new();
        0x0102_0304_u32.put(&mut le, ByteOrder::LittleEndian);
        assert_eq!(le, [0x04, 0x03, 0x02, 0x01]);

        let mut be = Vec::new();
        0x0102_0304_u32.put(&mut be, ByteOrder::BigEndian);
        assert_eq!(be, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_put_at_overwrites_only_width() {
        let mut dst = [0xFFu8; 6];
        0x1234_u16.put_at(&mut dst[2..], ByteOrder::LittleEndian);
        assert_eq!(dst, [0xFF, 0xFF, 0x34, 0x12, 0xFF, 0xFF]);
    }

    #[test]
    fn test_float_bits() {
        let mut out = Vec::new();
        3.14_f32.put(&mut out, ByteOrder::LittleEndian);
        assert_eq!(out, [0xC3, 0xF5, 0x48, 0x40]);
    }
}
