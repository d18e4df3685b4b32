// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `CdrEncode` trait and implementations for standard types.
//!
//! | Rust type | Container | Wire form |
//! |-----------|-----------|-----------|
//! | `bool` | single value | `u32` 0/1 |
//! | `u8`..`i64`, `f32`, `f64` | single value | aligned to own width |
//! | `str`, `String` | single value | `u32` len+1, bytes, NUL |
//! | [`Blob`] | single value | `u32` len, bytes |
//! | `[T]`, `Vec<T>`, `[T; N]` | unkeyed | `u32` count, elements |
//! | `Option<T>` | single value | nothing when `None` |
//!
//! Structs get their implementation from `#[derive(CdrEncode)]` or by hand
//! through [`Encoder::keyed_container`].

use crate::encoder::Encoder;
use crate::error::Result;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that knows which container it needs and what to write into it.
///
/// # Example
///
/// ```
/// use cdr_codable::{CdrEncode, Encoder, Result};
///
/// struct Header {
///     stamp: i32,
///     frame_id: String,
/// }
///
/// impl CdrEncode for Header {
///     fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
///         let mut fields = encoder.keyed_container();
///         fields.encode("stamp", &self.stamp)?;
///         fields.encode("frame_id", &self.frame_id)
///     }
/// }
///
/// let bytes = cdr_codable::to_vec(&Header { stamp: 1, frame_id: "map".into() })?;
/// assert_eq!(bytes, [1, 0, 0, 0, 4, 0, 0, 0, b'm', b'a', b'p', 0]);
/// # Ok::<(), cdr_codable::CdrError>(())
/// ```
pub trait CdrEncode {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()>;
}

/// Generate `CdrEncode` for fixed-width primitives.
macro_rules! impl_encode_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl CdrEncode for $type {
                #[inline]
                fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
                    encoder.single_value_container().encode_primitive(*self)
                }
            }
        )*
    };
}

impl_encode_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl CdrEncode for bool {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_bool(*self)
    }
}

impl CdrEncode for str {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_str(self)
    }
}

impl CdrEncode for String {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_str().encode(encoder)
    }
}

impl<T: CdrEncode> CdrEncode for [T] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut seq = encoder.unkeyed_container();
        for item in self {
            seq.encode(item)?;
        }
        seq.finish()
    }
}

impl<T: CdrEncode> CdrEncode for Vec<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: CdrEncode, const N: usize> CdrEncode for [T; N] {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_slice().encode(encoder)
    }
}

impl<T: CdrEncode> CdrEncode for Option<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        match self {
            Some(value) => value.encode(encoder),
            None => encoder.single_value_container().encode_nil(),
        }
    }
}

impl<T: CdrEncode + ?Sized> CdrEncode for &T {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: CdrEncode + ?Sized> CdrEncode for Box<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: CdrEncode + ?Sized> CdrEncode for Rc<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T: CdrEncode + ?Sized> CdrEncode for Arc<T> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        (**self).encode(encoder)
    }
}

impl<T> CdrEncode for Cow<'_, T>
where
    T: CdrEncode + ToOwned + ?Sized,
{
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        self.as_ref().encode(encoder)
    }
}

/// Opaque byte blob: `u32` byte count followed by the raw bytes.
///
/// Unlike a string there is no terminator. `Blob(vec)` and `Blob(&slice[..])`
/// both work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Blob<B>(pub B);

impl<B: AsRef<[u8]>> CdrEncode for Blob<B> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.single_value_container().encode_bytes(self.0.as_ref())
    }
}
