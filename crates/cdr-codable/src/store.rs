// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Output buffer and the alignment-aware writer.
//!
//! One [`DataStore`] exists per top-level encode call. Every encoder and
//! container created while walking the value borrows it mutably, so nested
//! writes always land after everything written before them.
//!
//! Bytes are only appended, or overwritten inside a range previously handed
//! out by [`DataStore::reserve`]. Nothing is ever removed or inserted.

use crate::config::ByteOrder;
use crate::error::{CdrError, Result};
use crate::primitive::Primitive;

/// Align offset up to the next multiple of `alignment`.
pub const fn align_offset(offset: usize, alignment: usize) -> usize {
    offset + padding_for_alignment(offset, alignment)
}

/// Zero bytes needed before `offset` reaches a multiple of `alignment`.
///
/// `(w - offset mod w) mod w`; widths 0 and 1 never pad.
pub const fn padding_for_alignment(offset: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return 0;
    }
    (alignment - offset % alignment) % alignment
}

/// Region reserved by [`DataStore::reserve`], patched exactly once.
///
/// Not `Clone`: [`DataStore::patch`] consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a reserved region stays zero unless it is patched"]
pub struct Placeholder {
    offset: usize,
    width: usize,
}

impl Placeholder {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Append-only byte buffer with an implicit cursor at its end.
///
/// One store per encode call, never copied:
///
/// ```compile_fail
/// use cdr_codable::{ByteOrder, DataStore};
///
/// let store = DataStore::new(ByteOrder::LittleEndian);
/// let copy = store.clone();
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DataStore {
    data: Vec<u8>,
    byte_order: ByteOrder,
}

impl DataStore {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            data: Vec::new(),
            byte_order,
        }
    }

    pub fn with_capacity(capacity: usize, byte_order: ByteOrder) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            byte_order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Current write offset.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Append zero padding until the length is a multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) {
        let pad = padding_for_alignment(self.data.len(), alignment);
        if pad > 0 {
            self.data.resize(self.data.len() + pad, 0);
        }
    }

    /// Write a primitive at an offset aligned to its own width.
    #[inline]
    pub fn write<P: Primitive>(&mut self, value: P) {
        self.align(P::WIDTH);
        value.put(&mut self.data, self.byte_order);
    }

    /// Align to `alignment`, then append `bytes` verbatim.
    pub fn write_raw(&mut self, bytes: &[u8], alignment: usize) {
        self.align(alignment);
        self.data.extend_from_slice(bytes);
    }

    /// Append a single byte with no alignment.
    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Align to `width` and append `width` zero bytes to be patched later.
    pub fn reserve(&mut self, width: usize) -> Placeholder {
        self.align(width);
        let offset = self.data.len();
        self.data.resize(offset + width, 0);
        Placeholder { offset, width }
    }

    /// Overwrite a reserved region in place. No other byte moves.
    pub fn patch<P: Primitive>(&mut self, placeholder: Placeholder, value: P) -> Result<()> {
        let Placeholder { offset, width } = placeholder;
        let end = offset.checked_add(width);
        if width != P::WIDTH || end.map_or(true, |end| end > self.data.len()) {
            return Err(CdrError::InvalidPlaceholder {
                offset,
                width: P::WIDTH,
                len: self.data.len(),
            });
        }
        value.put_at(&mut self.data[offset..offset + width], self.byte_order);
        Ok(())
    }

    /// Trailing padding applied once, at the end of a top-level encode.
    pub fn pad_to(&mut self, alignment: usize) {
        self.align(alignment);
    }
}
