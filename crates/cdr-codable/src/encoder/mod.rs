// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoder entry points and the container contract.
//!
//! ```text
//! CdrEncoder::encode(value)
//!   -> DataStore (one per call)
//!   -> Encoder (root, empty coding path)
//!        value.encode(&mut encoder) picks one container:
//!          SingleValueContainer  scalars, strings, blobs, nil
//!          KeyedContainer        struct fields, declaration order
//!          UnkeyedContainer      u32 count + elements
//!        nested values get a fresh Encoder re-borrowing the same DataStore
//!   -> trailing pad to 4 bytes
//! ```
//!
//! Containers only borrow the store, so a child's bytes are always complete
//! (and its length prefix patched) before the parent writes again.

mod keyed;
mod single_value;
mod unkeyed;

pub use keyed::KeyedContainer;
pub use single_value::SingleValueContainer;
pub use unkeyed::UnkeyedContainer;

use crate::config::{ByteOrder, EncoderBuilder, EncoderConfig, UserInfo, TRAILING_ALIGNMENT};
use crate::encode::CdrEncode;
use crate::error::Result;
use crate::path::CodingPath;
use crate::store::DataStore;

/// Length prefix value for `len` elements/bytes, `None` if it exceeds `u32`.
#[inline]
pub(crate) fn checked_length(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

/// Handle passed to [`CdrEncode::encode`]: one nesting level of one encode call.
///
/// Obtain exactly the container matching the value's shape and write through
/// it. All encoders of one call share the same [`DataStore`].
pub struct Encoder<'a> {
    store: &'a mut DataStore,
    coding_path: CodingPath,
    user_info: &'a UserInfo,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(
        store: &'a mut DataStore,
        coding_path: CodingPath,
        user_info: &'a UserInfo,
    ) -> Self {
        Self {
            store,
            coding_path,
            user_info,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.coding_path
    }

    /// Context from [`EncoderConfig`]; outlives this encoder's borrows.
    pub fn user_info(&self) -> &'a UserInfo {
        self.user_info
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.store.byte_order()
    }

    /// Bytes written so far by the whole encode call.
    pub fn offset(&self) -> usize {
        self.store.len()
    }

    pub fn single_value_container(&mut self) -> SingleValueContainer<'_> {
        SingleValueContainer::new(&mut *self.store, &self.coding_path, self.user_info)
    }

    pub fn keyed_container(&mut self) -> KeyedContainer<'_> {
        KeyedContainer::new(&mut *self.store, &self.coding_path, self.user_info)
    }

    /// Start a sequence. Reserves its 4-byte count immediately.
    pub fn unkeyed_container(&mut self) -> UnkeyedContainer<'_> {
        UnkeyedContainer::new(&mut *self.store, &self.coding_path, self.user_info)
    }
}

/// Top-level CDR encoder.
///
/// Cheap to clone and safe to share between threads: every
/// [`encode`](Self::encode) call allocates its own buffer.
///
/// # Example
///
/// ```
/// use cdr_codable::CdrEncoder;
///
/// let bytes = CdrEncoder::new().encode(&vec![1_i16, 2, 3])?;
/// assert_eq!(bytes, [3, 0, 0, 0, 1, 0, 2, 0, 3, 0, 0, 0]);
/// # Ok::<(), cdr_codable::CdrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CdrEncoder {
    config: EncoderConfig,
}

impl CdrEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `value` into a fresh buffer.
    ///
    /// The returned length is always a multiple of 4.
    pub fn encode<T: CdrEncode + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut store =
            DataStore::with_capacity(self.config.initial_capacity, self.config.byte_order);
        {
            let mut encoder =
                Encoder::new(&mut store, CodingPath::root(), &self.config.user_info);
            value.encode(&mut encoder)?;
        }
        let payload_len = store.len();
        store.pad_to(TRAILING_ALIGNMENT);
        log::trace!(
            "[cdr] encoded {} bytes ({} payload, {:?})",
            store.len(),
            payload_len,
            store.byte_order()
        );
        Ok(store.into_inner())
    }
}

/// Encode `value` with the default configuration (little-endian).
pub fn to_vec<T: CdrEncode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    CdrEncoder::new().encode(value)
}
