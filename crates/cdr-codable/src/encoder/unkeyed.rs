// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence container: `u32` element count followed by the elements.
//!
//! The count is not known when the sequence starts, so construction reserves
//! a zeroed 4-byte placeholder and [`UnkeyedContainer::finish`] patches it in
//! place once every element has been written:
//!
//! ```text
//! new()        [.. | 00 00 00 00 ]              placeholder at offset p
//! encode(e0)   [.. | 00 00 00 00 | e0 ]
//! encode(e1)   [.. | 00 00 00 00 | e0 | pad e1 ]
//! finish()     [.. | 02 00 00 00 | e0 | pad e1 ]  patch(p, 2)
//! ```
//!
//! Elements are aligned against the whole buffer, not against the start of
//! the sequence, so there is no fixed element stride.

use super::{checked_length, Encoder, KeyedContainer};
use crate::config::{UserInfo, LENGTH_PREFIX_WIDTH};
use crate::encode::CdrEncode;
use crate::error::{CdrError, Result};
use crate::path::{CodingKey, CodingPath};
use crate::store::{DataStore, Placeholder};

/// Writes one sequence. Finalize with [`finish`](Self::finish).
///
/// A container dropped without `finish` still patches its count. An overflow
/// on that path has no `Result` to travel through, so dropping panics.
pub struct UnkeyedContainer<'a> {
    store: &'a mut DataStore,
    coding_path: &'a CodingPath,
    user_info: &'a UserInfo,
    placeholder: Option<Placeholder>,
    count: usize,
}

impl<'a> UnkeyedContainer<'a> {
    pub(super) fn new(
        store: &'a mut DataStore,
        coding_path: &'a CodingPath,
        user_info: &'a UserInfo,
    ) -> Self {
        let placeholder = store.reserve(LENGTH_PREFIX_WIDTH);
        Self {
            store,
            coding_path,
            user_info,
            placeholder: Some(placeholder),
            count: 0,
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.coding_path
    }

    /// Elements encoded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Encode the next element through a fresh encoder on the same buffer.
    ///
    /// The element counts even when it writes no bytes.
    pub fn encode<T: CdrEncode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let path = self.coding_path.child(CodingKey::Index(self.count));
        let mut encoder = Encoder::new(&mut *self.store, path, self.user_info);
        value.encode(&mut encoder)?;
        self.count += 1;
        Ok(())
    }

    /// Absent element: no bytes, but it still counts.
    pub fn encode_nil(&mut self) -> Result<()> {
        self.count += 1;
        Ok(())
    }

    /// Not supported: encode the element through [`encode`](Self::encode).
    pub fn nested_keyed_container(&mut self) -> Result<KeyedContainer<'_>> {
        Err(self.unsupported("nested_keyed_container"))
    }

    /// Not supported: encode the element through [`encode`](Self::encode).
    pub fn nested_unkeyed_container(&mut self) -> Result<UnkeyedContainer<'_>> {
        Err(self.unsupported("nested_unkeyed_container"))
    }

    /// Not supported: CDR has no superclass encoding.
    pub fn super_encoder(&mut self) -> Result<Encoder<'_>> {
        Err(self.unsupported("super_encoder"))
    }

    /// Patch the length placeholder with the final element count.
    pub fn finish(mut self) -> Result<()> {
        self.finalize()
    }

    fn finalize(&mut self) -> Result<()> {
        let Some(placeholder) = self.placeholder.take() else {
            return Ok(());
        };
        let count = checked_length(self.count).ok_or_else(|| CdrError::CountOverflow {
            count: self.count,
            path: self.coding_path.clone(),
        })?;
        self.store.patch(placeholder, count)
    }

    fn unsupported(&self, operation: &'static str) -> CdrError {
        log::error!(
            "[cdr::seq] {} requested at {}, not supported",
            operation,
            self.coding_path
        );
        CdrError::Unsupported {
            operation,
            path: self.coding_path.clone(),
        }
    }
}

impl Drop for UnkeyedContainer<'_> {
    fn drop(&mut self) {
        if self.placeholder.is_none() {
            return;
        }
        log::debug!(
            "[cdr::seq] sequence at {} finalized on drop ({} elements)",
            self.coding_path,
            self.count
        );
        match self.finalize() {
            Ok(()) => {}
            Err(err) if std::thread::panicking() => {
                log::error!("[cdr::seq] length prefix left at zero: {}", err);
            }
            Err(err) => {
                log::error!("[cdr::seq] length prefix left at zero: {}", err);
                panic!("[cdr::seq] {err}");
            }
        }
    }
}
