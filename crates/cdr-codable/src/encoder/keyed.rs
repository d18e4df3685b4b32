// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Container for struct fields.
//!
//! CDR structs carry no field names or struct-level header: fields are
//! written back-to-back in call order, each aligned to its own width.

use super::Encoder;
use crate::config::UserInfo;
use crate::encode::CdrEncode;
use crate::error::Result;
use crate::path::{CodingKey, CodingPath};
use crate::store::DataStore;

/// Writes the fields of one struct, in the order they are encoded.
pub struct KeyedContainer<'a> {
    store: &'a mut DataStore,
    coding_path: &'a CodingPath,
    user_info: &'a UserInfo,
}

impl<'a> KeyedContainer<'a> {
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

    /// Encode one field. `key` only extends the coding path.
    pub fn encode<T: CdrEncode + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        let path = self.coding_path.child(CodingKey::Field(key));
        let mut encoder = Encoder::new(&mut *self.store, path, self.user_info);
        value.encode(&mut encoder)
    }

    /// Absent field: nothing is written.
    pub fn encode_nil(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    pub fn encode_if_present<T: CdrEncode + ?Sized>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
    ) -> Result<()> {
        match value {
            Some(value) => self.encode(key, value),
            None => self.encode_nil(key),
        }
    }
}
