// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoder configuration.
//!
//! # Architecture
//!
//! - **Static**: wire constants (length prefix width, trailing alignment)
//! - **Per encoder**: [`EncoderConfig`] (byte order, buffer sizing, user info)
//!
//! # Example
//!
//! ```
//! use cdr_codable::{ByteOrder, CdrEncoder};
//!
//! let encoder = CdrEncoder::builder()
//!     .byte_order(ByteOrder::LittleEndian)
//!     .initial_capacity(256)
//!     .user_info("topic", "rt/chatter")
//!     .build();
//! assert_eq!(encoder.config().user_info().get("topic"), Some("rt/chatter"));
//! ```

use std::collections::BTreeMap;

/// Width of every sequence/string/blob length prefix.
pub const LENGTH_PREFIX_WIDTH: usize = 4;

/// Alignment the finished buffer is padded to.
pub const TRAILING_ALIGNMENT: usize = 4;

/// Default initial buffer capacity for one encode call.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Byte order primitives are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

/// Opaque key/value context passed to every encoder and container.
///
/// Carries no encoding effect; `CdrEncode` implementations may read it to
/// adapt what they write (e.g. a schema version).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    entries: BTreeMap<String, String>,
}

impl UserInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Configuration shared by every encode call of one [`CdrEncoder`](crate::CdrEncoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub(crate) byte_order: ByteOrder,
    pub(crate) initial_capacity: usize,
    pub(crate) user_info: UserInfo,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::LittleEndian,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            user_info: UserInfo::new(),
        }
    }
}

impl EncoderConfig {
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }
}

/// Builder for [`CdrEncoder`](crate::CdrEncoder).
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.config.byte_order = order;
        self
    }

    /// Capacity reserved up front for each output buffer.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    #[must_use]
    pub fn user_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.user_info.insert(key, value);
        self
    }

    pub fn build_config(self) -> EncoderConfig {
        self.config
    }

    pub fn build(self) -> crate::CdrEncoder {
        crate::CdrEncoder::with_config(self.config)
    }
}
