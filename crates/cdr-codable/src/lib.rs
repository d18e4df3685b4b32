// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # cdr-codable - CDR encoder for typed Rust values
//!
//! Serializes primitives, strings, byte blobs, sequences and nested structs
//! into the Common Data Representation (CDR) used by DDS/RTPS and CORBA
//! middleware, byte-exact and alignment-correct.
//!
//! ## Quick Start
//!
//! ```rust
//! use cdr_codable::CdrEncode;
//!
//! #[derive(CdrEncode)]
//! struct Sample {
//!     a: i8,
//!     b: i16,
//!     c: i16,
//!     d: i32,
//!     e: i64,
//! }
//!
//! let bytes = cdr_codable::to_vec(&Sample { a: 1, b: 2, c: 3, d: 4, e: 5 })?;
//! assert_eq!(
//!     bytes,
//!     [1, 0, 2, 0, 3, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0]
//! );
//! # Ok::<(), cdr_codable::CdrError>(())
//! ```
//!
//! ## Wire Format
//!
//! | Value | Encoding |
//! |-------|----------|
//! | `bool` | 4-byte unsigned 0/1 |
//! | integers, floats | aligned to their own width, little-endian by default |
//! | string | `u32` (bytes + 1), UTF-8 bytes, NUL |
//! | [`Blob`] | `u32` byte count, bytes |
//! | sequence / array | `u32` element count, elements |
//! | struct | fields in declaration order, each aligned to its own width |
//!
//! Alignment is relative to the start of the buffer. The finished buffer is
//! padded with zeros to a multiple of 4 bytes.
//!
//! Booleans as 4 bytes and the trailing pad differ from textbook CDR; they
//! are kept for compatibility with existing consumers of this format.
//!
//! ## Modules Overview
//!
//! - [`store`] - output buffer and alignment-aware writer
//! - [`encoder`] - `Encoder`, the three containers, `CdrEncoder`
//! - [`encode`] - `CdrEncode` trait and std impls
//! - [`config`] - byte order, user info, builder

// Allow the derive macro to work inside this crate's tests
extern crate self as cdr_codable;

/// Encoder configuration (byte order, buffer sizing, user info).
pub mod config;
/// `CdrEncode` trait and implementations for standard types.
pub mod encode;
/// Top-level encoder and the single-value/keyed/unkeyed containers.
pub mod encoder;
/// Error type and `Result` alias.
pub mod error;
/// Coding path used in diagnostics.
pub mod path;
/// Fixed-width primitive types.
pub mod primitive;
/// Output buffer and alignment helpers.
pub mod store;

pub use config::{ByteOrder, EncoderBuilder, EncoderConfig, UserInfo};
pub use encode::{Blob, CdrEncode};
pub use encoder::{
    to_vec, CdrEncoder, Encoder, KeyedContainer, SingleValueContainer, UnkeyedContainer,
};
pub use error::{CdrError, Result};
pub use path::{CodingKey, CodingPath};
pub use primitive::Primitive;
pub use store::{align_offset, padding_for_alignment, DataStore, Placeholder};

/// `#[derive(CdrEncode)]` for structs and field-less enums.
#[cfg(feature = "derive")]
pub use cdr_codable_derive::CdrEncode;
