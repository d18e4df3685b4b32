// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for CDR encoding.
//!
//! Every failure is a programming error in the value being encoded or in the
//! way a `CdrEncode` implementation drives the containers. Nothing here is
//! retried; the first error aborts the whole encode and is returned to the
//! caller of [`CdrEncoder::encode`](crate::CdrEncoder::encode).

use crate::path::CodingPath;
use thiserror::Error;

/// Result type for CDR encoding operations.
pub type Result<T> = std::result::Result<T, CdrError>;

/// Error raised while encoding a value to CDR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CdrError {
    /// Operation the sequence container does not implement
    /// (nested containers, super-encoder delegation).
    #[error("unsupported operation `{operation}` at {path}")]
    Unsupported {
        operation: &'static str,
        path: CodingPath,
    },

    /// Sequence element count does not fit in the 4-byte length prefix.
    #[error("sequence at {path} has {count} elements, exceeds u32 length prefix")]
    CountOverflow { count: usize, path: CodingPath },

    /// String or blob byte length does not fit in the 4-byte length prefix.
    #[error("length {len} at {path} exceeds u32 length prefix")]
    LengthOverflow { len: usize, path: CodingPath },

    /// Patch targeted a region that was never reserved with that width.
    #[error("invalid placeholder: offset {offset} width {width} in buffer of {len} bytes")]
    InvalidPlaceholder {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// Rejection raised by a hand-written `CdrEncode` implementation.
    #[error("{message} (at {path})")]
    Custom { message: String, path: CodingPath },
}

impl CdrError {
    /// Build a [`CdrError::Custom`] anchored at `path`.
    pub fn custom(message: impl Into<String>, path: &CodingPath) -> Self {
        CdrError::Custom {
            message: message.into(),
            path: path.clone(),
        }
    }

    /// Coding path the error was raised at, if it carries one.
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            CdrError::Unsupported { path, .. }
            | CdrError::CountOverflow { path, .. }
            | CdrError::LengthOverflow { path, .. }
            | CdrError::Custom { path, .. } => Some(path),
            CdrError::InvalidPlaceholder { .. } => None,
        }
    }
}
