// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Coding path: where the encoder currently is inside the value graph.
//!
//! Diagnostic only. The path never influences the bytes written.

use std::fmt;

/// One step into a nested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodingKey {
    /// Named struct field.
    Field(&'static str),
    /// Position inside a sequence.
    Index(usize),
}

/// Ordered list of [`CodingKey`]s from the root value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    keys: Vec<CodingKey>,
}

impl CodingPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: CodingKey) {
        self.keys.push(key);
    }

    /// Copy of this path extended by `key`.
    pub fn child(&self, key: CodingKey) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key);
        Self { keys }
    }

    pub fn keys(&self) -> &[CodingKey] {
        &self.keys
    }

    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            return f.write_str("root");
        }
        for (i, key) in self.keys.iter().enumerate() {
            match key {
                CodingKey::Field(name) if i == 0 => f.write_str(name)?,
                CodingKey::Field(name) => write!(f, ".{}", name)?,
                CodingKey::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
