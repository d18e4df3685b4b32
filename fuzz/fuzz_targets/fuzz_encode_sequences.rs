// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use cdr_codable::{CdrEncode, CdrEncoder, Encoder, Result};
use libfuzzer_sys::fuzz_target;

/// Interprets fuzz input as a stream of element opcodes.
struct Program<'a>(&'a [u8]);

impl CdrEncode for Program<'_> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut seq = encoder.unkeyed_container();
        let mut rest = self.0;
        while let Some((&op, tail)) = rest.split_first() {
            rest = tail;
            match op % 8 {
                0 => seq.encode(&op)?,
                1 => seq.encode(&i16::from(op))?,
                2 => seq.encode(&u32::from(op))?,
                3 => seq.encode(&f64::from(op))?,
                4 => seq.encode(&(op & 1 == 1))?,
                5 => seq.encode_nil()?,
                6 => {
                    let len = usize::from(op / 8).min(rest.len());
                    let (text, tail) = rest.split_at(len);
                    rest = tail;
                    seq.encode(&String::from_utf8_lossy(text))?;
                }
                _ => {
                    let len = usize::from(op / 8).min(rest.len());
                    let (inner, tail) = rest.split_at(len);
                    rest = tail;
                    seq.encode(&Program(inner))?;
                }
            }
        }
        seq.finish()
    }
}

fuzz_target!(|data: &[u8]| {
    let encoder = CdrEncoder::new();
    let first = encoder.encode(&Program(data)).expect("encoding never fails");
    let second = encoder.encode(&Program(data)).expect("encoding never fails");

    // Deterministic, word-padded, and the root count is a u32 prefix
    assert_eq!(first, second);
    assert_eq!(first.len() % 4, 0);
    assert!(first.len() >= 4);
});
