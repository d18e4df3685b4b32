// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Container contract as seen by hand-written and derived CdrEncode impls.

use cdr_codable::{ByteOrder, CdrEncode, CdrEncoder, CdrError, CodingKey, Encoder, Result};

#[derive(CdrEncode)]
struct Point(i32, i32);

#[derive(CdrEncode)]
struct Marker;

#[derive(CdrEncode, Clone, Copy)]
enum Status {
    Idle,
    Running,
    Failed,
}

#[derive(CdrEncode)]
struct Wrapper<T> {
    tag: u8,
    inner: T,
}

#[derive(CdrEncode)]
struct WithSkip {
    id: u16,
    #[cdr(skip)]
    #[allow(dead_code)]
    cache: u64,
    flag: bool,
}

#[derive(CdrEncode)]
struct WithOptional {
    before: u8,
    maybe: Option<u32>,
    after: u8,
}

#[test]
fn test_tuple_struct_fields_in_order() {
    let bytes = cdr_codable::to_vec(&Point(-1, 2)).expect("encode should succeed");
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF, 2, 0, 0, 0]);
}

#[test]
fn test_unit_struct_writes_nothing() {
    let bytes = cdr_codable::to_vec(&Marker).expect("encode should succeed");
    assert!(bytes.is_empty());
}

#[test]
fn test_enum_ordinal_as_u32() {
    let bytes = cdr_codable::to_vec(&vec![Status::Idle, Status::Failed, Status::Running])
        .expect("encode should succeed");
    assert_eq!(bytes, [3, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0]);
}

#[derive(CdrEncode, Clone, Copy)]
enum Code {
    Ok = 10,
    Fail = 20,
    Next,
}

#[derive(CdrEncode)]
#[repr(i32)]
enum Signed {
    Below = -1,
}

#[test]
fn test_enum_explicit_discriminants() {
    let bytes = cdr_codable::to_vec(&vec![Code::Ok, Code::Fail, Code::Next])
        .expect("encode should succeed");
    assert_eq!(
        bytes,
        [3, 0, 0, 0, 10, 0, 0, 0, 20, 0, 0, 0, 21, 0, 0, 0]
    );
    assert_eq!(Code::Next as u32, 21);
}

#[test]
fn test_enum_discriminant_outside_u32_is_rejected() {
    let err = cdr_codable::to_vec(&vec![Signed::Below]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Signed discriminant -1 does not fit in u32 (at [0])"
    );
}

#[test]
fn test_generic_struct() {
    let value = Wrapper {
        tag: 7,
        inner: vec![1_u64],
    };
    let bytes = cdr_codable::to_vec(&value).expect("encode should succeed");
    assert_eq!(
        bytes,
        [7, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_skipped_field_is_not_written() {
    let value = WithSkip {
        id: 0x0201,
        cache: u64::MAX,
        flag: true,
    };
    let bytes = cdr_codable::to_vec(&value).expect("encode should succeed");
    assert_eq!(bytes, [0x01, 0x02, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn test_absent_field_writes_nothing() {
    let present = WithOptional {
        before: 1,
        maybe: Some(9),
        after: 2,
    };
    let absent = WithOptional {
        before: 1,
        maybe: None,
        after: 2,
    };
    assert_eq!(
        cdr_codable::to_vec(&present).expect("encode should succeed"),
        [1, 0, 0, 0, 9, 0, 0, 0, 2, 0, 0, 0]
    );
    assert_eq!(
        cdr_codable::to_vec(&absent).expect("encode should succeed"),
        [1, 2, 0, 0]
    );
}

/// Requests a nested container from inside a sequence.
struct NestedRequest;

impl CdrEncode for NestedRequest {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut seq = encoder.unkeyed_container();
        seq.encode(&1_u8)?;
        let mut nested = seq.nested_unkeyed_container()?;
        nested.encode(&2_u8)?;
        nested.finish()?;
        seq.finish()
    }
}

#[test]
fn test_nested_container_request_aborts_encode() {
    #[derive(CdrEncode)]
    struct Holder {
        items: Vec<NestedRequest>,
    }

    let err = cdr_codable::to_vec(&Holder {
        items: vec![NestedRequest],
    })
    .unwrap_err();
    match err {
        CdrError::Unsupported { operation, path } => {
            assert_eq!(operation, "nested_unkeyed_container");
            assert_eq!(
                path.keys(),
                &[CodingKey::Field("items"), CodingKey::Index(0)]
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

/// Writes a sequence by hand, mixing present and absent elements.
struct Sparse<'a>(&'a [Option<i16>]);

impl CdrEncode for Sparse<'_> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut seq = encoder.unkeyed_container();
        for item in self.0 {
            match item {
                Some(v) => seq.encode(v)?,
                None => seq.encode_nil()?,
            }
        }
        seq.finish()
    }
}

#[test]
fn test_all_absent_sequence_keeps_true_count() {
    let items = [None; 5];
    let bytes = cdr_codable::to_vec(&Sparse(&items)).expect("encode should succeed");
    assert_eq!(bytes, [5, 0, 0, 0]);
}

#[test]
fn test_mixed_sequence_count() {
    let items = [Some(1), None, Some(2)];
    let bytes = cdr_codable::to_vec(&Sparse(&items)).expect("encode should succeed");
    assert_eq!(bytes, [3, 0, 0, 0, 1, 0, 2, 0]);
}

/// Reads the user info to pick what to write.
struct Versioned;

impl CdrEncode for Versioned {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let version = encoder.user_info().get("version").unwrap_or("1");
        let mut fields = encoder.keyed_container();
        fields.encode("id", &1_u16)?;
        if version == "2" {
            fields.encode("extra", &2_u16)?;
        }
        Ok(())
    }
}

#[test]
fn test_user_info_reaches_nested_encoders() {
    let v1 = CdrEncoder::new();
    let v2 = CdrEncoder::builder().user_info("version", "2").build();
    let value = vec![Versioned];
    assert_eq!(
        v1.encode(&value).expect("encode should succeed"),
        [1, 0, 0, 0, 1, 0, 0, 0]
    );
    assert_eq!(
        v2.encode(&value).expect("encode should succeed"),
        [1, 0, 0, 0, 1, 0, 2, 0]
    );
}

/// GIOP-style header: endianness flag byte, then a `u16` payload.
struct FlaggedHeader(u16);

impl CdrEncode for FlaggedHeader {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let flag: u8 = match encoder.byte_order() {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        };
        let mut fields = encoder.keyed_container();
        fields.encode("flag", &flag)?;
        fields.encode("payload", &self.0)
    }
}

#[test]
fn test_byte_order_visible_to_encode_impls() {
    let le = CdrEncoder::new();
    let be = CdrEncoder::builder()
        .byte_order(ByteOrder::BigEndian)
        .build();
    assert_eq!(
        le.encode(&FlaggedHeader(0x0102)).expect("encode should succeed"),
        [1, 0, 0x02, 0x01]
    );
    assert_eq!(
        be.encode(&FlaggedHeader(0x0102)).expect("encode should succeed"),
        [0, 0, 0x01, 0x02]
    );
}

/// Rejects values through a custom error.
struct NonEmpty<'a>(&'a str);

impl CdrEncode for NonEmpty<'_> {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        if self.0.is_empty() {
            return Err(CdrError::custom("must not be empty", encoder.coding_path()));
        }
        encoder.single_value_container().encode_str(self.0)
    }
}

#[test]
fn test_custom_error_surfaces_with_path() {
    #[derive(CdrEncode)]
    struct Named<'a> {
        names: Vec<NonEmpty<'a>>,
    }

    let value = Named {
        names: vec![NonEmpty("ok"), NonEmpty("")],
    };
    let err = cdr_codable::to_vec(&value).unwrap_err();
    assert_eq!(err.to_string(), "must not be empty (at names[1])");
}

#[test]
fn test_encoder_is_shareable_across_threads() {
    let encoder = std::sync::Arc::new(CdrEncoder::new());
    let handles: Vec<_> = (0..4_u32)
        .map(|i| {
            let encoder = std::sync::Arc::clone(&encoder);
            std::thread::spawn(move || encoder.encode(&vec![i; 3]).expect("encode"))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let bytes = handle.join().expect("thread should not panic");
        let v = i as u8;
        assert_eq!(bytes, [3, 0, 0, 0, v, 0, 0, 0, v, 0, 0, 0, v, 0, 0, 0]);
    }
}
