// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec contract integration tests.
//!
//! Tests cover:
//! - Round trips through the pass-through codecs
//! - Buffer independence for decode inputs and encode outputs
//! - Protobuf failures leaving the borrowed message untouched
//! - Using codecs behind `dyn Codec`
//! - Codecs implemented outside the crate

mod common;

use cachecodec::{ByteCodec, Codec, CodecError, Encoding, ProtoCodec, StringCodec};
use prost::Message;

use common::{sample_entry, sample_values, CacheEntry};

// ============================================================================
// Pass-through codecs
// ============================================================================

fn assert_round_trips(codec: &mut dyn Codec) {
    for value in sample_values() {
        codec.decode(&value).unwrap();
        let encoded = codec.encode().unwrap();
        assert_eq!(encoded, value, "{:?} codec changed the value", codec.encoding());

        codec.decode(&encoded).unwrap();
        assert_eq!(codec.encode().unwrap(), value);
    }
}

#[test]
fn test_byte_codec_round_trip() {
    assert_round_trips(&mut ByteCodec::new());
}

#[test]
fn test_string_codec_round_trip() {
    assert_round_trips(&mut StringCodec::new());
}

#[test]
fn test_byte_codec_scenarios() {
    let mut codec = ByteCodec::new();
    codec.decode(&[0x01, 0x02, 0x03]).unwrap();
    assert_eq!(codec.encode().unwrap(), vec![0x01, 0x02, 0x03]);

    codec.decode(&[]).unwrap();
    assert!(codec.encode().unwrap().is_empty());
}

#[test]
fn test_string_codec_hello() {
    let mut codec = StringCodec::new();
    codec.decode("hello".as_bytes()).unwrap();
    assert_eq!(codec.encode().unwrap(), "hello".as_bytes());
}

#[test]
fn test_decode_input_is_copied() {
    let codecs: Vec<Box<dyn Codec>> = vec![Box::new(ByteCodec::new()), Box::new(StringCodec::new())];
    for mut codec in codecs {
        let mut input = b"original".to_vec();
        codec.decode(&input).unwrap();
        input.iter_mut().for_each(|b| *b = b'x');
        assert_eq!(codec.encode().unwrap(), b"original");
    }
}

#[test]
fn test_encode_output_is_copied() {
    let codecs: Vec<Box<dyn Codec>> = vec![
        Box::new(ByteCodec::from(b"state".to_vec())),
        Box::new(StringCodec::from("state")),
    ];
    for codec in codecs {
        let mut out = codec.encode().unwrap();
        out.clear();
        assert_eq!(codec.encode().unwrap(), b"state");
    }
}

// ============================================================================
// Protobuf codec
// ============================================================================

#[test]
fn test_proto_round_trip() {
    let mut source = sample_entry();
    let bytes = ProtoCodec::new(&mut source).encode().unwrap();

    let mut target = CacheEntry::default();
    let mut codec = ProtoCodec::new(&mut target);
    codec.decode(&bytes).unwrap();
    assert_eq!(codec.encode().unwrap(), bytes);
    assert_eq!(target, sample_entry());
}

#[test]
fn test_proto_encode_is_deterministic() {
    let mut entry = sample_entry();
    let codec = ProtoCodec::new(&mut entry);
    assert_eq!(codec.encode().unwrap(), codec.encode().unwrap());
}

#[test]
fn test_proto_unset_encode_is_encoding_error() {
    let codec: ProtoCodec<'_, CacheEntry> = ProtoCodec::unset();
    match codec.encode() {
        Err(CodecError::Encoding { codec, .. }) => assert_eq!(codec, "protobuf"),
        other => panic!("expected encoding error, got {other:?}"),
    }
}

#[test]
fn test_proto_truncated_decode_leaves_message_unchanged() {
    let valid = sample_entry().encode_to_vec();
    let mut entry = CacheEntry {
        key: "kept".to_string(),
        hits: 1,
        payload: vec![1],
    };
    let before = entry.clone();

    {
        let mut codec = ProtoCodec::new(&mut entry);
        let encoded_before = codec.encode().unwrap();
        // Each cut ends inside a tag, a length prefix or a field body.
        for cut in [1, 2, 4, 8, 10, 12, 13, valid.len() - 1] {
            let err = codec.decode(&valid[..cut]).unwrap_err();
            assert!(err.is_decoding(), "cut at {cut} gave {err}");
            assert_eq!(codec.encode().unwrap(), encoded_before);
        }
    }

    assert_eq!(entry, before);
}

#[test]
fn test_proto_behind_dyn_codec() {
    let mut entry = sample_entry();
    let expected = entry.encode_to_vec();
    let mut codecs: Vec<Box<dyn Codec + '_>> = vec![
        Box::new(ByteCodec::new()),
        Box::new(ProtoCodec::new(&mut entry)),
    ];

    let proto = &mut codecs[1];
    assert_eq!(proto.encoding(), Some(Encoding::Protobuf));
    let bytes = proto.encode().unwrap();
    assert_eq!(bytes, expected);

    let raw = &mut codecs[0];
    raw.decode(&bytes).unwrap();
    assert_eq!(raw.encode().unwrap(), expected);
}

// ============================================================================
// Codecs implemented outside the crate
// ============================================================================

/// JSON document codec relying on the default `encoding()`.
#[derive(Default)]
struct JsonCodec(serde_json::Value);

impl Codec for JsonCodec {
    fn encode(&self) -> cachecodec::Result<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(|e| CodecError::encoding("json", e.to_string()))
    }

    fn decode(&mut self, data: &[u8]) -> cachecodec::Result<()> {
        self.0 = serde_json::from_slice(data)
            .map_err(|e| CodecError::decoding("json", e.to_string()))?;
        Ok(())
    }
}

#[test]
fn test_external_codec_behind_dyn_codec() {
    let mut codecs: Vec<Box<dyn Codec>> =
        vec![Box::new(JsonCodec::default()), Box::new(ByteCodec::new())];
    assert_eq!(codecs[0].encoding(), None);
    assert_eq!(codecs[1].encoding(), Some(Encoding::Bytes));

    let expected = serde_json::json!({ "key": "user:42", "hits": 7 });
    let json = &mut codecs[0];
    json.decode(br#"{"key":"user:42","hits":7}"#).unwrap();
    let encoded: serde_json::Value = serde_json::from_slice(&json.encode().unwrap()).unwrap();
    assert_eq!(encoded, expected);

    let err = json.decode(b"{not json").unwrap_err();
    assert!(err.is_decoding());
    let encoded: serde_json::Value = serde_json::from_slice(&json.encode().unwrap()).unwrap();
    assert_eq!(encoded, expected);
}
