// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use prost::Message;
use prost_types::field_descriptor_proto::{Label, Type as ProtoType};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};

// ============================================================================
// Fixtures
// ============================================================================

/// Generated-style cache entry used by Protobuf tests.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CacheEntry {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(uint64, tag = "2")]
    pub hits: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

pub fn sample_entry() -> CacheEntry {
    CacheEntry {
        key: "user:42".to_string(),
        hits: 7,
        payload: b"profile".to_vec(),
    }
}

/// Byte sequences every pass-through codec must carry unchanged.
pub fn sample_values() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        b"hello".to_vec(),
        vec![0xff, 0xfe, 0x00, 0x80],
        "naïve café".as_bytes().to_vec(),
        (0..=255u8).collect(),
    ]
}

/// Descriptor set describing `cache.Entry`, matching [`CacheEntry`].
pub fn entry_descriptor_set() -> Vec<u8> {
    let field = |name: &str, number: i32, ty: ProtoType| FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    };
    let fds = FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("entry.proto".to_string()),
            package: Some("cache".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Entry".to_string()),
                field: vec![
                    field("key", 1, ProtoType::String),
                    field("hits", 2, ProtoType::Uint64),
                    field("payload", 3, ProtoType::Bytes),
                ],
                ..Default::default()
            }],
            syntax: Some("proto3".to_string()),
            ..Default::default()
        }],
    };
    fds.encode_to_vec()
}

// ============================================================================
// Temporary files
// ============================================================================

/// Get a temporary directory for test files
pub fn temp_dir(tag: &str) -> PathBuf {
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    std::env::temp_dir().join(format!(
        "cachecodec_{}_{}_{}",
        tag,
        std::process::id(),
        random
    ))
}

/// Cleanup guard for test temporary files
pub struct CleanupGuard(pub PathBuf);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Create a fresh temporary directory that is removed when the guard drops.
pub fn temp_workspace(tag: &str) -> (PathBuf, CleanupGuard) {
    let dir = temp_dir(tag);
    fs::create_dir_all(&dir).unwrap();
    (dir.clone(), CleanupGuard(dir))
}
