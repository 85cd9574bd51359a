// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Value encoding/decoding implementations.
//!
//! This module provides the codec contract and its built-in variants:
//! - [`codec`] - The [`Codec`] trait and shared byte-copy helper
//! - [`bytes`] - Raw byte pass-through
//! - [`string`] - Text pass-through
//! - [`protobuf`] - Protobuf messages via `prost`

pub mod bytes;
pub mod codec;
pub mod protobuf;
pub mod string;

pub use bytes::ByteCodec;
pub use codec::{clone_bytes, Codec};
pub use protobuf::{DescriptorLoader, ProtoCodec, DEFAULT_MAX_MESSAGE_SIZE};
pub use string::StringCodec;
