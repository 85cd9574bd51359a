// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Cachecodec
//!
//! Value codecs for cache and storage layers.
//!
//! A cache stores bytes; applications store typed values. This library sits
//! between them with a single contract, [`Codec`], and three built-in
//! variants:
//! - [`ByteCodec`] - raw bytes, stored verbatim
//! - [`StringCodec`] - byte-derived text, stored verbatim
//! - [`ProtoCodec`] - a borrowed Protobuf message, encoded with `prost`
//!
//! ## Architecture
//!
//! - `core/` - Error type and the [`Encoding`] identifier
//! - `encoding/` - The codec trait and its variants
//! - `config` - TOML configuration for selecting a codec
//!
//! ## Example: Protobuf values
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cachecodec::{Codec, ProtoCodec};
//!
//! #[derive(Clone, PartialEq, prost::Message)]
//! struct Session {
//!     #[prost(string, tag = "1")]
//!     user: String,
//! }
//!
//! let mut session = Session { user: "alice".into() };
//! let bytes = ProtoCodec::new(&mut session).encode()?;
//!
//! let mut restored = Session::default();
//! ProtoCodec::new(&mut restored).decode(&bytes)?;
//! assert_eq!(restored.user, "alice");
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{CodecError, Encoding, Result};

// Codec contract and variants
pub mod encoding;

pub use encoding::{ByteCodec, Codec, DescriptorLoader, ProtoCodec, StringCodec};

// Configuration
pub mod config;

pub use config::CodecConfig;
