// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout cachecodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling
//! - [`Encoding`] - Codec variant identifier

pub mod error;

pub use error::{CodecError, Result};

use serde::{Deserialize, Serialize};

/// Encoding format identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Raw bytes, stored verbatim
    #[default]
    #[serde(alias = "raw")]
    Bytes,
    /// Byte-derived text, stored verbatim
    #[serde(alias = "text", alias = "str")]
    String,
    /// Protobuf binary wire format
    #[serde(alias = "proto")]
    Protobuf,
}

/// Error returned when parsing an `Encoding` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEncodingError {
    _private: (),
}

impl std::fmt::Display for ParseEncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid encoding name, expected 'bytes', 'string', or 'protobuf'"
        )
    }
}

impl std::error::Error for ParseEncodingError {}

impl std::str::FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bytes" | "raw" => Ok(Encoding::Bytes),
            "string" | "text" | "str" => Ok(Encoding::String),
            "protobuf" | "proto" => Ok(Encoding::Protobuf),
            _ => Err(ParseEncodingError { _private: () }),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Encoding {
    /// Check if this encoding is raw bytes.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Encoding::Bytes)
    }

    /// Check if this encoding is text.
    pub fn is_string(&self) -> bool {
        matches!(self, Encoding::String)
    }

    /// Check if this encoding is Protobuf.
    pub fn is_protobuf(&self) -> bool {
        matches!(self, Encoding::Protobuf)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Bytes => "bytes",
            Encoding::String => "string",
            Encoding::Protobuf => "protobuf",
        }
    }
}
