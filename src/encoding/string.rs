// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pass-through codec for text values.
//!
//! The text is kept as the exact bytes it was decoded from. No character
//! encoding is checked on decode, so a value may hold bytes that are not
//! valid UTF-8; [`StringCodec::to_str`] and [`StringCodec::to_string_lossy`]
//! are where interpretation happens.

use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

use crate::core::{Encoding, Result};
use crate::encoding::codec::{clone_bytes, Codec};

/// Byte-derived text value that encodes to its own bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringCodec(Vec<u8>);

impl StringCodec {
    /// Create an empty string codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a value from raw bytes without validation.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    /// Borrow the text's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the text as `str`, failing if the bytes are not UTF-8.
    pub fn to_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// View the text with invalid sequences replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the text's bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Codec for StringCodec {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(clone_bytes(&self.0))
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        self.0 = clone_bytes(data);
        Ok(())
    }

    fn encoding(&self) -> Option<Encoding> {
        Some(Encoding::String)
    }
}

impl From<String> for StringCodec {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for StringCodec {
    fn from(text: &str) -> Self {
        Self(clone_bytes(text.as_bytes()))
    }
}

impl fmt::Display for StringCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
