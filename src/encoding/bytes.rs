// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pass-through codec for raw byte values.

use crate::core::{Encoding, Result};
use crate::encoding::codec::{clone_bytes, Codec};

/// Byte buffer that encodes to itself.
///
/// Any byte sequence, including the empty one, is a valid value, so neither
/// operation can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteCodec(Vec<u8>);

impl ByteCodec {
    /// Create an empty byte codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of stored bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the stored bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Codec for ByteCodec {
    fn encode(&self) -> Result<Vec<u8>> {
        Ok(clone_bytes(&self.0))
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        self.0 = clone_bytes(data);
        Ok(())
    }

    fn encoding(&self) -> Option<Encoding> {
        Some(Encoding::Bytes)
    }
}

impl From<Vec<u8>> for ByteCodec {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for ByteCodec {
    fn from(data: &[u8]) -> Self {
        Self(clone_bytes(data))
    }
}

impl From<ByteCodec> for Vec<u8> {
    fn from(codec: ByteCodec) -> Self {
        codec.0
    }
}

impl AsRef<[u8]> for ByteCodec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
