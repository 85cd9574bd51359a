// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unified codec interface for cache values.
//!
//! A [`Codec`] binds one in-memory value to one byte representation. The
//! cache layer only ever sees this trait, so any value type can be stored
//! as "a thing with bytes".
//!
//! ## Contract
//!
//! - [`Codec::encode`] produces the bytes of the current value. It takes
//!   `&self` and has no side effects.
//! - [`Codec::decode`] replaces the current value with the one represented
//!   by the input. It takes `&mut self`, so a decode can never run alongside
//!   another call on the same instance. A failed decode leaves the value
//!   untouched.
//! - Neither operation aliases the caller's buffers: decode copies its
//!   input, encode returns freshly allocated bytes.
//!
//! ## Example
//!
//! ```
//! use cachecodec::encoding::{ByteCodec, Codec, StringCodec};
//!
//! # fn main() -> cachecodec::Result<()> {
//! let mut codecs: Vec<Box<dyn Codec>> = vec![
//!     Box::new(ByteCodec::new()),
//!     Box::new(StringCodec::new()),
//! ];
//! for codec in &mut codecs {
//!     codec.decode(b"value")?;
//!     assert_eq!(codec.encode()?, b"value");
//! }
//! # Ok(())
//! # }
//! ```

use crate::core::{Encoding, Result};

// =============================================================================
// Codec Trait
// =============================================================================

/// Symmetric encode/decode contract implemented by every cache value codec.
pub trait Codec: Send + Sync {
    /// Encode the current value to bytes.
    ///
    /// Deterministic for a given value unless the underlying format is not
    /// byte-stable; variants document when that applies.
    fn encode(&self) -> Result<Vec<u8>>;

    /// Replace the current value with the one represented by `data`.
    ///
    /// On success the previous value is discarded entirely. On failure the
    /// value is unchanged.
    fn decode(&mut self, data: &[u8]) -> Result<()>;

    /// Get the built-in encoding this codec handles, if it is one.
    ///
    /// Codecs defined outside this crate keep the default of `None`.
    fn encoding(&self) -> Option<Encoding> {
        None
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn encode(&self) -> Result<Vec<u8>> {
        (**self).encode()
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        (**self).decode(data)
    }

    fn encoding(&self) -> Option<Encoding> {
        (**self).encoding()
    }
}

impl<C: Codec + ?Sized> Codec for &mut C {
    fn encode(&self) -> Result<Vec<u8>> {
        (**self).encode()
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        (**self).decode(data)
    }

    fn encoding(&self) -> Option<Encoding> {
        (**self).encoding()
    }
}

/// Copy `data` into a freshly allocated buffer.
///
/// Every decode goes through this so that codec state never shares storage
/// with the caller's input.
pub fn clone_bytes(data: &[u8]) -> Vec<u8> {
    let mut tmp = Vec::with_capacity(data.len());
    tmp.extend_from_slice(data);
    tmp
}
