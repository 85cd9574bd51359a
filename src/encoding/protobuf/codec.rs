// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf codec that borrows a caller-owned message.
//!
//! [`ProtoCodec`] does not own the message it encodes. The caller constructs
//! the message (a `#[derive(prost::Message)]` type or a
//! [`prost_reflect::DynamicMessage`]) and lends it to the codec; the borrow
//! checker guarantees the message outlives every encode/decode call.
//!
//! Encoding is delegated to `prost`. Output is byte-stable for a given value
//! except for map fields backed by `HashMap`, whose entry order follows the
//! map's iteration order.

use prost::Message;

use crate::core::{CodecError, Encoding, Result};
use crate::encoding::codec::Codec;

/// Codec name used in errors and log events.
const CODEC_NAME: &str = "protobuf";

/// Largest message accepted by default (the Protobuf 2 GiB wire limit).
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = i32::MAX as usize;

/// Protobuf codec over a borrowed message.
///
/// A decode parses into a clone of the referenced message and swaps it in
/// only on success. The clone is cleared right away, but it is taken from the
/// current value, so each decode pays one copy of the old message on top of
/// the parse. `M: Default` is not required because
/// [`prost_reflect::DynamicMessage`] needs its descriptor to build an empty
/// value.
pub struct ProtoCodec<'a, M> {
    /// Caller-owned message, `None` while unset
    msg: Option<&'a mut M>,
    /// Upper bound on encoded and decoded sizes
    max_message_size: usize,
}

impl<'a, M> ProtoCodec<'a, M>
where
    M: Message + Clone,
{
    /// Create a codec over `msg`.
    pub fn new(msg: &'a mut M) -> Self {
        Self {
            msg: Some(msg),
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Create a codec with no message. Every operation fails until
    /// [`set_message`](Self::set_message) is called.
    pub fn unset() -> Self {
        Self {
            msg: None,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Limit the size of messages this codec will encode or decode.
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    pub fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    /// Point the codec at a different message.
    pub fn set_message(&mut self, msg: &'a mut M) {
        self.msg = Some(msg);
    }

    /// Release the current message, leaving the codec unset.
    pub fn take_message(&mut self) -> Option<&'a mut M> {
        self.msg.take()
    }

    /// Whether a message is currently referenced.
    pub fn is_set(&self) -> bool {
        self.msg.is_some()
    }

    /// Borrow the referenced message.
    pub fn message(&self) -> Option<&M> {
        self.msg.as_deref()
    }

    /// Mutably borrow the referenced message.
    pub fn message_mut(&mut self) -> Option<&mut M> {
        self.msg.as_deref_mut()
    }

    /// Give the borrow back to the caller.
    pub fn into_inner(self) -> Option<&'a mut M> {
        self.msg
    }

    fn fail(err: CodecError) -> CodecError {
        tracing::debug!(
            codec = CODEC_NAME,
            fields = ?err.log_fields(),
            "protobuf codec operation failed"
        );
        err
    }
}

impl<M> Default for ProtoCodec<'_, M>
where
    M: Message + Clone,
{
    fn default() -> Self {
        Self::unset()
    }
}

impl<M> std::fmt::Debug for ProtoCodec<'_, M>
where
    M: Message,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtoCodec")
            .field("msg", &self.msg)
            .field("max_message_size", &self.max_message_size)
            .finish()
    }
}

impl<M> Codec for ProtoCodec<'_, M>
where
    M: Message + Clone,
{
    fn encode(&self) -> Result<Vec<u8>> {
        let msg = self
            .msg
            .as_deref()
            .ok_or_else(|| Self::fail(CodecError::encoding(CODEC_NAME, "message is not set")))?;

        let len = msg.encoded_len();
        if len > self.max_message_size {
            tracing::warn!(
                codec = CODEC_NAME,
                len,
                limit = self.max_message_size,
                "refusing to encode oversized message"
            );
            return Err(CodecError::encoding(
                CODEC_NAME,
                format!(
                    "encoded length {len} exceeds limit of {} bytes",
                    self.max_message_size
                ),
            ));
        }

        let mut buf = Vec::with_capacity(len);
        msg.encode(&mut buf)
            .map_err(|e| Self::fail(CodecError::encoding(CODEC_NAME, e.to_string())))?;
        Ok(buf)
    }

    fn decode(&mut self, data: &[u8]) -> Result<()> {
        let limit = self.max_message_size;
        let msg = self
            .msg
            .as_deref_mut()
            .ok_or_else(|| Self::fail(CodecError::decoding(CODEC_NAME, "message is not set")))?;

        if data.len() > limit {
            tracing::warn!(
                codec = CODEC_NAME,
                len = data.len(),
                limit,
                "refusing to decode oversized message"
            );
            return Err(CodecError::decoding(
                CODEC_NAME,
                format!(
                    "input length {} exceeds limit of {limit} bytes",
                    data.len()
                ),
            ));
        }

        // Decode into a cleared copy so a failure leaves the caller's message intact.
        // Cloning keeps the descriptor of dynamic messages.
        let mut fresh = msg.clone();
        fresh.clear();
        fresh
            .merge(data)
            .map_err(|e| Self::fail(CodecError::decoding(CODEC_NAME, e.to_string())))?;
        *msg = fresh;
        Ok(())
    }

    fn encoding(&self) -> Option<Encoding> {
        Some(Encoding::Protobuf)
    }
}
