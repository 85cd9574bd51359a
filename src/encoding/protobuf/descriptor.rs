// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Runtime message descriptors for schema-less Protobuf values.
//!
//! Cached values whose Rust type is not known at compile time can still go
//! through [`ProtoCodec`](super::ProtoCodec): load the message schema from a
//! binary `FileDescriptorSet`, build a [`DynamicMessage`], and lend it to the
//! codec like any generated message.

use std::collections::HashMap;
use std::sync::RwLock;

use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};
use prost_types::FileDescriptorSet;

use crate::core::{CodecError, Result};

/// Loads and caches message descriptors by fully-qualified type name.
#[derive(Debug, Default)]
pub struct DescriptorLoader {
    /// Cached message descriptors indexed by type name
    descriptors: RwLock<HashMap<String, MessageDescriptor>>,
}

impl DescriptorLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the message `type_name` from a `FileDescriptorSet`.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Message type name (e.g., "cache.Entry")
    /// * `fds_bytes` - FileDescriptorSet binary data
    ///
    /// # Returns
    ///
    /// The message descriptor for the type. Loading a type that is already
    /// cached returns the cached descriptor without parsing `fds_bytes`.
    pub fn add_file_descriptor_set(
        &self,
        type_name: &str,
        fds_bytes: &[u8],
    ) -> Result<MessageDescriptor> {
        if let Some(descriptor) = self.descriptor(type_name) {
            return Ok(descriptor);
        }

        let fds = FileDescriptorSet::decode(fds_bytes).map_err(|e| {
            CodecError::parse(
                "protobuf",
                format!("Failed to decode FileDescriptorSet: {e}"),
            )
        })?;

        let pool = DescriptorPool::from_file_descriptor_set(fds).map_err(|e| {
            CodecError::parse("protobuf", format!("Failed to build descriptor pool: {e}"))
        })?;

        let descriptor = pool
            .get_message_by_name(type_name)
            .ok_or_else(|| CodecError::type_not_found(type_name))?;

        tracing::debug!(
            type_name,
            fields = descriptor.fields().count(),
            "loaded protobuf descriptor"
        );

        self.descriptors
            .write()
            .map_err(|e| CodecError::Other(format!("Descriptor write lock poisoned: {e}")))?
            .insert(type_name.to_string(), descriptor.clone());

        Ok(descriptor)
    }

    /// Get a descriptor by type name without loading.
    pub fn descriptor(&self, type_name: &str) -> Option<MessageDescriptor> {
        self.descriptors.read().ok()?.get(type_name).cloned()
    }

    /// Create an empty message of a previously loaded type.
    pub fn new_message(&self, type_name: &str) -> Result<DynamicMessage> {
        self.descriptor(type_name)
            .map(DynamicMessage::new)
            .ok_or_else(|| CodecError::type_not_found(type_name))
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
