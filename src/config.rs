// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec selection from TOML configuration.
//!
//! ```toml
//! encoding = "protobuf"
//! max_message_size = 4194304
//! descriptor_set = "schemas/cache.bin"
//! message_type = "cache.Entry"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use prost_reflect::DynamicMessage;
use serde::{Deserialize, Serialize};

use crate::core::{CodecError, Encoding, Result};
use crate::encoding::DescriptorLoader;

/// Which codec a cache uses for its values, and how to set it up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Codec variant
    pub encoding: Encoding,
    /// Size limit for Protobuf messages; the codec default applies when unset
    pub max_message_size: Option<usize>,
    /// Path to a binary `FileDescriptorSet` holding the message schema
    pub descriptor_set: Option<PathBuf>,
    /// Fully-qualified Protobuf message name
    pub message_type: Option<String>,
}

impl CodecConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CodecError::parse("config", e.to_string()))
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            encoding = %config.encoding,
            "loaded codec config"
        );
        Ok(config)
    }

    /// Check that the settings needed by the selected encoding are present.
    pub fn validate(&self) -> Result<()> {
        if self.encoding.is_protobuf() {
            if self.descriptor_set.is_none() {
                return Err(CodecError::config(
                    "protobuf encoding requires descriptor_set",
                ));
            }
            if self.message_type.is_none() {
                return Err(CodecError::config("protobuf encoding requires message_type"));
            }
        }
        if self.max_message_size == Some(0) {
            return Err(CodecError::config("max_message_size must be positive"));
        }
        Ok(())
    }

    /// Load the configured schema into `loader` and create an empty message.
    pub fn load_message(&self, loader: &DescriptorLoader) -> Result<DynamicMessage> {
        let (Some(path), Some(type_name)) = (&self.descriptor_set, &self.message_type) else {
            return Err(CodecError::config(
                "descriptor_set and message_type are required to build a message",
            ));
        };
        let fds_bytes = fs::read(path)?;
        loader.add_file_descriptor_set(type_name, &fds_bytes)?;
        loader.new_message(type_name)
    }
}
