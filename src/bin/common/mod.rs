// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::PathBuf;

use clap::Args;
use prost_reflect::DynamicMessage;
use serde::Serialize;

use cachecodec::{
    ByteCodec, Codec, CodecConfig, DescriptorLoader, Encoding, ProtoCodec, StringCodec,
};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Codec selection shared by every command.
#[derive(Args, Clone, Debug)]
pub struct CodecArgs {
    /// Encoded value file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Codec to use: bytes, string or protobuf
    #[arg(short, long)]
    pub encoding: Option<Encoding>,

    /// TOML codec configuration; flags override its values
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Binary FileDescriptorSet with the message schema
    #[arg(long, value_name = "FDS")]
    pub descriptor_set: Option<PathBuf>,

    /// Fully-qualified Protobuf message name
    #[arg(long, value_name = "TYPE")]
    pub message_type: Option<String>,

    /// Reject Protobuf messages larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_message_size: Option<usize>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl CodecArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => CodecConfig::load(path)?,
            None => CodecConfig::default(),
        };
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        if let Some(path) = &self.descriptor_set {
            config.descriptor_set = Some(path.clone());
        }
        if let Some(type_name) = &self.message_type {
            config.message_type = Some(type_name.clone());
        }
        if let Some(limit) = self.max_message_size {
            config.max_message_size = Some(limit);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Create the empty message a Protobuf codec will decode into.
pub fn prepare_message(config: &CodecConfig) -> Result<Option<DynamicMessage>> {
    if !config.encoding.is_protobuf() {
        return Ok(None);
    }
    let loader = DescriptorLoader::new();
    Ok(Some(config.load_message(&loader)?))
}

/// Build the configured codec, lending it `message` for Protobuf.
pub fn build_codec<'a>(
    config: &CodecConfig,
    message: Option<&'a mut DynamicMessage>,
) -> Box<dyn Codec + 'a> {
    match config.encoding {
        Encoding::Bytes => Box::new(ByteCodec::new()),
        Encoding::String => Box::new(StringCodec::new()),
        Encoding::Protobuf => {
            let mut codec = ProtoCodec::unset();
            if let Some(message) = message {
                codec.set_message(message);
            }
            if let Some(limit) = config.max_message_size {
                codec = codec.with_max_message_size(limit);
            }
            Box::new(codec)
        }
    }
}

/// Hex rendering of at most `limit` leading bytes.
pub fn hex_preview(data: &[u8], limit: usize) -> String {
    if data.len() <= limit {
        hex::encode(data)
    } else {
        format!("{}... ({} more bytes)", hex::encode(&data[..limit]), data.len() - limit)
    }
}

pub fn output_json_or<T>(
    json: bool,
    value: &T,
    human_fn: impl FnOnce() -> std::io::Result<()>,
) -> Result<()>
where
    T: Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human_fn()?;
    }
    Ok(())
}
