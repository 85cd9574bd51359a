// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - decode a stored value and show what it holds.

use std::collections::BTreeMap;
use std::fs;

use clap::Args;
use prost_reflect::{DynamicMessage, ReflectMessage};
use serde::Serialize;

use crate::common::{build_codec, hex_preview, output_json_or, prepare_message, CodecArgs, Result};

/// Bytes shown in the human-readable hex preview.
const PREVIEW_BYTES: usize = 32;

/// Decode a value file and print a summary.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    #[command(flatten)]
    pub codec: CodecArgs,
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let config = self.codec.resolve()?;
        let data = fs::read(&self.codec.input)?;

        let mut message = prepare_message(&config)?;
        let encoded = {
            let mut codec = build_codec(&config, message.as_mut());
            codec.decode(&data)?;
            codec.encode()?
        };

        let summary = ValueSummary {
            encoding: config.encoding.to_string(),
            length: data.len(),
            hex: hex::encode(&data),
            encoded_length: encoded.len(),
            text: config
                .encoding
                .is_string()
                .then(|| String::from_utf8_lossy(&encoded).into_owned()),
            valid_utf8: config
                .encoding
                .is_string()
                .then(|| std::str::from_utf8(&encoded).is_ok()),
            message_type: message
                .as_ref()
                .map(|m| m.descriptor().full_name().to_string()),
            fields: message.as_ref().map(message_fields),
        };

        output_json_or(self.codec.json, &summary, || {
            println!("=== {} ===", self.codec.input.display());
            println!("Encoding: {}", summary.encoding);
            println!("Length: {} bytes", summary.length);
            if summary.encoded_length != summary.length {
                println!("Re-encoded length: {} bytes", summary.encoded_length);
            }
            match (&summary.text, &summary.message_type, &summary.fields) {
                (Some(text), _, _) => {
                    println!("UTF-8: {}", summary.valid_utf8.unwrap_or(false));
                    println!("Text: {text}");
                }
                (_, Some(message_type), Some(fields)) => {
                    println!("Message: {message_type}");
                    for (name, value) in fields {
                        println!("  {name}: {value}");
                    }
                }
                _ => println!("Hex: {}", hex_preview(&data, PREVIEW_BYTES)),
            }
            Ok(())
        })
    }
}

/// Render each populated field of a decoded message.
fn message_fields(message: &DynamicMessage) -> BTreeMap<String, String> {
    message
        .descriptor()
        .fields()
        .filter(|field| message.has_field(field))
        .map(|field| {
            let value = message.get_field(&field);
            (field.name().to_string(), format!("{value:?}"))
        })
        .collect()
}

#[derive(Serialize)]
struct ValueSummary {
    encoding: String,
    /// Length of the input file
    length: usize,
    /// Input bytes as stored
    hex: String,
    /// Length after decoding and re-encoding
    encoded_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_utf8: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, String>>,
}
