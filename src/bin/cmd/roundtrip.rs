// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Roundtrip command - check that a stored value re-encodes to the same bytes.

use std::fs;

use clap::Args;
use serde::Serialize;

use crate::common::{build_codec, hex_preview, output_json_or, prepare_message, CodecArgs, Result};

/// Decode a value file, encode it again and compare.
#[derive(Args, Clone, Debug)]
pub struct RoundtripCmd {
    #[command(flatten)]
    pub codec: CodecArgs,
}

impl RoundtripCmd {
    pub fn run(self) -> Result<()> {
        let config = self.codec.resolve()?;
        let data = fs::read(&self.codec.input)?;

        let mut message = prepare_message(&config)?;
        let mut codec = build_codec(&config, message.as_mut());
        codec.decode(&data)?;
        let encoded = codec.encode()?;

        let report = RoundtripReport {
            encoding: config.encoding.to_string(),
            input_length: data.len(),
            output_length: encoded.len(),
            identical: encoded == data,
            first_difference: first_difference(&data, &encoded),
        };

        output_json_or(self.codec.json, &report, || {
            println!("=== {} ===", self.codec.input.display());
            println!("Encoding: {}", report.encoding);
            println!(
                "Length: {} -> {} bytes",
                report.input_length, report.output_length
            );
            if report.identical {
                println!("Result: identical");
            } else {
                println!("Result: differs");
                if let Some(offset) = report.first_difference {
                    println!("First difference at byte {offset}");
                    println!("  in:  {}", hex_preview(&data[offset.min(data.len())..], 16));
                    println!(
                        "  out: {}",
                        hex_preview(&encoded[offset.min(encoded.len())..], 16)
                    );
                }
            }
            Ok(())
        })?;

        if !report.identical {
            anyhow::bail!("re-encoded value differs from input");
        }
        Ok(())
    }
}

/// Offset of the first differing byte, or `None` when equal.
fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

#[derive(Serialize)]
struct RoundtripReport {
    encoding: String,
    input_length: usize,
    output_length: usize,
    identical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_difference: Option<usize>,
}
