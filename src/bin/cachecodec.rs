// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Cachecodec CLI
//!
//! Inspect and verify encoded cache values.
//!
//! ## Usage
//!
//! ```sh
//! # Show a raw value
//! cachecodec inspect value.bin
//!
//! # Show a text value as JSON
//! cachecodec inspect --encoding string --json value.txt
//!
//! # Decode a Protobuf value with a runtime schema
//! cachecodec inspect --encoding protobuf --descriptor-set cache.fds \
//!     --message-type cache.Entry value.pb
//!
//! # Check that a value re-encodes byte-for-byte
//! cachecodec roundtrip --config codec.toml value.pb
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{InspectCmd, RoundtripCmd};
use common::Result;

/// Cachecodec - cache value codec toolkit
#[derive(Parser, Clone)]
#[command(name = "cachecodec")]
#[command(about = "Inspect and verify encoded cache values", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode a value and show its contents
    Inspect(InspectCmd),

    /// Decode and re-encode a value, failing if the bytes change
    Roundtrip(RoundtripCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Roundtrip(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
