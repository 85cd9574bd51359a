// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod inspect;
mod roundtrip;

pub use inspect::InspectCmd;
pub use roundtrip::RoundtripCmd;
