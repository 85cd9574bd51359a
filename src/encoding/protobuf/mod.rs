// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf codec module.
//!
//! Provides [`ProtoCodec`] over generated or dynamic messages, and
//! [`DescriptorLoader`] for building dynamic messages at runtime.

pub mod codec;
pub mod descriptor;

pub use codec::{ProtoCodec, DEFAULT_MAX_MESSAGE_SIZE};
pub use descriptor::DescriptorLoader;
