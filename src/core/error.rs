// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for cachecodec.
//!
//! Provides error types for codec operations:
//! - Encoding a value to bytes
//! - Decoding bytes into a value
//! - Loading Protobuf descriptors
//! - Reading codec configuration

use thiserror::Error;

/// Errors that can occur during codec operations.
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// A codec could not produce bytes for its current value
    #[error("{codec} encoding error: {message}")]
    Encoding {
        /// Codec context (e.g., "protobuf")
        codec: String,
        /// Error message
        message: String,
    },

    /// A codec could not interpret the input bytes
    #[error("{codec} decoding error: {message}")]
    Decoding {
        /// Codec context (e.g., "protobuf")
        codec: String,
        /// Error message
        message: String,
    },

    /// Parse error in a descriptor set or configuration input
    #[error("Parse error in {context}: {message}")]
    Parse {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Message type not found in a descriptor pool
    #[error("Type not found: '{type_name}'")]
    TypeNotFound {
        /// Type name that was not found
        type_name: String,
    },

    /// Invalid or incomplete configuration
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Validation error message
        reason: String,
    },

    /// I/O failure while reading codec inputs
    #[error("I/O error: {0}")]
    Io(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl CodecError {
    /// Create an encoding error.
    pub fn encoding(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Encoding {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create a decoding error.
    pub fn decoding(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Decoding {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        CodecError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        CodecError::Config {
            reason: reason.into(),
        }
    }

    /// Whether this error was raised by an encode operation.
    pub fn is_encoding(&self) -> bool {
        matches!(self, CodecError::Encoding { .. })
    }

    /// Whether this error was raised by a decode operation.
    pub fn is_decoding(&self) -> bool {
        matches!(self, CodecError::Decoding { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Encoding { codec, message } | CodecError::Decoding { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            CodecError::Parse { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::TypeNotFound { type_name } => vec![("type", type_name.clone())],
            CodecError::Config { reason } => vec![("reason", reason.clone())],
            CodecError::Io(msg) | CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

/// Result type for cachecodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
