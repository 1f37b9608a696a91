//! errors.rs - Custom error types for the restage-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Every variant is fatal: the run stops at the first one encountered.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::TranscodeError;

/// This enum represents all possible error types in the `restage-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RestageError {
    #[error("failed to read manifest {}: {}", .0.display(), .1)]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("failed to parse manifest {}: {}", .0.display(), .1)]
    ConfigParse(PathBuf, #[source] serde_json::Error),

    #[error("invalid find pattern '{0}' in {1}: the marker must appear exactly once")]
    RuleFormat(String, String),

    #[error("unknown encoding '{0}' in entry {1}")]
    UnknownEncoding(String, String),

    #[error("failed to read target file {}: {}", .0.display(), .1)]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("failed to decode {}: {}", .0.display(), .1)]
    Decode(PathBuf, #[source] TranscodeError),

    #[error("failed to encode {}: {}", .0.display(), .1)]
    Encode(PathBuf, #[source] TranscodeError),

    #[error("failed to write target file {}: {}", .0.display(), .1)]
    FileWrite(PathBuf, #[source] std::io::Error),
}
