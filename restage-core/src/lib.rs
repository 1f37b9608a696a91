// restage-core/src/lib.rs
//! # Restage Core Library
//!
//! `restage-core` provides the platform-independent logic for stage-driven
//! file rewriting. It defines the manifest data model, a closed set of
//! encoding transcoders, rule compilation, and the line substitution engine
//! that splices stage-specific values into marked spans.
//!
//! A run is fully sequential and synchronous: each manifest entry is read,
//! decoded, rewritten line by line, re-encoded, and written back before the
//! next entry begins. The first error aborts the run; entries already
//! rewritten stay rewritten.
//!
//! ## Modules
//!
//! * `config`: Defines the `Manifest`, `FileEntry` and `Rule` structures and JSON loading.
//! * `encoding`: The `Transcoder` trait and the utf8/euckr/utf16bom implementations.
//! * `lines`: Line splitting/joining with global CRLF normalization.
//! * `rules`: Compiles find patterns into prefix/postfix anchor pairs.
//! * `engine`: The substitution scan and the per-entry rewrite pipeline.
//! * `errors`: The `RestageError` enum covering every failure class.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use restage_core::{compile_rules, Rule};
//! use restage_core::engine::apply_rules;
//!
//! fn main() -> Result<(), restage_core::RestageError> {
//!     let rule = Rule {
//!         find: "VERSION=[[tochange]];".to_string(),
//!         description: String::new(),
//!         changeto: HashMap::from([("prod".to_string(), "1.2.3".to_string())]),
//!     };
//!     let compiled = compile_rules(&[rule], "app.cfg")?;
//!
//!     let mut lines = vec!["VERSION=devbuild;extra".to_string()];
//!     apply_rules(&compiled, "prod", &mut lines);
//!     assert_eq!(lines[0], "VERSION=1.2.3;extra");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`RestageError`], a `thiserror`-derived enum
//! with one variant per failure class (manifest read/parse, rule format,
//! unknown encoding, target read, decode, encode, target write). Every
//! variant is fatal; nothing is retried.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod encoding;
pub mod engine;
pub mod errors;
pub mod lines;
pub mod rules;

/// Re-exports the manifest data model.
pub use config::{FileEntry, Manifest, Rule};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RestageError;

/// Re-exports the transcoder capability and its lookup.
pub use encoding::{transcoder_for, TranscodeError, Transcoder};

/// Re-exports rule compilation and its output.
pub use rules::{compile_rules, CompiledRule, MARKER};

/// Re-exports the engine entry points for single-entry and whole-manifest runs.
pub use engine::{rewrite_all, rewrite_file};
