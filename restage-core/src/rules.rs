//! rules.rs - Derives matchable anchors from the manifest's find patterns.
//!
//! A find pattern carries the `[[tochange]]` marker exactly once; splitting
//! on it yields the prefix/postfix pair the engine scans for. Compilation
//! runs before any file I/O for an entry, so a malformed pattern never
//! leaves a partially rewritten file behind.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use log::debug;

use crate::config::Rule;
use crate::errors::RestageError;

/// The literal marker splitting a find pattern into prefix and postfix.
pub const MARKER: &str = "[[tochange]]";

/// A rule with its anchors precomputed, ready for line scanning.
///
/// This is an immutable value threaded through the engine, never written
/// back into the deserialized manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    /// Literal text before the marker. May be empty (marker at pattern start).
    pub prefix: String,
    /// Literal text after the marker. May be empty (marker at pattern end).
    pub postfix: String,
    /// Replacement text per build stage.
    pub changeto: HashMap<String, String>,
}

/// Compiles an entry's rules by splitting each find pattern on [`MARKER`].
///
/// The marker must appear exactly once per pattern; zero or repeated
/// occurrences invalidate the rule and fail the entry. `entry_path` is the
/// manifest path of the entry, used only for error reporting.
pub fn compile_rules(rules: &[Rule], entry_path: &str) -> Result<Vec<CompiledRule>, RestageError> {
    let mut compiled = Vec::with_capacity(rules.len());
    for rule in rules {
        let parts: Vec<&str> = rule.find.split(MARKER).collect();
        if parts.len() != 2 {
            return Err(RestageError::RuleFormat(
                rule.find.clone(),
                entry_path.to_string(),
            ));
        }
        compiled.push(CompiledRule {
            prefix: parts[0].to_string(),
            postfix: parts[1].to_string(),
            changeto: rule.changeto.clone(),
        });
    }
    debug!("Compiled {} rules for {}.", compiled.len(), entry_path);
    Ok(compiled)
}
