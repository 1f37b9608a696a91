//! Configuration management for `restage-core`.
//!
//! This module defines the core data structures for the rewrite manifest.
//! It handles deserialization of the JSON manifest and provides utilities
//! for loading it from disk.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::RestageError;

/// The top-level manifest: an ordered list of file entries.
///
/// Entries are processed sequentially; the first failing entry aborts the
/// run, and entries already rewritten stay rewritten on disk.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub entries: Vec<FileEntry>,
}

/// One target file to rewrite.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Path of the target file, relative to the base path.
    pub path: String,
    /// Human-readable description. Never consulted by the engine.
    #[serde(default)]
    pub description: String,
    /// Encoding identifier (`utf8`, `euckr`, `utf16bom`). Kept as a string
    /// and resolved when the entry is processed, so a bad identifier in a
    /// later entry does not undo entries already rewritten.
    pub encoding: String,
    /// Ordered find/replace rules. Rule N+1 sees the output of rule N.
    #[serde(default)]
    pub change: Vec<Rule>,
}

/// A single find/replace rule.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Rule {
    /// Find pattern containing the `[[tochange]]` marker exactly once.
    pub find: String,
    /// Human-readable description. Never consulted by the engine.
    #[serde(default)]
    pub description: String,
    /// Replacement text per build stage. A stage absent from this map
    /// deletes the matched span instead of replacing it.
    #[serde(default)]
    pub changeto: HashMap<String, String>,
}

impl Manifest {
    /// Loads a manifest from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RestageError> {
        let path = path.as_ref();
        info!("Loading manifest from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| RestageError::ConfigRead(path.to_path_buf(), e))?;
        let manifest: Manifest = serde_json::from_str(&text)
            .map_err(|e| RestageError::ConfigParse(path.to_path_buf(), e))?;

        debug!("Loaded {} file entries.", manifest.entries.len());
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let json = r#"[
            {
                "path": "app/settings.ini",
                "description": "application settings",
                "encoding": "utf8",
                "change": [
                    {
                        "find": "VERSION=[[tochange]];",
                        "description": "release version",
                        "changeto": { "prod": "1.2.3", "dev": "0.0.0" }
                    }
                ]
            }
        ]"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.entries.len(), 1);
        let entry = &manifest.entries[0];
        assert_eq!(entry.path, "app/settings.ini");
        assert_eq!(entry.encoding, "utf8");
        assert_eq!(entry.change[0].changeto["prod"], "1.2.3");
    }

    #[test]
    fn optional_fields_default() {
        // description, change and changeto may all be omitted
        let json = r#"[ { "path": "a.txt", "encoding": "utf8" } ]"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        let entry = &manifest.entries[0];
        assert!(entry.description.is_empty());
        assert!(entry.change.is_empty());

        let json = r#"[ { "path": "a.txt", "encoding": "utf8",
                          "change": [ { "find": "K=[[tochange]]" } ] } ]"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert!(manifest.entries[0].change[0].changeto.is_empty());
    }
}
