//! The substitution engine.
//!
//! Scans lines for a compiled rule's prefix/postfix anchors and splices in
//! the active stage's replacement value, then drives the per-entry pipeline:
//! resolve transcoder, compile rules, decode, substitute, re-encode,
//! overwrite in place.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{FileEntry, Manifest};
use crate::encoding::transcoder_for;
use crate::errors::RestageError;
use crate::lines::{join_lines, split_lines};
use crate::rules::{compile_rules, CompiledRule};

/// Applies one rule to one line.
///
/// Returns the rewritten line, or `None` when the rule's anchors do not
/// qualify the line. Matching is literal and first-occurrence-only:
///
/// 1. the first occurrence of the prefix anchors the match (an empty prefix
///    matches every line at position 0);
/// 2. a non-empty postfix must occur in the remainder after the matched
///    prefix, or the line is left alone;
/// 3. the span between prefix end and postfix start is replaced by the
///    stage's value, or deleted when the stage has no value.
pub fn substitute_line(rule: &CompiledRule, stage: &str, line: &str) -> Option<String> {
    let pre = line.find(&rule.prefix)?;
    let head_end = pre + rule.prefix.len();
    let remain = &line[head_end..];

    let tail = if rule.postfix.is_empty() {
        ""
    } else {
        match remain.find(&rule.postfix) {
            Some(post) => &remain[post..],
            None => return None,
        }
    };

    let head = &line[..head_end];
    match rule.changeto.get(stage) {
        Some(value) => Some(format!("{head}{value}{tail}")),
        None => Some(format!("{head}{tail}")),
    }
}

/// Applies a sequence of compiled rules to a file's lines, in order.
///
/// Each rule rescans every line; rule N+1 sees rule N's output. Only the
/// first matching span per line per rule is replaced.
pub fn apply_rules(rules: &[CompiledRule], stage: &str, lines: &mut [String]) {
    for rule in rules {
        for line in lines.iter_mut() {
            if let Some(rewritten) = substitute_line(rule, stage, line) {
                debug!("Rewrote line '{}' -> '{}'", line, rewritten);
                *line = rewritten;
            }
        }
    }
}

/// Rewrites one manifest entry's target file in place.
///
/// The transcoder lookup and rule compilation both run before the target is
/// read, so a bad encoding identifier or find pattern never touches the file.
pub fn rewrite_file(entry: &FileEntry, stage: &str, base_path: &str) -> Result<(), RestageError> {
    let transcoder = transcoder_for(&entry.encoding).ok_or_else(|| {
        RestageError::UnknownEncoding(entry.encoding.clone(), entry.path.clone())
    })?;
    let compiled = compile_rules(&entry.change, &entry.path)?;

    let target: PathBuf = Path::new(base_path).join(&entry.path);
    let bytes = fs::read(&target).map_err(|e| RestageError::FileRead(target.clone(), e))?;
    let text = transcoder
        .decode(&bytes)
        .map_err(|e| RestageError::Decode(target.clone(), e))?;

    let mut lines = split_lines(&text);
    apply_rules(&compiled, stage, &mut lines);

    let out = transcoder
        .encode(&join_lines(&lines))
        .map_err(|e| RestageError::Encode(target.clone(), e))?;
    fs::write(&target, out).map_err(|e| RestageError::FileWrite(target, e))
}

/// Processes every manifest entry in order, stopping at the first failure.
///
/// There is no rollback: entries rewritten before a failure stay rewritten.
pub fn rewrite_all(manifest: &Manifest, stage: &str, base_path: &str) -> Result<(), RestageError> {
    for entry in &manifest.entries {
        info!("Processing {} ({})", entry.path, entry.description);
        rewrite_file(entry, stage, base_path)?;
    }
    Ok(())
}
