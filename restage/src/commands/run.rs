//! Run command implementation: loads the manifest and rewrites every entry.

use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use restage_core::{rewrite_all, Manifest};

/// The main operation runner for the restage CLI.
///
/// Entries are processed strictly in manifest order; the first failure is
/// returned as-is (the core error messages are self-describing) and aborts
/// the remaining entries.
pub fn run_rewrite(config: &Path, stage: &str, base_path: &str) -> Result<()> {
    info!("Starting restage run for stage '{}'.", stage);
    debug!("Manifest: {}, base path: {}", config.display(), base_path);

    let manifest = Manifest::load_from_file(config)?;
    rewrite_all(&manifest, stage, base_path)?;

    info!("Rewrote {} manifest entries.", manifest.entries.len());
    Ok(())
}
