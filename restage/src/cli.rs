// restage/src/cli.rs
//! This file defines the command-line interface (CLI) for the restage
//! application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "restage",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite configuration files for a target build stage",
    long_about = "Restage reads a JSON manifest describing a set of target files, each with a \
character encoding and a list of find/replace rules keyed by build stage, and rewrites the \
matching lines in place. Files are processed in manifest order; the first error stops the run."
)]
pub struct Cli {
    /// Path to the JSON manifest describing the files to rewrite.
    #[arg(value_name = "CONFIG", help = "Path to the JSON manifest.")]
    pub config: PathBuf,

    /// The build stage whose replacement values apply for this run.
    #[arg(value_name = "STAGE", help = "Build stage to apply (matched literally against changeto keys).")]
    pub stage: String,

    /// Directory prefix prepended to every entry path in the manifest.
    #[arg(value_name = "BASE_PATH", default_value = "./", help = "Base directory prepended to every entry path.")]
    pub base_path: String,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
