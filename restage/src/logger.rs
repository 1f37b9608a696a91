// restage/src/logger.rs
//! Logger bootstrap for the restage binary.
//!
//! Honors `RUST_LOG` unless the caller passes an explicit level override
//! (derived from `--quiet`/`--debug`).

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
