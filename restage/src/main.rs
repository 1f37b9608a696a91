// restage/src/main.rs
//! Restage entry point.
//!
//! Parses the CLI, bootstraps logging, and dispatches to the run command.
//! Any error is reported on stderr and the process exits non-zero.

use anyhow::Result;
use clap::Parser;

use restage::cli::Cli;
use restage::commands::run;
use restage::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    run::run_rewrite(&args.config, &args.stage, &args.base_path)
}
