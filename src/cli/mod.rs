//! The accept-all Command-Line Interface.
//!
//! This module is the main entry point for the binary: it parses arguments,
//! sets up logging, and drives the acceptance of every configured root.

use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::info;

use crate::{
    accept::SnapshotAccepter,
    cli::{args::AcceptArgs, output::StdoutSink},
    config::AcceptConfig,
    errors::print_error,
};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = AcceptArgs::parse();
    init_logger(&args);

    let config = AcceptConfig::from(args);
    let accepter = SnapshotAccepter::new(config.policy);
    let mut sink = StdoutSink::stdout();

    match accepter.accept_all(&config.roots, &mut sink) {
        Ok(summary) => info!("accepted {} snapshot(s)", summary.accepted),
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Level comes from RUST_LOG unless -v was given; the default is `warn`.
fn init_logger(args: &AcceptArgs) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = args.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
