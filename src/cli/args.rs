//! Defines the command-line arguments for accept-all.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::{accept::FailurePolicy, config::AcceptConfig};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "accept-all",
    version,
    about = "Accept all pending snapshot changes: renames *.received.txt to *.verified.txt."
)]
pub struct AcceptArgs {
    /// Directories to scan. Defaults to the project directory the tool was
    /// built in and its sibling BlazorTests and MinimalAPITests suites.
    pub roots: Vec<PathBuf>,

    /// Keep renaming after a failure and report all failures at the end.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl AcceptArgs {
    /// Log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

impl From<AcceptArgs> for AcceptConfig {
    fn from(args: AcceptArgs) -> Self {
        let mut config = AcceptConfig::default();
        if !args.roots.is_empty() {
            config.roots = args.roots;
        }
        if args.keep_going {
            config.policy = FailurePolicy::KeepGoing;
        }
        config
    }
}
