//! Run configuration.
//!
//! There is no configuration file; the CLI arguments are converted into an
//! `AcceptConfig`. The default roots are anchored to the directory the tool is
//! built in, the generator test project, and its sibling test suites one level
//! up. The working directory plays no part in them.

use std::path::{Path, PathBuf};

use crate::accept::FailurePolicy;

/// Directory the tool lives in.
pub const PROJECT_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Test suites next to the project directory, scanned by default.
pub const SIBLING_SUITES: [&str; 2] = ["BlazorTests", "MinimalAPITests"];

/// The project directory itself, then each sibling suite.
pub fn default_roots(project_dir: &Path) -> Vec<PathBuf> {
    let parent = project_dir.join("..");
    std::iter::once(project_dir.to_path_buf())
        .chain(SIBLING_SUITES.iter().map(|suite| parent.join(suite)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptConfig {
    pub roots: Vec<PathBuf>,
    pub policy: FailurePolicy,
}

impl AcceptConfig {
    /// Default roots for a project directory other than the built-in one.
    pub fn anchored_at(project_dir: &Path) -> Self {
        Self {
            roots: default_roots(project_dir),
            policy: FailurePolicy::FailFast,
        }
    }
}

impl Default for AcceptConfig {
    fn default() -> Self {
        Self::anchored_at(Path::new(PROJECT_DIR))
    }
}
