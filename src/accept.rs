//! Promotes received snapshots to verified baselines.
//!
//! A root is processed in two phases: discovery collects every
//! `*.received.txt` beneath it, then each one is renamed over its
//! `*.verified.txt` sibling with `std::fs::rename`, which replaces an existing
//! target. One rename is attempted per file; nothing is retried.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    discovery::{ReceivedSnapshot, SnapshotDiscoverer},
    AcceptError,
};

/// Receives one notification per accepted snapshot.
pub trait AcceptSink {
    fn accepted(&mut self, base_name: &str);
}

/// What happens when a single file cannot be accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure.
    #[default]
    FailFast,
    /// Log the failure, keep processing, and report everything at the end.
    KeepGoing,
}

/// Tally of an acceptance run.
#[derive(Debug, Default)]
pub struct AcceptSummary {
    pub accepted: usize,
    pub failures: Vec<AcceptError>,
}

impl AcceptSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn absorb(&mut self, other: AcceptSummary) {
        self.accepted += other.accepted;
        self.failures.extend(other.failures);
    }

    /// Turns collected failures into a single `Partial` error.
    pub fn into_result(self) -> Result<Self, AcceptError> {
        if self.is_clean() {
            return Ok(self);
        }
        Err(AcceptError::Partial {
            accepted: self.accepted,
            failures: self.failures,
        })
    }
}

#[derive(Debug, Default)]
pub struct SnapshotAccepter {
    policy: FailurePolicy,
}

impl SnapshotAccepter {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Accepts every received snapshot under `root`.
    ///
    /// Under `FailFast` the first walk or rename error aborts. Under
    /// `KeepGoing` both land in the returned summary and every reachable
    /// snapshot is still attempted.
    pub fn accept<P: AsRef<Path>>(
        &self,
        root: P,
        sink: &mut dyn AcceptSink,
    ) -> Result<AcceptSummary, AcceptError> {
        let root = root.as_ref();
        info!("scanning {}", root.display());

        let found = SnapshotDiscoverer::discover(root, self.policy)?;
        let mut summary = AcceptSummary {
            accepted: 0,
            failures: found.failures,
        };

        for snapshot in &found.snapshots {
            match accept_snapshot(snapshot) {
                Ok(()) => {
                    summary.accepted += 1;
                    sink.accepted(snapshot.base_name());
                }
                Err(e) if self.policy == FailurePolicy::KeepGoing => {
                    warn!("{e}");
                    summary.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "{}: {} accepted, {} failed",
            root.display(),
            summary.accepted,
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Accepts each root in order.
    ///
    /// Under `KeepGoing` failures in one root never stop the next. Any
    /// recorded failure turns the whole run into `AcceptError::Partial`.
    pub fn accept_all(
        &self,
        roots: &[PathBuf],
        sink: &mut dyn AcceptSink,
    ) -> Result<AcceptSummary, AcceptError> {
        let mut total = AcceptSummary::default();
        for root in roots {
            match self.accept(root, sink) {
                Ok(summary) => total.absorb(summary),
                Err(e) if self.policy == FailurePolicy::KeepGoing => {
                    warn!("{e}");
                    total.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }
        total.into_result()
    }
}

/// Renames one received snapshot over its verified baseline.
pub fn accept_snapshot(snapshot: &ReceivedSnapshot) -> Result<(), AcceptError> {
    let from = snapshot.received_path();
    let to = snapshot.verified_path();
    debug!("renaming {} -> {}", from.display(), to.display());
    fs::rename(&from, &to).map_err(|source| AcceptError::Rename { from, to, source })
}

/// Fail-fast acceptance of a single root.
pub fn accept_folder<P: AsRef<Path>>(
    root: P,
    sink: &mut dyn AcceptSink,
) -> Result<AcceptSummary, AcceptError> {
    SnapshotAccepter::default().accept(root, sink)
}
