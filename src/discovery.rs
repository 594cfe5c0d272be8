use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{accept::FailurePolicy, AcceptError};

/// Suffix a snapshot run writes for output awaiting review.
pub const RECEIVED_SUFFIX: &str = ".received.txt";

/// Suffix of an accepted baseline.
pub const VERIFIED_SUFFIX: &str = ".verified.txt";

// =====================
// Name Matching
// =====================

/// Strips the received suffix from a file name.
///
/// Matching is case-sensitive and purely by suffix: `Foo.received.txt` yields
/// `Foo`, while `Foo.txt`, `Foo.received.log` and `Foo.RECEIVED.TXT` yield `None`.
pub fn base_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(RECEIVED_SUFFIX)
}

/// File name of the verified baseline for `base_name`.
pub fn verified_name(base_name: &str) -> String {
    format!("{base_name}{VERIFIED_SUFFIX}")
}

/// A received snapshot found on disk, addressed by its directory and base name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReceivedSnapshot {
    dir: PathBuf,
    base_name: String,
}

impl ReceivedSnapshot {
    /// Returns `None` unless the path's file name carries the received suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let base = base_name(file_name)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Some(Self {
            dir,
            base_name: base.to_string(),
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn received_path(&self) -> PathBuf {
        self.dir.join(format!("{}{RECEIVED_SUFFIX}", self.base_name))
    }

    /// Target of the rename, always in the same directory as the received file.
    pub fn verified_path(&self) -> PathBuf {
        self.dir.join(verified_name(&self.base_name))
    }
}

/// Everything a walk turned up: matches, plus walk errors tolerated under `KeepGoing`.
#[derive(Debug, Default)]
pub struct Discovery {
    pub snapshots: Vec<ReceivedSnapshot>,
    pub failures: Vec<AcceptError>,
}

/// Finds received snapshots under a root directory.
#[derive(Debug)]
pub struct SnapshotDiscoverer;

impl SnapshotDiscoverer {
    // =====================
    // Public API - File Discovery
    // =====================

    /// Recursively scans a directory for received snapshot files.
    ///
    /// The whole tree is collected before anything is renamed, so callers never
    /// mutate a directory the walk is still reading. The returned list is sorted
    /// to keep acceptance order deterministic. Any walk error aborts discovery.
    pub fn discover_received_files<P: AsRef<Path>>(
        root: P,
    ) -> Result<Vec<ReceivedSnapshot>, AcceptError> {
        Self::discover(root, FailurePolicy::FailFast).map(|found| found.snapshots)
    }

    /// Like `discover_received_files`, but under `KeepGoing` a directory that
    /// cannot be read is recorded and the rest of the tree is still walked.
    pub fn discover<P: AsRef<Path>>(
        root: P,
        policy: FailurePolicy,
    ) -> Result<Discovery, AcceptError> {
        let root = root.as_ref();
        Self::collect(root, WalkDir::new(root), policy)
    }

    // =====================
    // Internal - Walk Processing
    // =====================

    fn collect<I>(root: &Path, entries: I, policy: FailurePolicy) -> Result<Discovery, AcceptError>
    where
        I: IntoIterator<Item = walkdir::Result<DirEntry>>,
    {
        let mut found = Discovery::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if policy == FailurePolicy::KeepGoing => {
                    let err = AcceptError::walk(root, e);
                    warn!("{err}");
                    found.failures.push(err);
                    continue;
                }
                Err(e) => return Err(AcceptError::walk(root, e)),
            };

            if !Self::is_renamable(&entry) {
                continue;
            }

            let path = entry.path();
            let Some(snapshot) = ReceivedSnapshot::from_path(path) else {
                Self::warn_if_unreadable_match(path);
                continue;
            };

            debug!("found received snapshot {}", path.display());
            found.snapshots.push(snapshot);
        }
        found.snapshots.sort();
        Ok(found)
    }

    // =====================
    // Internal - File System Utilities
    // =====================

    /// Regular files, and symlinks that do not resolve to a directory.
    ///
    /// A matched symlink is renamed itself; its target is left alone.
    fn is_renamable(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
    }

    /// Non-UTF-8 names are never matched; flag the ones that look like they should be.
    fn warn_if_unreadable_match(path: &Path) {
        let Some(file_name) = path.file_name() else {
            return;
        };
        if file_name.to_str().is_none() && file_name.to_string_lossy().ends_with(RECEIVED_SUFFIX)
        {
            warn!("skipping non-UTF-8 file name {}", path.display());
        }
    }
}
