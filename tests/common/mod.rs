//! # Scratch Tree Helpers
//!
//! Builds throwaway directory trees for acceptance tests.

#![allow(dead_code)]

use std::{fs, path::Path};

use tempfile::TempDir;

/// Creates an empty scratch directory that is removed on drop.
pub fn scratch() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Reads `root/rel`, or `None` when it does not exist.
pub fn read(root: &Path, rel: &str) -> Option<String> {
    fs::read_to_string(root.join(rel)).ok()
}

/// Sorted relative paths of every file under `root`, with their contents.
pub fn snapshot_tree(root: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = fs::read_to_string(e.path()).unwrap();
            (rel, content)
        })
        .collect();
    files.sort();
    files
}
