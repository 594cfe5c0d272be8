// Discovery of received snapshots across a scratch tree.
mod common;

use accept_all::{discovery::SnapshotDiscoverer, AcceptError};
use common::{scratch, write};

#[test]
fn discovers_nested_received_files_in_sorted_order() {
    let dir = scratch();
    let root = dir.path();
    write(root, "b/Bar.received.txt", "v3");
    write(root, "a/Foo.received.txt", "v2");
    write(root, "a/Foo.verified.txt", "v1");
    write(root, "sub/dir/deep/Z.received.txt", "z");
    write(root, "notes.txt", "ignore");
    write(root, "Y.received.log", "ignore");

    let found = SnapshotDiscoverer::discover_received_files(root).unwrap();
    let names: Vec<_> = found.iter().map(|s| s.base_name()).collect();
    assert_eq!(names, ["Foo", "Bar", "Z"]);
    assert_eq!(found[2].dir(), root.join("sub/dir/deep"));
}

#[test]
fn directories_with_the_suffix_are_not_matched() {
    let dir = scratch();
    let root = dir.path();
    write(root, "Odd.received.txt/inner.txt", "x");

    let found = SnapshotDiscoverer::discover_received_files(root).unwrap();
    assert!(found.is_empty());
}

#[test]
fn missing_root_is_a_walk_error() {
    let dir = scratch();
    let missing = dir.path().join("does-not-exist");

    let err = SnapshotDiscoverer::discover_received_files(&missing).unwrap_err();
    match err {
        AcceptError::Walk { path, .. } => assert_eq!(path, missing),
        other => panic!("expected walk error, got {other:?}"),
    }
}

#[test]
fn empty_tree_finds_nothing() {
    let dir = scratch();
    let found = SnapshotDiscoverer::discover_received_files(dir.path()).unwrap();
    assert!(found.is_empty());
}
