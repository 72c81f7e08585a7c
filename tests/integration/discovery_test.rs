//! Dependency discovery over real directory trees

use super::common::{library, project};
use docwalk::{DiscoveryOptions, DocwalkError, SourceDiscovery};
use std::path::{Path, PathBuf};

fn relative_paths(discovery: &SourceDiscovery, root: &Path) -> Vec<PathBuf> {
    discovery
        .files()
        .paths()
        .map(|path| path.strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_preorder_with_cycle_and_unresolved_modules() {
    let dir = library();
    let mut discovery = SourceDiscovery::new();

    discovery.discover(dir.path().join("index.js"), true).unwrap();

    // index -> store -> cache -> (store already known); missing and fs are dropped
    assert_eq!(
        relative_paths(&discovery, dir.path()),
        vec![
            PathBuf::from("index.js"),
            PathBuf::from("lib/store.js"),
            PathBuf::from("lib/cache.js"),
        ]
    );
}

#[test]
fn test_dependency_edges() {
    let dir = library();
    let mut discovery = SourceDiscovery::new();
    discovery.discover(dir.path().join("index.js"), true).unwrap();

    let files = discovery.files();
    assert_eq!(
        files.dependencies_of(&dir.path().join("index.js")),
        &[dir.path().join("lib/store.js"), dir.path().join("lib/cache.js")]
    );
    assert_eq!(
        files.dependencies_of(&dir.path().join("lib/cache.js")),
        &[dir.path().join("lib/store.js")]
    );
}

#[test]
fn test_rediscovery_is_idempotent() {
    let dir = library();
    let mut discovery = SourceDiscovery::new();

    discovery.discover(dir.path().join("index.js"), true).unwrap();
    let first = relative_paths(&discovery, dir.path());
    discovery.discover(dir.path().join("index.js"), true).unwrap();
    discovery.discover(dir.path().join("lib/cache.js"), true).unwrap();

    assert_eq!(relative_paths(&discovery, dir.path()), first);
}

#[test]
fn test_two_file_cycle() {
    let dir = project(&[
        ("a.js", "require('./b');"),
        ("b.js", "require('./a');"),
    ]);
    let mut discovery = SourceDiscovery::new();

    discovery.discover(dir.path().join("a.js"), true).unwrap();

    assert_eq!(
        relative_paths(&discovery, dir.path()),
        vec![PathBuf::from("a.js"), PathBuf::from("b.js")]
    );
}

#[test]
fn test_literal_forms() {
    let dir = project(&[
        (
            "main.js",
            "REQUIRE('./one');\nrequire ( \"./two\" );\nrequire(`./three`);\nrequire('./' + name);\nrequire(`./${name}`);\n",
        ),
        ("one.js", ""),
        ("two.js", ""),
        ("three.js", ""),
    ]);
    let mut discovery = SourceDiscovery::new();

    discovery.discover(dir.path().join("main.js"), true).unwrap();

    assert_eq!(
        relative_paths(&discovery, dir.path()),
        vec![
            PathBuf::from("main.js"),
            PathBuf::from("one.js"),
            PathBuf::from("two.js"),
            PathBuf::from("three.js"),
        ]
    );
}

#[test]
fn test_dead_code_requires_are_followed() {
    let dir = project(&[
        ("main.js", "if (false) { require('./never'); }\n// require('./commented')\n"),
        ("never.js", ""),
        ("commented.js", ""),
    ]);
    let mut discovery = SourceDiscovery::new();

    discovery.discover(dir.path().join("main.js"), true).unwrap();

    assert_eq!(discovery.files().len(), 3);
}

#[test]
fn test_custom_extension() {
    let dir = project(&[
        ("main.mjs", "require('./util');"),
        ("util.mjs", ""),
        ("util.js", ""),
    ]);
    let mut discovery = SourceDiscovery::with_options(DiscoveryOptions {
        extension: ".mjs".to_string(),
    });

    discovery.discover(dir.path().join("main.mjs"), true).unwrap();

    assert_eq!(
        relative_paths(&discovery, dir.path()),
        vec![PathBuf::from("main.mjs"), PathBuf::from("util.mjs")]
    );
}

#[test]
fn test_missing_root_and_empty_path() {
    let dir = project(&[]);
    let mut discovery = SourceDiscovery::new();

    assert!(matches!(
        discovery.discover(dir.path().join("index.js"), true),
        Err(DocwalkError::FileNotFound { .. })
    ));
    assert!(matches!(
        discovery.discover("", true),
        Err(DocwalkError::InvalidArgument { .. })
    ));
    assert!(discovery.files().is_empty());
}

#[tokio::test]
async fn test_async_discovery_matches_blocking() {
    let dir = library();

    let mut blocking = SourceDiscovery::new();
    blocking.discover(dir.path().join("index.js"), true).unwrap();

    let mut non_blocking = SourceDiscovery::new();
    non_blocking
        .discover_async(dir.path().join("index.js"), true)
        .await
        .unwrap();

    let blocking_paths: Vec<_> = blocking.files().paths().collect();
    let non_blocking_paths: Vec<_> = non_blocking.files().paths().collect();
    assert_eq!(blocking_paths, non_blocking_paths);
}
