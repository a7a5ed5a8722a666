//! Loading search budgets from TOML files

use std::fs;

use tempfile::tempdir;
use wayfind::{SearchError, SearchOptions, UnweightedGraph};

/// Test that budgets read from a `[search]` table drive a search
#[test]
fn test_options_file_drives_search() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wayfind.toml");
    fs::write(
        &path,
        "[search]\nmax_distance = 3\n\n[other]\nname = \"ignored\"\n",
    )
    .unwrap();

    let options = SearchOptions::load(&path).unwrap();
    assert_eq!(options.max_distance, Some(3));
    assert_eq!(options.max_expansions, None);

    let line = UnweightedGraph::new(|n: &u32| vec![n + 1]).with_options(options);
    assert_eq!(line.bfs_distance_to(&0, &3), Some(3));
    assert_eq!(line.bfs_distance_to(&0, &4), None);
}

/// Test that saved options load back unchanged
#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("budget.toml");
    let options = SearchOptions::default()
        .with_max_expansions(250)
        .with_max_distance(40);

    options.save(&path).unwrap();
    assert_eq!(SearchOptions::load(&path).unwrap(), options);

    SearchOptions::UNBOUNDED.save(&path).unwrap();
    assert!(SearchOptions::load(&path).unwrap().is_unbounded());
}

/// Test the error reported for each kind of bad options file
#[test]
fn test_bad_options_files() {
    let dir = tempdir().unwrap();

    let missing = SearchOptions::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, SearchError::Io { ref operation, .. } if operation == "read"));

    let zero = dir.path().join("zero.toml");
    fs::write(&zero, "max_expansions = 0\n").unwrap();
    let err = SearchOptions::load(&zero).unwrap_err();
    assert!(matches!(err, SearchError::InvalidValue { .. }));
    assert!(err.to_string().contains("max_expansions"));

    let unknown = dir.path().join("unknown.toml");
    fs::write(&unknown, "[search]\nmax_depth = 4\n").unwrap();
    assert!(matches!(
        SearchOptions::load(&unknown).unwrap_err(),
        SearchError::Toml(_)
    ));
}
