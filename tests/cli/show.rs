use crate::cli::support::{lastmod_in, write_doc};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_lists_entries() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified:\n  - '2024-01-01T10:00:00'\n  - 'garbage'\n---\n",
    );

    lastmod_in(dir.path())
        .args(["show", "note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01T10:00:00\n"))
        .stdout(predicate::str::contains("garbage (unparseable)"));
}

#[test]
fn test_show_empty_log() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "plain\n");

    lastmod_in(dir.path())
        .args(["show", "note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note.md: no timestamps"));
}

#[test]
fn test_show_json_flags_legacy_scalar() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified: '2024-01-01T10:00:00'\n---\n",
    );

    let output = lastmod_in(dir.path())
        .args(["--format", "json", "show", "note.md"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["legacy_scalar"], true);
    assert_eq!(json["entries"].as_array().unwrap().len(), 0);
}

#[test]
fn test_show_outside_vault() {
    let outer = tempdir().unwrap();
    let vault = outer.path().join("vault");
    std::fs::create_dir_all(&vault).unwrap();
    let stray = write_doc(outer.path(), "stray.md", "x\n");

    lastmod_in(&vault)
        .arg("show")
        .arg(&stray)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("outside the vault"));
}
