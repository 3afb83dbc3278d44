use crate::cli::support::{lastmod_in, log_entries, stamp_at, write_doc};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stamp_creates_log() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "---\ntitle: Note\n---\n# Note\n\nBody.\n");

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00")
        .success()
        .stdout(predicate::str::contains("created"))
        .stdout(predicate::str::contains("note.md"));

    assert_eq!(log_entries(dir.path(), "note.md"), ["2024-01-01T10:00:00"]);

    let content = fs::read_to_string(dir.path().join("note.md")).unwrap();
    assert!(content.contains("title: Note"));
    assert!(content.ends_with("---\n# Note\n\nBody.\n"));
}

#[test]
fn test_stamp_collapses_same_day() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "body\n");

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00").success();
    stamp_at(dir.path(), "note.md", "2024-01-01T15:30:00")
        .success()
        .stdout(predicate::str::contains("overwritten"));

    assert_eq!(log_entries(dir.path(), "note.md"), ["2024-01-01T15:30:00"]);
}

#[test]
fn test_stamp_appends_new_day() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "body\n");

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00").success();
    stamp_at(dir.path(), "note.md", "2024-01-02T00:00:01")
        .success()
        .stdout(predicate::str::contains("appended"));

    assert_eq!(
        log_entries(dir.path(), "note.md"),
        ["2024-01-01T10:00:00", "2024-01-02T00:00:01"]
    );
}

#[test]
fn test_stamp_throttles_by_interval() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified:\n  - '2024-01-01T10:00:00'\n---\n",
    );
    lastmod_in(dir.path())
        .args(["config", "set", "collapse-per-day", "false"])
        .assert()
        .success();

    let before = fs::read_to_string(dir.path().join("note.md")).unwrap();
    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:30")
        .success()
        .stdout(predicate::str::contains("throttled"));
    assert_eq!(fs::read_to_string(dir.path().join("note.md")).unwrap(), before);

    stamp_at(dir.path(), "note.md", "2024-01-01T10:02:00")
        .success()
        .stdout(predicate::str::contains("appended"));
    assert_eq!(
        log_entries(dir.path(), "note.md"),
        ["2024-01-01T10:00:00", "2024-01-01T10:02:00"]
    );
}

#[test]
fn test_stamp_skips_ignored_folder() {
    let dir = tempdir().unwrap();
    let original = "---\ntitle: Old\n---\n";
    write_doc(dir.path(), "Archive/note.md", original);
    write_doc(dir.path(), "Archived/note.md", original);
    lastmod_in(dir.path())
        .args(["config", "ignore", "add", "Archive"])
        .assert()
        .success();

    lastmod_in(dir.path())
        .args(["stamp", "--now", "2024-01-01T10:00:00", "Archive", "Archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored     Archive/note.md"))
        .stdout(predicate::str::contains("created     Archived/note.md"));

    assert_eq!(
        fs::read_to_string(dir.path().join("Archive/note.md")).unwrap(),
        original
    );
}

#[test]
fn test_stamp_heals_corrupted_log() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified: ['yesterday-ish']\n---\n",
    );

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00")
        .success()
        .stdout(predicate::str::contains("appended"));
    assert_eq!(
        log_entries(dir.path(), "note.md"),
        ["yesterday-ish", "2024-01-01T10:00:00"]
    );
}

#[test]
fn test_stamp_discards_legacy_scalar() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified: '2023-05-05T05:05:05'\n---\n",
    );

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00")
        .success()
        .stdout(predicate::str::contains("created"));
    assert_eq!(log_entries(dir.path(), "note.md"), ["2024-01-01T10:00:00"]);
}

#[test]
fn test_stamp_migrates_legacy_scalar_when_configured() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "note.md",
        "---\nlast-modified: '2023-05-05T05:05:05'\n---\n",
    );
    lastmod_in(dir.path())
        .args(["config", "set", "migrate-legacy-scalar", "true"])
        .assert()
        .success();

    stamp_at(dir.path(), "note.md", "2024-01-01T10:00:00").success();
    assert_eq!(
        log_entries(dir.path(), "note.md"),
        ["2023-05-05T05:05:05", "2024-01-01T10:00:00"]
    );
}

#[test]
fn test_stamp_directory_walks_markdown_only() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "a.md", "a\n");
    write_doc(dir.path(), "sub/b.md", "b\n");
    write_doc(dir.path(), "sub/c.txt", "c\n");

    let output = lastmod_in(dir.path())
        .args(["--format", "json", "stamp", "--now", "2024-01-01T10:00:00", "."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let paths: Vec<&str> = json["documents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["a.md", "sub/b.md"]);
    assert_eq!(json["now"], "2024-01-01T10:00:00");
    assert_eq!(
        fs::read_to_string(dir.path().join("sub/c.txt")).unwrap(),
        "c\n"
    );
}

#[test]
fn test_stamp_dry_run_leaves_files() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "body\n");

    lastmod_in(dir.path())
        .args(["stamp", "--dry-run", "--now", "2024-01-01T10:00:00", "note.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    assert_eq!(
        fs::read_to_string(dir.path().join("note.md")).unwrap(),
        "body\n"
    );
}

#[test]
fn test_stamp_missing_document() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["stamp", "missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("document not found"));
}

#[test]
fn test_stamp_invalid_frontmatter_reports_data_error() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "bad.md", "---\n- not\n- a mapping\n---\n");
    write_doc(dir.path(), "good.md", "ok\n");

    lastmod_in(dir.path())
        .args(["stamp", "--now", "2024-01-01T10:00:00", "bad.md", "good.md"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("good.md"))
        .stderr(predicate::str::contains("invalid frontmatter"));

    assert_eq!(log_entries(dir.path(), "good.md"), ["2024-01-01T10:00:00"]);
}

#[test]
fn test_stamp_rejects_loose_now() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "body\n");

    lastmod_in(dir.path())
        .args(["stamp", "--now", "2024-01-01 10:00", "note.md"])
        .assert()
        .code(2);
}

#[test]
fn test_stamp_without_now_uses_clock() {
    let dir = tempdir().unwrap();
    write_doc(dir.path(), "note.md", "body\n");

    lastmod_in(dir.path())
        .args(["stamp", "note.md"])
        .assert()
        .success();

    let entries = log_entries(dir.path(), "note.md");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].len(), "YYYY-MM-DDTHH:mm:ss".len());
}

#[test]
fn test_stamp_keeps_history_behind_byte_order_mark() {
    let dir = tempdir().unwrap();
    write_doc(
        dir.path(),
        "bom.md",
        "\u{feff}---\ntitle: A\nlast-modified: ['2024-01-01T09:00:00']\n---\nbody\n",
    );

    stamp_at(dir.path(), "bom.md", "2024-01-02T10:00:00")
        .success()
        .stdout(predicate::str::contains("appended"));

    assert_eq!(
        log_entries(dir.path(), "bom.md"),
        ["2024-01-01T09:00:00", "2024-01-02T10:00:00"]
    );
    let content = fs::read_to_string(dir.path().join("bom.md")).unwrap();
    assert!(content.starts_with("\u{feff}---\n"));
    assert_eq!(content.matches('\u{feff}').count(), 1);
    assert!(content.ends_with("---\nbody\n"));
}
