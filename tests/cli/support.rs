use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for lastmod, isolated from the user's global config
pub fn lastmod() -> Command {
    let mut cmd = cargo_bin_cmd!("lastmod");
    cmd.env(
        "LASTMOD_CONFIG_DIR",
        std::env::temp_dir().join("lastmod-tests-no-global-config"),
    )
    .env_remove("LASTMOD_ROOT")
    .env_remove("LASTMOD_LOG")
    .env_remove("RUST_LOG");
    cmd
}

/// Get a Command for lastmod rooted at `root`
pub fn lastmod_in(root: &Path) -> Command {
    let mut cmd = lastmod();
    cmd.arg("--root").arg(root);
    cmd
}

/// Write a document under the vault root, creating parent folders
pub fn write_doc(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Entries of a document's log, read back through `lastmod show`
pub fn log_entries(root: &Path, rel: &str) -> Vec<String> {
    let output = lastmod_in(root)
        .args(["--format", "json", "show", rel])
        .output()
        .unwrap();
    assert!(output.status.success(), "show failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["value"].as_str().unwrap().to_string())
        .collect()
}

/// Stamp `rel` at `now`
pub fn stamp_at(root: &Path, rel: &str, now: &str) -> assert_cmd::assert::Assert {
    lastmod_in(root)
        .args(["stamp", "--now", now, rel])
        .assert()
}
