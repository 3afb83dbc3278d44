use crate::cli::support::lastmod_in;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: defaults"))
        .stdout(predicate::str::contains("collapse-per-day: true"))
        .stdout(predicate::str::contains("min-interval-seconds: 60"))
        .stdout(predicate::str::contains("ignored-folders: (none)"));
}

#[test]
fn test_config_set_interval_clamps() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "set", "min-interval-seconds", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("min-interval-seconds = 60"));

    lastmod_in(dir.path())
        .args(["config", "set", "min-interval-seconds", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("min-interval-seconds = 84600"));

    let content = fs::read_to_string(dir.path().join(".lastmod/config.toml")).unwrap();
    let config: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(config["min-interval-seconds"].as_integer(), Some(84_600));
}

#[test]
fn test_config_set_non_numeric_interval_is_usage_error() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "set", "min-interval-seconds", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid min-interval-seconds"));
}

#[test]
fn test_config_set_bad_bool_is_usage_error() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "set", "collapse-per-day", "maybe"])
        .assert()
        .code(2);
}

#[test]
fn test_hand_edited_config_is_clamped_on_load() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".lastmod")).unwrap();
    fs::write(
        dir.path().join(".lastmod/config.toml"),
        "collapse-per-day = false\nmin-interval-seconds = \"lots\"\n",
    )
    .unwrap();

    lastmod_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collapse-per-day: false"))
        .stdout(predicate::str::contains("min-interval-seconds: 60"));
}

#[test]
fn test_config_ignore_add_list_remove() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "ignore", "add", "/Archive/"])
        .assert()
        .success();
    lastmod_in(dir.path())
        .args(["config", "ignore", "add", "Templates"])
        .assert()
        .success();

    lastmod_in(dir.path())
        .args(["config", "ignore", "list"])
        .assert()
        .success()
        .stdout("Archive\nTemplates\n");

    lastmod_in(dir.path())
        .args(["config", "ignore", "remove", "Archive"])
        .assert()
        .success();
    lastmod_in(dir.path())
        .args(["config", "ignore", "remove", "Archive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("folder is not ignored"));

    lastmod_in(dir.path())
        .args(["config", "ignore", "list"])
        .assert()
        .success()
        .stdout("Templates\n");
}

#[test]
fn test_config_ignore_rejects_root() {
    let dir = tempdir().unwrap();

    lastmod_in(dir.path())
        .args(["config", "ignore", "add", "/"])
        .assert()
        .code(2);
}

#[test]
fn test_explicit_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "ignored-folders = [\"Drafts\"]\n").unwrap();

    let output = lastmod_in(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["ignored-folders"][0], "Drafts");
    assert!(json["source"].as_str().unwrap().ends_with("custom.toml"));
}

#[test]
fn test_global_config_used_when_vault_has_none() {
    let vault = tempdir().unwrap();
    let global = tempdir().unwrap();
    fs::write(
        global.path().join("config.toml"),
        "min-interval-seconds = 900\n",
    )
    .unwrap();

    lastmod_in(vault.path())
        .env("LASTMOD_CONFIG_DIR", global.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: global"))
        .stdout(predicate::str::contains("min-interval-seconds: 900"));
}
