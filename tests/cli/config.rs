use crate::support::{algotrace, fixture, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playback_delay_ms = 1000"))
        .stdout(predicate::str::contains("page_size = 6"))
        .stdout(predicate::str::contains("frontier = \"linear\""));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    algotrace(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    algotrace(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    fs::write(&path, "page_size = 3\nfrontier = \"heap\"\n").unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["page_size"], 3);
    assert_eq!(json["config"]["frontier"], "heap");
    assert_eq!(json["config"]["playback_delay_ms"], 1000);
}

#[test]
fn test_config_init_force_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "page_size = 3\n").unwrap();

    algotrace(dir.path())
        .args(["--format", "records", "config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=config.init status=created"));
    assert!(fs::read_to_string(&path).unwrap().contains("page_size = 6"));
}

#[test]
fn test_config_dir_flag_overrides_env() {
    let env_dir = tempdir().unwrap();
    let flag_dir = tempdir().unwrap();
    fs::write(flag_dir.path().join("config.toml"), "page_size = 2\n").unwrap();

    algotrace(env_dir.path())
        .arg("--config-dir")
        .arg(flag_dir.path())
        .args(["--format", "records", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C page_size=2"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "page_size = 0\n").unwrap();

    algotrace(dir.path())
        .args(["trace", "--start", "a"])
        .arg(fixture("diamond.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid page_size: 0"));
}
