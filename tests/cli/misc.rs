use crate::support::algotrace;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: algotrace"))
        .stdout(predicate::str::contains("trace"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("algotrace ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `algotrace --help`"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["--format", "xml", "config", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_json_format_wraps_parse_errors() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.contains("--bogus"), "{message}");
    assert!(!message.contains('\n'));
    assert!(!message.contains("Usage:"));
}
