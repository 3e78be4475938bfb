use crate::support::{algotrace, fixture, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_play_runs_to_end() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["play", "--start", "a", "--delay-ms", "0"])
        .arg(fixture("diamond.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/36]"))
        .stdout(predicate::str::contains("[36/36]"))
        .stdout(predicate::str::contains("finished: 36 of 36 steps"));
}

#[test]
fn test_play_seek_starts_midway() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["play", "--start", "a", "--delay-ms", "0", "--seek", "30"])
        .arg(fixture("diamond.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[31/36]"))
        .stdout(predicate::str::contains("[32/36]"))
        .stdout(predicate::str::contains("[1/36]").not())
        .stdout(predicate::str::contains("finished: 36 of 36 steps"));
}

#[test]
fn test_play_from_last_step_restarts() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["play", "--start", "a", "--delay-ms", "0", "--seek", "500"])
        .arg(fixture("diamond.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("restarting from the first step"))
        .stdout(predicate::str::contains("[1/36]"));
}

#[test]
fn test_play_json_lines() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "play", "--algo", "prim", "--delay-ms", "0"])
        .arg(fixture("classroom.yaml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!frames.is_empty());
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame["index"], i);
    }
    let last = &frames.last().unwrap()["step"];
    assert_eq!(last["acceptedEdges"].as_array().unwrap().len(), 7);
}

#[test]
fn test_play_records() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "records", "play", "--start", "a", "--delay-ms", "0"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("H algotrace=1 records=1 graph=g-"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("S ")).count(), 36);
}

#[test]
fn test_play_uses_configured_delay() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "playback_delay_ms = 0\n").unwrap();
    algotrace(dir.path())
        .args(["play", "--start", "a"])
        .arg(fixture("diamond.json"))
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("finished: 36 of 36 steps"));
}

#[test]
fn test_play_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "empty.json", r#"{"nodes": []}"#);
    algotrace(dir.path())
        .args(["play", "--algo", "prim"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to play"));
}
