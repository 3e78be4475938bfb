use crate::support::{algotrace, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_generate_sample_json() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "generate", "--sample"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["nodes"],
        serde_json::json!(["a", "b", "c", "d", "e", "f", "g", "h"])
    );
    assert_eq!(json["edges"].as_array().unwrap().len(), 13);
    assert_eq!(json["directed"], false);
}

#[test]
fn test_sample_file_traces_to_lecture_tree() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lecture.yaml");
    algotrace(dir.path())
        .args(["generate", "--sample", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote lecture sample graph (8 vertices, 13 edges)"));

    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--algo", "prim", "--page-size", "1000"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    let last = json["pages"][0].as_array().unwrap().last().unwrap().clone();
    assert!(last["state"].as_str().unwrap().ends_with("W = 38"));
}

#[test]
fn test_same_seed_writes_same_file() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    for path in [&first, &second] {
        algotrace(dir.path())
            .args(["generate", "--seed", "17", "--vertices", "12", "--output"])
            .arg(path)
            .assert()
            .success();
    }
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_random_graph_is_connected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.json");
    let output = algotrace(dir.path())
        .args(["--format", "json", "generate", "--seed", "5"])
        .args(["--vertices", "15", "--extra-edges", "3", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["status"], "written");
    assert_eq!(report["seed"], 5);
    assert_eq!(report["vertices"], 15);

    // Every vertex is reached from the first one
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--page-size", "10000"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["start"], "a");
    let last = json["pages"][0].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["acceptedNodes"].as_array().unwrap().len(), 15);
    assert_eq!(last["acceptedEdges"].as_array().unwrap().len(), 14);
}

#[test]
fn test_human_output_reports_seed() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["generate", "--seed", "9", "--vertices", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# random graph, seed 9\n"))
        .stdout(predicate::str::contains("nodes:"));
}

#[test]
fn test_records_output() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "records", "generate", "--sample"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next().unwrap(),
        "H algotrace=1 records=1 mode=generate source=sample vertices=8 edges=13"
    );
    assert_eq!(stdout.lines().filter(|l| l.starts_with("N ")).count(), 8);
    assert!(stdout.lines().any(|l| l == "E a b 42"));
}

#[test]
fn test_sample_rejects_random_options() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["generate", "--sample", "--vertices", "4"])
        .assert()
        .code(2);
}

#[test]
fn test_too_many_vertices_is_usage_error() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "generate", "--vertices", "100000"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}
