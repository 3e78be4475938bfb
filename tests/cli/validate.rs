use crate::support::{algotrace, fixture, stdout_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_validate_human() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .arg("validate")
        .arg(fixture("diamond.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("valid undirected graph: 4 vertices, 4 edges"))
        .stdout(predicate::str::contains("merged").not());
}

#[test]
fn test_validate_merges_reciprocal_duplicates() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "dup.json",
        r#"{
            "nodes": ["a", "b", "c"],
            "edges": [
                {"from": "a", "to": "b", "weight": 1},
                {"from": "b", "to": "a", "weight": 1},
                {"from": "b", "to": "c", "weight": 2},
                {"from": "b", "to": "c", "weight": 7}
            ]
        }"#,
    );

    algotrace(dir.path())
        .arg("validate")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 vertices, 3 edges"))
        .stdout(predicate::str::contains("merged 1 duplicate edge(s)"));

    let output = algotrace(dir.path())
        .args(["--format", "json", "validate"])
        .arg(&graph)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["status"], "valid");
    assert_eq!(json["mergedDuplicates"], 1);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"][0]["id"], "a-b");
}

#[test]
fn test_validate_records() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["--format", "records", "validate"])
        .arg(fixture("classroom.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=validate status=valid kind=undirected vertices=8 edges=13"))
        .stdout(predicate::str::contains("N \"a\""))
        .stdout(predicate::str::contains("E g-h g h 7"));
}

#[test]
fn test_validate_duplicate_vertex() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "dupv.json", r#"{"nodes": ["a", " A "], "edges": []}"#);
    algotrace(dir.path())
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate vertex: a"));
}

#[test]
fn test_validate_self_loop() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "loop.yml",
        "nodes: [a]\nedges:\n  - {from: a, to: a, weight: 1}\n",
    );
    algotrace(dir.path())
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop on vertex a"));
}

#[test]
fn test_validate_malformed_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "broken.json", "{ nodes: ");
    algotrace(dir.path())
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}
