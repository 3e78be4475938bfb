use crate::support::{algotrace, fixture, stdout_json, write_graph};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Dijkstra
// ============================================================================

#[test]
fn test_trace_dijkstra_json_pages() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--algo", "dijkstra", "--start", "a"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["start"], "a");
    assert_eq!(json["steps"], 36);
    assert_eq!(json["pageSize"], 6);
    assert!(json.as_object().unwrap().keys().all(|k| !k.contains('_')));
    assert!(json["graph"].as_str().unwrap().starts_with("g-"));
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);

    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 6);
    assert!(pages.iter().all(|p| p.as_array().unwrap().len() <= 6));

    let last = pages.last().unwrap().as_array().unwrap().last().unwrap();
    assert_eq!(last["acceptedNodes"], serde_json::json!(["a", "b", "c", "d"]));
    assert_eq!(last["acceptedEdges"], serde_json::json!(["a-b", "b-c", "c-d"]));
}

#[test]
fn test_trace_first_steps_are_initialization() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "a", "--page", "1"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["page"], 1);
    let steps = json["pages"][0].as_array().unwrap();
    assert_eq!(steps[0]["id"], "0.1");
    assert_eq!(steps[0]["pseudocode"], "T := ∅");
    assert_eq!(steps[3]["id"], "0.4");
    assert_eq!(steps[4]["id"], "1.1");
    assert_eq!(steps[4]["colorHint"], "highlight-node");
}

#[test]
fn test_trace_is_deterministic_across_runs_and_frontiers() {
    let dir = tempdir().unwrap();
    let fingerprint = |frontier: &str| {
        let output = algotrace(dir.path())
            .args(["--format", "json", "trace", "--start", "a", "--frontier", frontier])
            .arg(fixture("diamond.json"))
            .output()
            .unwrap();
        assert!(output.status.success());
        stdout_json(&output)["fingerprint"].as_str().unwrap().to_string()
    };

    let first = fingerprint("linear");
    assert_eq!(first, fingerprint("linear"));
    assert_eq!(first, fingerprint("heap"));
}

#[test]
fn test_trace_page_size_flag_and_config() {
    let dir = tempdir().unwrap();

    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "a", "--page-size", "10", "--page", "2"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["pageCount"], 4);
    assert_eq!(json["pages"][0].as_array().unwrap().len(), 10);

    fs::write(dir.path().join("config.toml"), "page_size = 4\n").unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "a"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["pageSize"], 4);
    assert_eq!(json["pageCount"], 9);
}

#[test]
fn test_trace_page_out_of_range() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--start", "a", "--page", "99"])
        .arg(fixture("diamond.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid page: 99"));
}

#[test]
fn test_trace_human_listing() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--start", "A"])
        .arg(fixture("diamond.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra from A: 36 steps in 6 page(s) of 6"))
        .stdout(predicate::str::contains("page 1/6"))
        .stdout(predicate::str::contains("t := extract_min(Q) = a"))
        .stdout(predicate::str::contains("accepted: nodes {a, b, c, d} edges {a-b, b-c, c-d}"));
}

#[test]
fn test_trace_records() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "records", "trace", "--start", "a"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("H algotrace=1 records=1 graph=g-"));
    assert!(lines[0].contains("mode=trace algo=dijkstra start=a steps=36"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("S ")).count(), 36);
    assert_eq!(lines.iter().filter(|l| l.starts_with("A ")).count(), 36);
    assert!(lines.contains(&"A 0.1 nodes=- edges=-"));
    assert!(lines.contains(&"A 4.6 nodes=a,b,c,d edges=a-b,b-c,c-d"));
}

// ============================================================================
// Prim
// ============================================================================

#[test]
fn test_trace_prim_yaml() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--algo", "Prim", "--start", "h"])
        .arg(fixture("classroom.yaml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "prim");
    assert!(json["start"].is_null());

    let steps: Vec<&serde_json::Value> = json["pages"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|p| p.as_array().unwrap())
        .collect();
    assert_eq!(steps[0]["pseudocode"], "append(T, a)");
    let last = steps.last().unwrap();
    assert_eq!(last["acceptedNodes"].as_array().unwrap().len(), 8);
    assert_eq!(
        last["acceptedEdges"],
        serde_json::json!(["a-c", "c-d", "d-e", "e-f", "b-f", "f-h", "g-h"])
    );
    assert!(last["state"].as_str().unwrap().ends_with("W = 38"));
}

#[test]
fn test_trace_prim_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "empty.json", r#"{"nodes": [], "edges": []}"#);
    algotrace(dir.path())
        .args(["trace", "--algo", "prim"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("prim: 0 steps"))
        .stdout(predicate::str::contains("nothing to trace"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_trace_invalid_start() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--start", "zz"])
        .arg(fixture("diamond.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid start vertex: zz"));
}

#[test]
fn test_trace_invalid_start_json_envelope() {
    let dir = tempdir().unwrap();
    let output = algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "zz"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_start");
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_trace_dijkstra_without_start_uses_first_vertex() {
    let dir = tempdir().unwrap();
    let implicit = algotrace(dir.path())
        .args(["--format", "json", "trace"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();
    assert!(implicit.status.success());
    let explicit = algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "a"])
        .arg(fixture("diamond.json"))
        .output()
        .unwrap();

    let implicit = stdout_json(&implicit);
    let explicit = stdout_json(&explicit);
    assert_eq!(implicit["start"], "a");
    assert_eq!(implicit["fingerprint"], explicit["fingerprint"]);
}

#[test]
fn test_trace_prim_rejects_unknown_start() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--algo", "prim", "--start", "nonexistent"])
        .arg(fixture("diamond.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid start vertex: nonexistent"));
}

#[test]
fn test_trace_unknown_algorithm() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--algo", "kruskal"])
        .arg(fixture("diamond.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_trace_invalid_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "bad.json",
        r#"{"nodes": ["a"], "edges": [{"from": "a", "to": "q", "weight": 1}]}"#,
    );
    algotrace(dir.path())
        .args(["trace", "--start", "a"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_trace_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "neg.json",
        r#"{"nodes": ["a", "b"], "edges": [{"from": "a", "to": "b", "weight": -2}]}"#,
    );
    algotrace(dir.path())
        .args(["--format", "json", "trace", "--start", "a"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("validation_error"));
}

#[test]
fn test_trace_missing_file() {
    let dir = tempdir().unwrap();
    algotrace(dir.path())
        .args(["trace", "--start", "a"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .code(1);
}
