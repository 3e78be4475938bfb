use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for algotrace reading its config from `config_dir`
pub fn algotrace(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("algotrace");
    cmd.env("ALGOTRACE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .env_remove("ALGOTRACE_LOG");
    cmd
}

/// Path to a checked-in fixture graph
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as a single JSON document
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
