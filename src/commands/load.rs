//! Graph file reading and writing

use std::fs;
use std::path::Path;
use std::sync::Arc;

use algotrace_core::error::Result;
use algotrace_core::graph::{Graph, GraphSpec};
use algotrace_core::store::{GraphId, GraphStore};

/// `.yaml`/`.yml` files hold YAML, anything else JSON
fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

pub fn read_graph_spec(path: &Path) -> Result<GraphSpec> {
    let content = fs::read_to_string(path)?;
    let yaml = is_yaml(path);
    let spec = if yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), yaml, "read_graph_spec");
    Ok(spec)
}

/// Write `spec` in the format its extension names, creating parent
/// directories as needed
pub fn write_graph_spec(path: &Path, spec: &GraphSpec) -> Result<()> {
    let yaml = is_yaml(path);
    let content = if yaml {
        serde_yaml::to_string(spec)?
    } else {
        serde_json::to_string_pretty(spec)? + "\n"
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), yaml, "write_graph_spec");
    Ok(())
}

/// Read, validate and register a graph file
pub fn register_file(store: &mut GraphStore, path: &Path) -> Result<(GraphId, Arc<Graph>)> {
    let spec = read_graph_spec(path)?;
    let id = store.register(&spec)?;
    let graph = store.resolve(&id)?;
    Ok((id, graph))
}
