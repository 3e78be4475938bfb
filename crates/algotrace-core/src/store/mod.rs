//! Graph registry
//!
//! Graphs are validated once at registration and stored immutably behind
//! an `Arc`, so a trace run holds its own handle even if the entry is
//! removed while it runs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algos::{self, Algorithm};
use crate::config::AppConfig;
use crate::error::{Result, TraceError};
use crate::frontier::FrontierKind;
use crate::graph::{Graph, GraphSpec};
use crate::trace::{PagedTrace, StepTrace};

/// Registered graph id with the `g-` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphId(String);

impl GraphId {
    /// The standard ID prefix
    pub const PREFIX: &'static str = "g-";

    /// Generate a fresh ULID-based id
    pub fn generate() -> Self {
        let ulid = ulid::Ulid::new();
        GraphId(format!("{}{}", Self::PREFIX, ulid.to_string().to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GraphId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A malformed id can never name a registered graph, so it parses to
/// `GraphNotFound` rather than a usage error.
impl FromStr for GraphId {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let suffix = raw
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TraceError::graph_not_found(raw))?;
        let ulid = ulid::Ulid::from_string(&suffix.to_uppercase())
            .map_err(|_| TraceError::graph_not_found(raw))?;
        Ok(GraphId(format!(
            "{}{}",
            Self::PREFIX,
            ulid.to_string().to_lowercase()
        )))
    }
}

/// Explicit graph store: create through [`GraphStore::register`], read
/// through [`GraphStore::resolve`].
#[derive(Debug)]
pub struct GraphStore {
    graphs: HashMap<GraphId, Arc<Graph>>,
    weight_tolerance: f64,
    frontier: FrontierKind,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl GraphStore {
    pub fn new(weight_tolerance: f64, frontier: FrontierKind) -> Self {
        Self {
            graphs: HashMap::new(),
            weight_tolerance,
            frontier,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.weight_tolerance, config.frontier)
    }

    /// Validate and store a graph.
    ///
    /// On a validation failure nothing is stored.
    pub fn register(&mut self, spec: &GraphSpec) -> Result<GraphId> {
        let graph = Graph::from_spec_with_tolerance(spec, self.weight_tolerance)?;
        let id = GraphId::generate();
        tracing::debug!(
            id = %id,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            merged = graph.merged_duplicates(),
            "register"
        );
        self.graphs.insert(id.clone(), Arc::new(graph));
        Ok(id)
    }

    pub fn resolve(&self, id: &GraphId) -> Result<Arc<Graph>> {
        let graph = self
            .graphs
            .get(id)
            .cloned()
            .ok_or_else(|| TraceError::graph_not_found(id));
        tracing::debug!(id = %id, found = graph.is_ok(), "resolve");
        graph
    }

    /// Trace `algorithm` on the graph stored under `id`
    pub fn trace(&self, id: &GraphId, algorithm: Algorithm, start: Option<&str>) -> Result<StepTrace> {
        let graph = self.resolve(id)?;
        algos::trace(&graph, algorithm, start, self.frontier)
    }

    /// Like [`GraphStore::trace`], delivered in pages of `page_size`
    pub fn trace_paged(
        &self,
        id: &GraphId,
        algorithm: Algorithm,
        start: Option<&str>,
        page_size: usize,
    ) -> Result<PagedTrace> {
        Ok(self.trace(id, algorithm, start)?.paged(page_size))
    }

    pub fn remove(&mut self, id: &GraphId) -> Option<Arc<Graph>> {
        let removed = self.graphs.remove(id);
        tracing::debug!(id = %id, removed = removed.is_some(), "remove");
        removed
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
