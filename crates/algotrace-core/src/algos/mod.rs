//! Step-trace generators for the supported graph algorithms

pub mod dijkstra;
pub mod prim;
pub(crate) mod shared;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::frontier::FrontierKind;
use crate::graph::Graph;
use crate::trace::StepTrace;

pub use dijkstra::{dijkstra_trace, DijkstraOutcome};
pub use prim::{prim_trace, PrimOutcome};

/// Algorithms with a step tracer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    Prim,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prim => "prim",
        }
    }

    /// Whether the tracer reads a start vertex
    pub fn needs_start(&self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "prim" => Ok(Algorithm::Prim),
            other => Err(TraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertex a run starts from when none is named: the first registered one
pub fn default_start(graph: &Graph) -> Option<&str> {
    graph.vertices().first().map(String::as_str)
}

/// Run `algorithm` on `graph` and return only its trace.
///
/// A named `start` must exist in the graph for either algorithm. Dijkstra
/// falls back to [`default_start`]; Prim always grows from the first
/// registered vertex. A graph with no vertices yields an empty trace.
pub fn trace(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<&str>,
    frontier: FrontierKind,
) -> Result<StepTrace> {
    if let Some(start) = start {
        if !graph.contains(start) {
            return Err(TraceError::invalid_start(start));
        }
    }
    match algorithm {
        Algorithm::Dijkstra => match start.or_else(|| default_start(graph)) {
            Some(start) => Ok(dijkstra_trace(graph, start, frontier)?.trace),
            None => Ok(StepTrace::default()),
        },
        Algorithm::Prim => {
            if let Some(start) = start {
                tracing::debug!(start, "prim ignores the start vertex");
            }
            Ok(prim_trace(graph, frontier)?.trace)
        }
    }
}
