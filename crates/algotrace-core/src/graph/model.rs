//! Canonical graph model built from raw vertex/edge input

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{canonicalize_id, edge_id};
use crate::bail_validation;
use crate::config::DEFAULT_WEIGHT_TOLERANCE;
use crate::error::{Result, ValidationError};

/// Raw graph as submitted for registration, before canonicalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default, alias = "Nodes", alias = "vertices")]
    pub nodes: Vec<String>,
    #[serde(default, alias = "Edges")]
    pub edges: Vec<EdgeSpec>,
    #[serde(default, alias = "Directed")]
    pub directed: bool,
}

/// Raw edge as submitted for registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(alias = "From", alias = "source")]
    pub from: String,
    #[serde(alias = "To", alias = "target")]
    pub to: String,
    #[serde(alias = "Weight")]
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A stored edge with canonical endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
    from_index: usize,
    to_index: usize,
}

impl Edge {
    /// Canonical id `"{from}-{to}"` as stored
    pub fn id(&self) -> String {
        edge_id(&self.from, &self.to)
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.from_index, self.to_index)
    }
}

/// One traversal direction of a stored edge, as seen from a vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    /// Index into [`Graph::edges`]
    pub edge: usize,
    /// Vertex index on the far side
    pub neighbor: usize,
    pub weight: f64,
}

/// Immutable canonical graph.
///
/// Vertices keep registration order; adjacency lists keep edge registration
/// order, which fixes the iteration order every tracer observes.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Incidence>>,
    directed: bool,
    merged_duplicates: usize,
}

impl Graph {
    /// Build a graph using the default weight tolerance
    pub fn from_spec(spec: &GraphSpec) -> Result<Self> {
        Self::from_spec_with_tolerance(spec, DEFAULT_WEIGHT_TOLERANCE)
    }

    /// Build a graph, merging duplicate edges whose weights differ by at most `tolerance`
    #[tracing::instrument(skip(spec), fields(nodes = spec.nodes.len(), edges = spec.edges.len(), directed = spec.directed))]
    pub fn from_spec_with_tolerance(spec: &GraphSpec, tolerance: f64) -> Result<Self> {
        let (vertices, index) = collect_vertices(&spec.nodes)?;

        let mut graph = Graph {
            adjacency: vec![Vec::new(); vertices.len()],
            vertices,
            index,
            edges: Vec::new(),
            directed: spec.directed,
            merged_duplicates: 0,
        };

        // Validate everything before storing anything
        let mut checked = Vec::with_capacity(spec.edges.len());
        for raw in &spec.edges {
            checked.push(graph.check_edge(raw)?);
        }

        let mut seen: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for edge in checked {
            let key = graph.endpoint_key(&edge);
            let existing = seen.entry(key).or_default();
            let duplicate = existing
                .iter()
                .any(|&i| (graph.edges[i].weight - edge.weight).abs() <= tolerance);
            if duplicate {
                tracing::debug!(edge = %edge.id(), "merged_duplicate_edge");
                graph.merged_duplicates += 1;
                continue;
            }
            existing.push(graph.edges.len());
            graph.push_edge(edge);
        }

        tracing::debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            merged = graph.merged_duplicates,
            "graph_built"
        );
        Ok(graph)
    }

    fn check_edge(&self, raw: &EdgeSpec) -> Result<Edge> {
        let from = canonicalize_id(&raw.from);
        let to = canonicalize_id(&raw.to);
        let label = edge_id(&from, &to);

        let Some(&from_index) = self.index.get(&from) else {
            bail_validation!(ValidationError::UnknownVertex {
                edge: label,
                vertex: from,
            });
        };
        let Some(&to_index) = self.index.get(&to) else {
            bail_validation!(ValidationError::UnknownVertex {
                edge: label,
                vertex: to,
            });
        };
        if from_index == to_index {
            bail_validation!(ValidationError::SelfLoop { vertex: from });
        }
        if !raw.weight.is_finite() {
            bail_validation!(ValidationError::NonFiniteWeight { edge: label });
        }
        if raw.weight < 0.0 {
            bail_validation!(ValidationError::NegativeWeight {
                edge: label,
                weight: raw.weight,
            });
        }

        Ok(Edge {
            from,
            to,
            weight: raw.weight,
            from_index,
            to_index,
        })
    }

    /// Key under which two edges count as the same connection
    fn endpoint_key(&self, edge: &Edge) -> (usize, usize) {
        let (a, b) = edge.endpoints();
        if self.directed {
            (a, b)
        } else {
            (a.min(b), a.max(b))
        }
    }

    fn push_edge(&mut self, edge: Edge) {
        let id = self.edges.len();
        let (from, to) = edge.endpoints();
        self.adjacency[from].push(Incidence {
            edge: id,
            neighbor: to,
            weight: edge.weight,
        });
        if !self.directed {
            self.adjacency[to].push(Incidence {
                edge: id,
                neighbor: from,
                weight: edge.weight,
            });
        }
        self.edges.push(edge);
    }

    /// Vertices in registration order
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> &str {
        &self.vertices[index]
    }

    /// Look up a vertex by any spelling of its id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(&canonicalize_id(id)).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Traversable incidences leaving `vertex`; both directions when undirected
    pub fn incident(&self, vertex: usize) -> &[Incidence] {
        &self.adjacency[vertex]
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of duplicate edges folded into an existing edge at build time
    pub fn merged_duplicates(&self) -> usize {
        self.merged_duplicates
    }
}

fn collect_vertices(raw: &[String]) -> Result<(Vec<String>, HashMap<String, usize>)> {
    let mut vertices = Vec::with_capacity(raw.len());
    let mut index = HashMap::with_capacity(raw.len());
    for name in raw {
        let id = canonicalize_id(name);
        if id.is_empty() {
            bail_validation!(ValidationError::EmptyVertexId);
        }
        if index.contains_key(&id) {
            bail_validation!(ValidationError::DuplicateVertex { id });
        }
        index.insert(id.clone(), vertices.len());
        vertices.push(id);
    }
    Ok((vertices, index))
}
