//! Graphs that need no input file: the lecture graph and seeded random
//! connected graphs.

use std::collections::HashSet;

use rand::Rng;

use super::model::{EdgeSpec, GraphSpec};
use crate::error::Result;

/// Edges of the eight-vertex lecture graph, in registration order
const SAMPLE_EDGES: [(&str, &str, f64); 13] = [
    ("a", "b", 42.0),
    ("a", "c", 4.0),
    ("a", "d", 10.0),
    ("b", "e", 14.0),
    ("b", "f", 3.0),
    ("c", "d", 3.0),
    ("c", "g", 15.0),
    ("d", "e", 1.0),
    ("d", "g", 15.0),
    ("d", "h", 20.0),
    ("e", "f", 11.0),
    ("g", "h", 7.0),
    ("f", "h", 9.0),
];

/// Random edge weights are whole numbers in `1..=MAX_WEIGHT`
pub const MAX_WEIGHT: u32 = 20;

/// One- and two-letter vertex names run out here
pub const MAX_VERTICES: usize = 26 + 26 * 26;

/// The eight-vertex undirected graph used throughout the lecture notes
pub fn sample_graph() -> GraphSpec {
    GraphSpec {
        nodes: ('a'..='h').map(String::from).collect(),
        edges: SAMPLE_EDGES
            .iter()
            .map(|(from, to, weight)| EdgeSpec::new(*from, *to, *weight))
            .collect(),
        directed: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphOptions {
    pub vertices: usize,
    /// Extra edge attempts after the spanning tree; self-loops and pairs
    /// already joined are skipped, so fewer may be added
    pub extra_edges: usize,
}

impl Default for RandomGraphOptions {
    fn default() -> Self {
        Self {
            vertices: 8,
            extra_edges: 6,
        }
    }
}

/// `a`..`z`, then `aa`, `ab`, ...
fn vertex_name(index: usize) -> String {
    let letter = |i: usize| char::from(b'a' + (i % 26) as u8);
    if index < 26 {
        letter(index).to_string()
    } else {
        let rest = index - 26;
        [letter(rest / 26), letter(rest)].iter().collect()
    }
}

/// Edge list under construction that remembers which pairs are joined
struct EdgeBuilder<'a> {
    nodes: &'a [String],
    edges: Vec<EdgeSpec>,
    joined: HashSet<(usize, usize)>,
}

impl EdgeBuilder<'_> {
    fn is_joined(&self, u: usize, v: usize) -> bool {
        self.joined.contains(&(u.min(v), u.max(v)))
    }

    fn join(&mut self, rng: &mut impl Rng, u: usize, v: usize) {
        let weight = f64::from(rng.gen_range(1..=MAX_WEIGHT));
        self.joined.insert((u.min(v), u.max(v)));
        self.edges
            .push(EdgeSpec::new(self.nodes[u].clone(), self.nodes[v].clone(), weight));
    }
}

/// Build a connected undirected graph.
///
/// Vertices join one at a time, each attached to a uniformly chosen vertex
/// that is already connected, which yields a random spanning tree. Extra
/// edges are then tried between random vertex pairs.
pub fn random_graph(rng: &mut impl Rng, options: RandomGraphOptions) -> Result<GraphSpec> {
    let n = options.vertices;
    if n > MAX_VERTICES {
        crate::bail_usage!(format!(
            "random graphs have at most {} vertices, got {}",
            MAX_VERTICES, n
        ));
    }
    let nodes: Vec<String> = (0..n).map(vertex_name).collect();
    let mut builder = EdgeBuilder {
        nodes: &nodes,
        edges: Vec::new(),
        joined: HashSet::new(),
    };

    let mut waiting: Vec<usize> = (1..n).collect();
    let mut connected: Vec<usize> = (0..n.min(1)).collect();
    while !waiting.is_empty() {
        let u = connected[rng.gen_range(0..connected.len())];
        let v = waiting.remove(rng.gen_range(0..waiting.len()));
        builder.join(rng, u, v);
        connected.push(v);
    }

    if n > 1 {
        for _ in 0..options.extra_edges {
            let (u, v) = (rng.gen_range(0..n), rng.gen_range(0..n));
            if u != v && !builder.is_joined(u, v) {
                builder.join(rng, u, v);
            }
        }
    }

    let edges = builder.edges;
    tracing::debug!(vertices = n, edges = edges.len(), "random_graph");
    Ok(GraphSpec {
        nodes,
        edges,
        directed: false,
    })
}
