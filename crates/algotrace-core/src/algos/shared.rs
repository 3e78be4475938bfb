//! Formatting helpers shared by the tracers' state dumps

use crate::graph::Graph;

/// `{a, b, c}`
pub fn format_set<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = items.into_iter().collect();
    format!("{{{}}}", joined.join(", "))
}

/// `(u,v,w)` edge triple as written in pseudocode
pub fn edge_triple(graph: &Graph, from: usize, to: usize, weight: f64) -> String {
    format!("({},{},{})", graph.vertex(from), graph.vertex(to), weight)
}

/// `{(a,b,1), (a,c,5)}`
pub fn format_triples(graph: &Graph, triples: impl IntoIterator<Item = (usize, usize, f64)>) -> String {
    let parts: Vec<String> = triples
        .into_iter()
        .map(|(from, to, weight)| edge_triple(graph, from, to, weight))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
