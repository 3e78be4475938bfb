//! Graph model: canonical vertices, edges and adjacency

pub mod generate;
pub mod model;
pub mod types;

pub use generate::{random_graph, sample_graph, RandomGraphOptions};
pub use model::{Edge, EdgeSpec, Graph, GraphSpec, Incidence};
pub use types::{canonicalize_id, edge_id, Distance};
