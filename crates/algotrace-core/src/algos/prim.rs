use std::time::Instant;

use crate::algos::shared::{edge_triple, format_set, format_triples};
use crate::error::Result;
use crate::frontier::{FrontierKind, PriorityFrontier};
use crate::graph::Graph;
use crate::trace::{ColorHint, Highlight, Snapshot, StepDraft, StepRecorder, StepTrace};

/// Result of a Prim run: the trace plus the spanning forest it grew
#[derive(Debug, Clone)]
pub struct PrimOutcome {
    pub trace: StepTrace,
    /// Vertices in the order they joined the tree
    pub reached: Vec<String>,
    /// Stored ids of the selected edges, in selection order
    pub tree_edges: Vec<String>,
    pub total_weight: f64,
}

/// An edge discovered from inside the tree, oriented inside → outside
#[derive(Debug, Clone, Copy)]
struct Candidate {
    edge: usize,
    from: usize,
    to: usize,
    weight: f64,
}

struct PrimState<'g> {
    graph: &'g Graph,
    in_tree: Vec<bool>,
    reached: Vec<usize>,
    tree_edges: Vec<usize>,
    total_weight: f64,
    candidates: Vec<Candidate>,
    frontier: Box<dyn PriorityFrontier<usize>>,
    recorder: StepRecorder,
}

impl<'g> PrimState<'g> {
    fn new(graph: &'g Graph, frontier: FrontierKind) -> Self {
        Self {
            graph,
            in_tree: vec![false; graph.vertex_count()],
            reached: Vec::new(),
            tree_edges: Vec::new(),
            total_weight: 0.0,
            candidates: Vec::new(),
            frontier: frontier.build(),
            recorder: StepRecorder::new(),
        }
    }

    fn name(&self, vertex: usize) -> &'g str {
        self.graph.vertex(vertex)
    }

    fn edge_name(&self, edge: usize) -> String {
        self.graph.edges()[edge].id()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: (0..self.graph.vertex_count())
                .filter(|&v| self.in_tree[v])
                .map(|v| self.name(v).to_string())
                .collect(),
            edges: self.tree_edges.iter().map(|&e| self.edge_name(e)).collect(),
        }
    }

    /// `T = {..}; F = {..}; MST = {..}; W = ..`
    fn state(&self) -> String {
        let pending = self.frontier.pending();
        let tree: Vec<String> = self.tree_edges.iter().map(|&e| self.edge_name(e)).collect();
        format!(
            "T = {}; F = {}; MST = {}; W = {}",
            format_set(self.reached.iter().map(|&v| self.name(v))),
            format_triples(
                self.graph,
                pending.iter().map(|(c, _)| {
                    let c = self.candidates[*c];
                    (c.from, c.to, c.weight)
                })
            ),
            format_set(tree.iter().map(String::as_str)),
            self.total_weight,
        )
    }

    fn emit(&mut self, draft: StepDraft) {
        let state = self.state();
        let snapshot = self.snapshot();
        self.recorder.record(draft, state, snapshot);
    }

    fn add_node(&mut self, vertex: usize) {
        self.in_tree[vertex] = true;
        self.reached.push(vertex);
        let name = self.name(vertex).to_string();
        self.emit(
            StepDraft::new(
                format!("append(T, {name})"),
                format!("{name} joins the spanning tree"),
                ColorHint::AcceptNode,
            )
            .highlight(Highlight::nodes(vec![name])),
        );
    }

    /// Push every edge from `vertex` to a vertex outside the tree, one
    /// "considering" step per insertion
    fn discover(&mut self, vertex: usize) {
        let graph = self.graph;
        for incidence in graph.incident(vertex) {
            if self.in_tree[incidence.neighbor] {
                continue;
            }
            let candidate = Candidate {
                edge: incidence.edge,
                from: vertex,
                to: incidence.neighbor,
                weight: incidence.weight,
            };
            let id = self.candidates.len();
            self.candidates.push(candidate);
            self.frontier.insert(id, candidate.weight);

            let triple = edge_triple(graph, vertex, candidate.to, candidate.weight);
            let far = self.name(candidate.to).to_string();
            self.emit(
                StepDraft::new(
                    format!("put({triple}, F)"),
                    format!("{triple} leads outside the tree; it becomes a candidate"),
                    ColorHint::ConsiderEdge,
                )
                .highlight(Highlight {
                    nodes: vec![far],
                    edges: vec![self.edge_name(candidate.edge)],
                }),
            );
        }
    }

    /// Select a candidate whose far endpoint is outside the tree
    fn grow(&mut self, candidate: Candidate) {
        let new_node = if self.in_tree[candidate.from] {
            candidate.to
        } else {
            candidate.from
        };
        let triple = edge_triple(self.graph, candidate.from, candidate.to, candidate.weight);
        let new_name = self.name(new_node).to_string();

        self.emit(
            StepDraft::new(
                format!("(u,v,w) := extract_min(F) = {triple}"),
                format!("{triple} is the lightest edge leaving the tree; it brings in {new_name}"),
                ColorHint::AcceptEdge,
            )
            .highlight(Highlight {
                nodes: vec![new_name],
                edges: vec![self.edge_name(candidate.edge)],
            }),
        );

        self.tree_edges.push(candidate.edge);
        self.total_weight += candidate.weight;
        self.add_node(new_node);
        self.discover(new_node);
    }

    fn into_outcome(self) -> PrimOutcome {
        PrimOutcome {
            reached: self.reached.iter().map(|&v| self.name(v).to_string()).collect(),
            tree_edges: self.tree_edges.iter().map(|&e| self.edge_name(e)).collect(),
            total_weight: self.total_weight,
            trace: self.recorder.finish(),
        }
    }
}

/// Trace Prim's minimum-spanning-tree algorithm.
///
/// The tree grows from the first registered vertex. Candidates whose both
/// endpoints are already in the tree are dropped without a step. On a
/// disconnected graph the result spans only the start's component.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn prim_trace(graph: &Graph, frontier: FrontierKind) -> Result<PrimOutcome> {
    let begin = Instant::now();
    let mut state = PrimState::new(graph, frontier);
    if graph.vertex_count() == 0 {
        return Ok(state.into_outcome());
    }

    state.add_node(0);
    state.discover(0);

    let mut iteration = 0;
    while let Some((id, _)) = state.frontier.extract_min() {
        let candidate = state.candidates[id];
        if state.in_tree[candidate.from] && state.in_tree[candidate.to] {
            tracing::trace!(edge = %state.edge_name(candidate.edge), "stale_candidate");
            continue;
        }
        iteration += 1;
        state.recorder.begin_major(iteration);
        state.grow(candidate);
    }

    tracing::debug!(
        reached = state.reached.len(),
        steps = state.recorder.len(),
        "prim_done"
    );
    crate::trace_time!(begin, "prim_trace");
    Ok(state.into_outcome())
}
