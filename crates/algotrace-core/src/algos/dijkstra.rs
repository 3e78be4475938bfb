use std::time::Instant;

use crate::algos::shared::{edge_triple, format_set, format_triples};
use crate::error::{Result, TraceError};
use crate::frontier::{FrontierKind, PriorityFrontier};
use crate::graph::{edge_id, Distance, Graph, Incidence};
use crate::trace::{ColorHint, Highlight, Snapshot, StepDraft, StepRecorder, StepTrace};

/// Result of a Dijkstra run: the trace plus the final labels
#[derive(Debug, Clone)]
pub struct DijkstraOutcome {
    pub trace: StepTrace,
    /// Final distance per vertex, in registration order
    pub distances: Vec<(String, Distance)>,
    /// Final predecessor per vertex, in registration order
    pub predecessors: Vec<(String, Option<String>)>,
}

impl DijkstraOutcome {
    pub fn distance(&self, vertex: &str) -> Option<Distance> {
        self.distances
            .iter()
            .find(|(v, _)| v == vertex)
            .map(|(_, d)| *d)
    }
}

/// Working state private to one run
struct DijkstraState<'g> {
    graph: &'g Graph,
    start: usize,
    dist: Vec<Distance>,
    pre: Vec<Option<usize>>,
    labels_ready: bool,
    settled: Vec<usize>,
    frontier: Box<dyn PriorityFrontier<usize>>,
    examining: Vec<(usize, Incidence)>,
    recorder: StepRecorder,
}

impl<'g> DijkstraState<'g> {
    fn new(graph: &'g Graph, start: usize, frontier: FrontierKind) -> Self {
        Self {
            graph,
            start,
            dist: vec![Distance::INFINITY; graph.vertex_count()],
            pre: vec![None; graph.vertex_count()],
            labels_ready: false,
            settled: Vec::new(),
            frontier: frontier.build(),
            examining: Vec::new(),
            recorder: StepRecorder::new(),
        }
    }

    fn name(&self, vertex: usize) -> &'g str {
        self.graph.vertex(vertex)
    }

    /// Accepted snapshot recomputed from the live predecessor map:
    /// the start (once labelled), every vertex with a predecessor, and
    /// every vertex that is someone's predecessor.
    fn snapshot(&self) -> Snapshot {
        let n = self.graph.vertex_count();
        let mut accepted = vec![false; n];
        if self.dist[self.start].is_finite() {
            accepted[self.start] = true;
        }
        let mut edges = Vec::new();
        for v in 0..n {
            if let Some(u) = self.pre[v] {
                accepted[v] = true;
                accepted[u] = true;
                edges.push(edge_id(self.name(u), self.name(v)));
            }
        }
        let nodes = (0..n)
            .filter(|&v| accepted[v])
            .map(|v| self.name(v).to_string())
            .collect();
        Snapshot { nodes, edges }
    }

    /// `Dist = {..}; Pre = {..}; Q = {..}; T = {..}; H = {..}`
    fn state(&self) -> String {
        let (dist, pre) = if self.labels_ready {
            let dist: Vec<String> = (0..self.graph.vertex_count())
                .map(|v| format!("{}:{}", self.name(v), self.dist[v]))
                .collect();
            let pre: Vec<String> = (0..self.graph.vertex_count())
                .map(|v| {
                    let p = self.pre[v].map(|u| self.name(u)).unwrap_or("none");
                    format!("{}:{}", self.name(v), p)
                })
                .collect();
            (dist.join(", "), pre.join(", "))
        } else {
            (String::new(), String::new())
        };
        let queue = self.frontier.pending();
        format!(
            "Dist = {{{}}}; Pre = {{{}}}; Q = {}; T = {}; H = {}",
            dist,
            pre,
            format_set(queue.iter().map(|(v, _)| self.name(*v))),
            format_set(self.settled.iter().map(|&v| self.name(v))),
            format_triples(
                self.graph,
                self.examining.iter().map(|(u, inc)| (*u, inc.neighbor, inc.weight))
            ),
        )
    }

    fn emit(&mut self, draft: StepDraft) {
        let state = self.state();
        let snapshot = self.snapshot();
        self.recorder.record(draft, state, snapshot);
    }

    fn initialize(&mut self) {
        let s = self.name(self.start).to_string();

        self.emit(StepDraft::new(
            "T := ∅",
            "The settled set T starts empty",
            ColorHint::Neutral,
        ));

        self.labels_ready = true;
        self.emit(StepDraft::new(
            "for t ∈ V: Dist[t] := ∞; Pre[t] := none",
            "Every distance starts at ∞ and no vertex has a predecessor",
            ColorHint::Neutral,
        ));

        self.dist[self.start] = Distance::ZERO;
        self.emit(
            StepDraft::new(
                format!("Dist[{s}] := 0"),
                format!("The start vertex {s} is at distance 0 from itself"),
                ColorHint::HighlightNode,
            )
            .highlight(Highlight::nodes(vec![s.clone()])),
        );

        self.frontier.insert(self.start, 0.0);
        self.emit(
            StepDraft::new(
                format!("Q := ∅; put({s}, Q)"),
                format!("Seed the queue Q with the start vertex {s}"),
                ColorHint::HighlightNode,
            )
            .highlight(Highlight::nodes(vec![s])),
        );
    }

    /// One settle iteration: extract, settle, collect H, relax each edge, clear H
    fn settle(&mut self, t: usize) {
        let name = self.name(t).to_string();
        let d = self.dist[t];

        self.emit(
            StepDraft::new(
                format!("t := extract_min(Q) = {name}"),
                format!("Take {name} out of Q; it has the smallest tentative distance ({d})"),
                ColorHint::HighlightNode,
            )
            .highlight(Highlight::nodes(vec![name.clone()])),
        );

        self.settled.push(t);
        self.emit(
            StepDraft::new(
                format!("append(T, {name})"),
                format!("{name} is settled; Dist[{name}] = {d} is final"),
                ColorHint::AcceptNode,
            )
            .highlight(Highlight::nodes(vec![name.clone()])),
        );

        self.collect_incident(t);

        let edges = self.examining.clone();
        for (u, incidence) in edges {
            self.relax(u, incidence);
        }

        self.examining.clear();
        self.emit(StepDraft::new(
            "H := ∅",
            format!("Done with the edges of {name}"),
            ColorHint::Reset,
        ));
    }

    fn collect_incident(&mut self, t: usize) {
        let name = self.name(t).to_string();
        self.examining = self
            .graph
            .incident(t)
            .iter()
            .map(|inc| (t, *inc))
            .collect();

        let (pseudocode, relation) = if self.graph.is_directed() {
            (format!("H := {{e ∈ E : e.from = {name}}}"), "leaving")
        } else {
            (format!("H := {{e ∈ E : {name} ∈ e}}"), "touching")
        };
        let explanation = if self.examining.is_empty() {
            format!("No edges {relation} {name}; nothing to relax")
        } else {
            let listed: Vec<String> = self
                .examining
                .iter()
                .map(|(u, inc)| edge_triple(self.graph, *u, inc.neighbor, inc.weight))
                .collect();
            format!("Edges {relation} {name}: {}", listed.join(", "))
        };
        let ids = self
            .examining
            .iter()
            .map(|(u, inc)| edge_id(self.name(*u), self.name(inc.neighbor)))
            .collect();

        self.emit(
            StepDraft::new(pseudocode, explanation, ColorHint::HighlightEdges)
                .highlight(Highlight::edges(ids)),
        );
    }

    fn relax(&mut self, u: usize, incidence: Incidence) {
        let v = incidence.neighbor;
        let w = incidence.weight;
        let (un, vn) = (self.name(u).to_string(), self.name(v).to_string());
        let highlight = Highlight {
            nodes: vec![vn.clone()],
            edges: vec![edge_id(&un, &vn)],
        };

        self.emit(
            StepDraft::new(
                format!("consider {}", edge_triple(self.graph, u, v, w)),
                format!("Would reaching {vn} through {un} be shorter?"),
                ColorHint::ConsiderEdge,
            )
            .highlight(highlight.clone()),
        );

        let old = self.dist[v];
        let candidate = self.dist[u] + w;
        if old > candidate {
            self.dist[v] = candidate;
            self.pre[v] = Some(u);
            self.frontier.insert(v, candidate.value());
            self.emit(
                StepDraft::new(
                    format!("Dist[{vn}] := min({old}, {} + {w}) = {candidate}; Pre[{vn}] := {un}", self.dist[u]),
                    format!("Shorter path to {vn} found through {un}: Dist[{vn}] = {candidate}"),
                    ColorHint::AcceptEdge,
                )
                .highlight(highlight),
            );
        } else {
            self.emit(
                StepDraft::new(
                    format!("Dist[{vn}] = {old} ≤ Dist[{un}] + {w} = {candidate}"),
                    format!("Going through {un} does not improve Dist[{vn}]"),
                    ColorHint::Unchanged,
                )
                .highlight(highlight),
            );
        }
    }

    fn into_outcome(self) -> DijkstraOutcome {
        let graph = self.graph;
        let distances = (0..graph.vertex_count())
            .map(|v| (graph.vertex(v).to_string(), self.dist[v]))
            .collect();
        let predecessors = (0..graph.vertex_count())
            .map(|v| {
                (
                    graph.vertex(v).to_string(),
                    self.pre[v].map(|u| graph.vertex(u).to_string()),
                )
            })
            .collect();
        DijkstraOutcome {
            trace: self.recorder.finish(),
            distances,
            predecessors,
        }
    }
}

/// Trace Dijkstra's shortest-path algorithm from `start`.
///
/// Emits four initialization steps, then per settled vertex: extract,
/// settle, collect incident edges, consider/relax each edge, reset.
/// Unreachable vertices keep `Dist = ∞` and never become accepted.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra_trace(graph: &Graph, start: &str, frontier: FrontierKind) -> Result<DijkstraOutcome> {
    let begin = Instant::now();
    let start_index = graph
        .index_of(start)
        .ok_or_else(|| TraceError::invalid_start(start))?;

    let mut state = DijkstraState::new(graph, start_index, frontier);
    state.initialize();

    let mut iteration = 0;
    while let Some((t, _)) = state.frontier.extract_min() {
        iteration += 1;
        state.recorder.begin_major(iteration);
        state.settle(t);
    }

    tracing::debug!(
        settled = state.settled.len(),
        steps = state.recorder.len(),
        "dijkstra_done"
    );
    crate::trace_time!(begin, "dijkstra_trace");
    Ok(state.into_outcome())
}
