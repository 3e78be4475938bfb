use super::step::{ColorHint, Highlight, Snapshot, Step, StepId};
use super::StepTrace;

/// Text and highlight of a step that is about to be emitted
#[derive(Debug, Clone)]
pub struct StepDraft {
    pseudocode: String,
    explanation: String,
    color: ColorHint,
    highlight: Highlight,
}

impl StepDraft {
    pub fn new(
        pseudocode: impl Into<String>,
        explanation: impl Into<String>,
        color: ColorHint,
    ) -> Self {
        Self {
            pseudocode: pseudocode.into(),
            explanation: explanation.into(),
            color,
            highlight: Highlight::none(),
        }
    }

    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Accumulates steps and numbers them `major.minor`
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    major: u32,
    minor: u32,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new major group; the next recorded step gets minor 1
    pub fn begin_major(&mut self, major: u32) {
        self.major = major;
        self.minor = 0;
    }

    /// Append a step with the state dump and accepted snapshot taken now
    pub fn record(&mut self, draft: StepDraft, state: String, snapshot: Snapshot) {
        self.minor += 1;
        self.steps.push(Step {
            id: StepId::new(self.major, self.minor),
            pseudocode: draft.pseudocode,
            explanation: draft.explanation,
            state,
            color_hint: draft.color,
            highlight: draft.highlight,
            accepted_nodes: snapshot.nodes,
            accepted_edges: snapshot.edges,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn finish(self) -> StepTrace {
        StepTrace::new(self.steps)
    }
}
