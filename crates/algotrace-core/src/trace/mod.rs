//! Step traces: the ordered, immutable output of a tracer run

mod recorder;
mod step;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;

pub(crate) use recorder::{StepDraft, StepRecorder};
pub use step::{ColorHint, Highlight, Snapshot, Step, StepId};

/// Ordered sequence of steps for one (graph, start) run.
///
/// Fully materialized before playback; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Split into groups of `size` steps (a size of 0 is treated as 1)
    pub fn pages(&self, size: usize) -> std::slice::Chunks<'_, Step> {
        self.steps.chunks(size.max(1))
    }

    /// The `page`-th group of `size` steps, if any
    pub fn page(&self, page: usize, size: usize) -> Option<&[Step]> {
        self.pages(size).nth(page)
    }

    pub fn page_count(&self, size: usize) -> usize {
        self.steps.len().div_ceil(size.max(1))
    }

    /// Transport form: steps grouped into pages
    pub fn paged(&self, size: usize) -> PagedTrace {
        PagedTrace {
            pages: self.pages(size).map(<[Step]>::to_vec).collect(),
        }
    }

    /// Reassemble a trace from pages delivered in order
    pub fn from_pages(pages: Vec<Vec<Step>>) -> Self {
        Self::new(pages.into_iter().flatten().collect())
    }

    /// SHA-256 over the JSON serialization, hex encoded
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(&self.steps)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A trace delivered in fixed-size groups: `{ "pages": [[Step, ...], ...] }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagedTrace {
    pub pages: Vec<Vec<Step>>,
}

impl PagedTrace {
    pub fn into_trace(self) -> StepTrace {
        StepTrace::from_pages(self.pages)
    }
}

impl From<&StepTrace> for PagedTrace {
    fn from(trace: &StepTrace) -> Self {
        trace.paged(DEFAULT_PAGE_SIZE)
    }
}
