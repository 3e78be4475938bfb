use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TraceError;

/// Position of a step: `major.minor`.
///
/// Major 0 is initialization; major `k` is the k-th loop iteration. Minor
/// counts steps within a major group, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId {
    pub major: u32,
    pub minor: u32,
}

impl StepId {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for StepId {
    type Err = TraceError;

    /// Accepts `"major.minor"` or a flat `"index"` (minor 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| TraceError::invalid_value("step id", s))
        };
        match s.split_once('.') {
            Some((major, minor)) => Ok(StepId::new(parse(major)?, parse(minor)?)),
            None => Ok(StepId::new(parse(s)?, 0)),
        }
    }
}

impl Serialize for StepId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StepId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Advisory styling hint. Consumers may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorHint {
    Neutral,
    HighlightNode,
    AcceptNode,
    HighlightEdges,
    ConsiderEdge,
    AcceptEdge,
    Unchanged,
    Reset,
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorHint::Neutral => "neutral",
            ColorHint::HighlightNode => "highlight-node",
            ColorHint::AcceptNode => "accept-node",
            ColorHint::HighlightEdges => "highlight-edges",
            ColorHint::ConsiderEdge => "consider-edge",
            ColorHint::AcceptEdge => "accept-edge",
            ColorHint::Unchanged => "unchanged",
            ColorHint::Reset => "reset",
        };
        f.write_str(s)
    }
}

/// Elements under examination at a step; never part of the solution
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn nodes(nodes: Vec<String>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn edges(edges: Vec<String>) -> Self {
        Self {
            nodes: Vec::new(),
            edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Complete solution-so-far at the moment a step was emitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

/// One self-describing step of an algorithm trace.
///
/// `accepted_nodes`/`accepted_edges` hold the full accepted snapshot, so any
/// step can be rendered without looking at the steps before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: StepId,
    pub pseudocode: String,
    pub explanation: String,
    pub state: String,
    pub color_hint: ColorHint,
    pub highlight: Highlight,
    pub accepted_nodes: Vec<String>,
    pub accepted_edges: Vec<String>,
}
