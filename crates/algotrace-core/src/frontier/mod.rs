//! Pending-item containers with deterministic minimum extraction.
//!
//! Both tracers pull their next item from a [`PriorityFrontier`]. Ordering is
//! by key, ties broken by the sequence in which an item was first inserted,
//! so the first-discovered item wins. A decrease-key keeps that sequence.

mod heap;
mod linear;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

pub use heap::{HeapEntry, HeapFrontier};
pub use linear::LinearFrontier;

/// Extract-min container shared by the Dijkstra and Prim tracers
pub trait PriorityFrontier<T> {
    /// Insert `item` with `key`.
    ///
    /// An item already pending is treated as a decrease-key.
    fn insert(&mut self, item: T, key: f64);

    /// Lower the key of a pending item. Returns false when the item is
    /// absent or `key` is not lower than its current key.
    fn decrease_key(&mut self, item: &T, key: f64) -> bool;

    /// Remove and return the pending item with the smallest `(key, sequence)`
    fn extract_min(&mut self) -> Option<(T, f64)>;

    fn contains(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending items with their keys, in first-insertion order
    fn pending(&self) -> Vec<(T, f64)>;
}

/// Selects a frontier implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierKind {
    /// Linear scan; plenty for teaching-sized graphs
    #[default]
    Linear,
    /// Binary heap with lazy invalidation
    Heap,
}

impl FrontierKind {
    pub fn build<T>(self) -> Box<dyn PriorityFrontier<T>>
    where
        T: Copy + Eq + Hash + 'static,
    {
        match self {
            FrontierKind::Linear => Box::new(LinearFrontier::new()),
            FrontierKind::Heap => Box::new(HeapFrontier::new()),
        }
    }
}

impl FromStr for FrontierKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(FrontierKind::Linear),
            "heap" => Ok(FrontierKind::Heap),
            other => Err(TraceError::invalid_value("frontier", other)),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierKind::Linear => write!(f, "linear"),
            FrontierKind::Heap => write!(f, "heap"),
        }
    }
}
