use std::fmt;

/// Canonical form of a vertex identifier: trimmed and lower-cased.
///
/// Applied once at ingestion; everything downstream compares canonical ids.
pub fn canonicalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonical edge identifier `"{from}-{to}"`
pub fn edge_id(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

/// Tentative path length during shortest-path search.
///
/// Starts at infinity for every vertex; only the start vertex and vertices
/// reached through relaxation ever become finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const INFINITY: Distance = Distance(f64::INFINITY);
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<f64> for Distance {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "∞")
        }
    }
}
