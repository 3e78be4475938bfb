//! Configuration type definitions

use crate::frontier::FrontierKind;
use serde::{Deserialize, Serialize};

/// Default delay between playback steps, in milliseconds
pub const DEFAULT_PLAYBACK_DELAY_MS: u64 = 1000;

/// Default number of steps per delivered page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Default tolerance when comparing edge weights for duplicate merging
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-9;

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Delay between automatically applied playback steps
    #[serde(default = "default_playback_delay_ms")]
    pub playback_delay_ms: u64,

    /// Steps per page when a trace is delivered in groups
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Weights closer than this are considered equal when merging duplicate edges
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,

    /// Frontier implementation used by the tracers
    #[serde(default)]
    pub frontier: FrontierKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playback_delay_ms: default_playback_delay_ms(),
            page_size: default_page_size(),
            weight_tolerance: default_weight_tolerance(),
            frontier: FrontierKind::default(),
        }
    }
}

fn default_playback_delay_ms() -> u64 {
    DEFAULT_PLAYBACK_DELAY_MS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}
