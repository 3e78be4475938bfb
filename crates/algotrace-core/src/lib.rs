//! Algotrace Core Library
//!
//! Step-by-step traces of Dijkstra's and Prim's algorithms, and a playback
//! controller that replays them from per-step snapshots.

pub mod algos;
pub mod config;
pub mod error;
pub mod format;
pub mod frontier;
pub mod graph;
pub mod logging;
pub mod playback;
pub mod store;
pub mod trace;
