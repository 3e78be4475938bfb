use super::parse::{parse_algorithm, parse_frontier};
use algotrace_core::algos::Algorithm;
use algotrace_core::frontier::FrontierKind;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Graph file (.json, .yaml or .yml)
    pub graph: PathBuf,
}

/// Arguments shared by `trace` and `play`
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Graph file (.json, .yaml or .yml)
    pub graph: PathBuf,

    /// Algorithm to trace (dijkstra, prim)
    #[arg(long, short = 'a', value_parser = parse_algorithm, default_value = "dijkstra")]
    pub algo: Algorithm,

    /// Start vertex (dijkstra only; prim starts at the first vertex)
    #[arg(long, short)]
    pub start: Option<String>,

    /// Frontier implementation (linear, heap); defaults to the config value
    #[arg(long, value_parser = parse_frontier)]
    pub frontier: Option<FrontierKind>,
}

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Steps per page; defaults to the config value
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print only this page (1-based)
    #[arg(long)]
    pub page: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Delay between steps in milliseconds; defaults to the config value
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Jump to this step index before playing
    #[arg(long)]
    pub seek: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Emit the eight-vertex lecture graph instead of a random one
    #[arg(long, conflicts_with_all = ["seed", "vertices", "extra_edges"])]
    pub sample: bool,

    /// Seed for the random graph; drawn and reported when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of vertices, named a, b, c, ... [default: 8]
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Extra edges tried after the spanning tree [default: 6]
    #[arg(long)]
    pub extra_edges: Option<usize>,

    /// Write the graph to this file (.json, .yaml or .yml) instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
