//! `algotrace generate` - produce a graph file without writing one by hand
//!
//! Either the eight-vertex lecture graph (`--sample`) or a random connected
//! graph. Random graphs are reproducible from the seed, which is reported
//! with the output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algotrace_core::error::Result;
use algotrace_core::format::escape_quotes;
use algotrace_core::graph::{random_graph, sample_graph, Graph, GraphSpec, RandomGraphOptions};

use crate::cli::format::emit;
use crate::cli::GenerateArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::write_graph_spec;

/// Where a generated graph came from
#[derive(Debug, Clone, Copy)]
enum Source {
    Sample,
    Random(u64),
}

impl Source {
    fn name(self) -> &'static str {
        match self {
            Source::Sample => "sample",
            Source::Random(_) => "random",
        }
    }

    fn seed(self) -> Option<u64> {
        match self {
            Source::Sample => None,
            Source::Random(seed) => Some(seed),
        }
    }

    fn describe(self) -> String {
        match self {
            Source::Sample => "lecture sample graph".to_string(),
            Source::Random(seed) => format!("random graph, seed {}", seed),
        }
    }

    fn records_fields(self) -> String {
        match self {
            Source::Sample => "source=sample".to_string(),
            Source::Random(seed) => format!("source=random seed={}", seed),
        }
    }
}

fn build(args: &GenerateArgs) -> Result<(GraphSpec, Source)> {
    if args.sample {
        return Ok((sample_graph(), Source::Sample));
    }
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let defaults = RandomGraphOptions::default();
    let options = RandomGraphOptions {
        vertices: args.vertices.unwrap_or(defaults.vertices),
        extra_edges: args.extra_edges.unwrap_or(defaults.extra_edges),
    };
    let spec = random_graph(&mut StdRng::seed_from_u64(seed), options)?;
    Ok((spec, Source::Random(seed)))
}

pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let (spec, source) = build(args)?;
    // Same checks a later `trace` of the file will run
    let graph = Graph::from_spec_with_tolerance(&spec, ctx.config.weight_tolerance)?;
    tracing::debug!(
        source = source.name(),
        seed = ?source.seed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "generate"
    );

    match &args.output {
        Some(path) => {
            write_graph_spec(path, &spec)?;
            emit(
                ctx.cli.format,
                || {
                    Ok(serde_json::json!({
                        "status": "written",
                        "path": path.display().to_string(),
                        "source": source.name(),
                        "seed": source.seed(),
                        "vertices": graph.vertex_count(),
                        "edges": graph.edge_count(),
                    }))
                },
                || {
                    println!(
                        "Wrote {} ({} vertices, {} edges) to {}",
                        source.describe(),
                        graph.vertex_count(),
                        graph.edge_count(),
                        path.display()
                    );
                },
                || {
                    println!(
                        "H algotrace=1 records=1 mode=generate {} vertices={} edges={} path={}",
                        source.records_fields(),
                        graph.vertex_count(),
                        graph.edge_count(),
                        path.display()
                    );
                },
            )
        }
        None => {
            let yaml = serde_yaml::to_string(&spec)?;
            emit(
                ctx.cli.format,
                || Ok(serde_json::to_value(&spec)?),
                || {
                    if !ctx.cli.quiet {
                        println!("# {}", source.describe());
                    }
                    print!("{}", yaml);
                },
                || {
                    println!(
                        "H algotrace=1 records=1 mode=generate {} vertices={} edges={}",
                        source.records_fields(),
                        graph.vertex_count(),
                        graph.edge_count()
                    );
                    for vertex in &spec.nodes {
                        println!("N \"{}\"", escape_quotes(vertex));
                    }
                    for edge in &spec.edges {
                        println!("E {} {} {}", edge.from, edge.to, edge.weight);
                    }
                },
            )
        }
    }
}
