//! `algotrace validate` - check a graph file without tracing it

use crate::cli::format::emit;
use crate::cli::ValidateArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::register_file;
use algotrace_core::error::Result;
use algotrace_core::format::escape_quotes;

pub fn execute(ctx: &CommandContext, args: &ValidateArgs) -> Result<()> {
    let cli = ctx.cli;
    let mut store = ctx.store(None);
    let (id, graph) = register_file(&mut store, &args.graph)?;
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };

    emit(
        cli.format,
        || {
            let edges: Vec<_> = graph
                .edges()
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id(),
                        "from": e.from,
                        "to": e.to,
                        "weight": e.weight,
                    })
                })
                .collect();
            Ok(serde_json::json!({
                "status": "valid",
                "graph": id.as_str(),
                "directed": graph.is_directed(),
                "vertices": graph.vertices(),
                "edges": edges,
                "mergedDuplicates": graph.merged_duplicates(),
            }))
        },
        || {
            println!(
                "valid {} graph: {} vertices, {} edges",
                kind,
                graph.vertex_count(),
                graph.edge_count()
            );
            if graph.merged_duplicates() > 0 && !cli.quiet {
                println!("merged {} duplicate edge(s)", graph.merged_duplicates());
            }
        },
        || {
            println!(
                "H algotrace=1 records=1 graph={} mode=validate status=valid kind={} vertices={} edges={} merged={}",
                id,
                kind,
                graph.vertex_count(),
                graph.edge_count(),
                graph.merged_duplicates()
            );
            for vertex in graph.vertices() {
                println!("N \"{}\"", escape_quotes(vertex));
            }
            for edge in graph.edges() {
                println!("E {} {} {} {}", edge.id(), edge.from, edge.to, edge.weight);
            }
        },
    )
}
