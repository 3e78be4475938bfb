use super::{PageView, TraceRun};
use algotrace_core::format::escape_quotes;
use algotrace_core::trace::Step;

/// Comma-joined list, `-` when empty
fn csv(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(",")
    }
}

/// `S` (step) and `A` (accepted snapshot) lines for one step
pub fn step_lines(step: &Step) -> [String; 2] {
    [
        format!(
            "S {} {} hl_nodes={} hl_edges={} \"{}\" \"{}\"",
            step.id,
            step.color_hint,
            csv(&step.highlight.nodes),
            csv(&step.highlight.edges),
            escape_quotes(&step.pseudocode),
            escape_quotes(&step.explanation)
        ),
        format!(
            "A {} nodes={} edges={}",
            step.id,
            csv(&step.accepted_nodes),
            csv(&step.accepted_edges)
        ),
    ]
}

/// Output in records format
pub fn output_records(run: &TraceRun, view: &PageView<'_>) {
    println!(
        "H algotrace=1 records=1 graph={} mode=trace algo={} start={} steps={} page_size={} pages={}",
        run.graph,
        run.algorithm,
        run.start.as_deref().unwrap_or("-"),
        run.trace.len(),
        view.page_size,
        view.page_count
    );
    for (_, steps) in &view.pages {
        for step in *steps {
            for line in step_lines(step) {
                println!("{}", line);
            }
        }
    }
}
