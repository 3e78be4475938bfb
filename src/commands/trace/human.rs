use super::{PageView, TraceRun};
use crate::cli::Cli;
use algotrace_core::trace::Step;

/// `{a, b}`, or `{}` when empty
pub fn braced(items: &[String]) -> String {
    format!("{{{}}}", items.join(", "))
}

/// One step as an indented block
pub fn print_step(cli: &Cli, step: &Step) {
    println!("{:>6}  {}", step.id.to_string(), step.pseudocode);
    if cli.quiet {
        return;
    }
    println!("        {}", step.explanation);
    println!("        state: {}", step.state);
    println!(
        "        accepted: nodes {} edges {}",
        braced(&step.accepted_nodes),
        braced(&step.accepted_edges)
    );
    if !step.highlight.is_empty() {
        println!(
            "        considering: nodes {} edges {}",
            braced(&step.highlight.nodes),
            braced(&step.highlight.edges)
        );
    }
}

/// Output in human-readable format
pub fn output_human(cli: &Cli, run: &TraceRun, view: &PageView<'_>) {
    let from = run
        .start
        .as_ref()
        .map(|s| format!(" from {}", s))
        .unwrap_or_default();
    println!(
        "{}{}: {} steps in {} page(s) of {}",
        run.algorithm,
        from,
        run.trace.len(),
        view.page_count,
        view.page_size
    );

    if run.trace.is_empty() {
        if !cli.quiet {
            println!("Graph has no vertices; nothing to trace");
        }
        return;
    }

    for (number, steps) in &view.pages {
        println!();
        println!("page {}/{}", number, view.page_count);
        for step in *steps {
            print_step(cli, step);
        }
    }
}
