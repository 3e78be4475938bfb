//! `algotrace trace` - print the step trace of an algorithm run

pub mod human;
mod json;
pub mod records;

use algotrace_core::algos::{default_start, Algorithm};
use algotrace_core::error::{Result, TraceError};
use algotrace_core::store::GraphId;
use algotrace_core::trace::{Step, StepTrace};

use crate::cli::format::emit;
use crate::cli::{RunArgs, TraceArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::load::register_file;

/// A trace together with what produced it
pub struct TraceRun {
    pub graph: GraphId,
    pub algorithm: Algorithm,
    /// Start vertex as given, else the graph's first vertex; `None` for prim
    pub start: Option<String>,
    pub trace: StepTrace,
}

/// Register the graph file and trace it, as `trace` and `play` both do
pub fn run_trace(ctx: &CommandContext, run: &RunArgs) -> Result<TraceRun> {
    let mut store = ctx.store(run.frontier);
    let (id, graph) = register_file(&mut store, &run.graph)?;
    let trace = store.trace(&id, run.algo, run.start.as_deref())?;
    let start = run
        .start
        .clone()
        .or_else(|| default_start(&graph).map(str::to_string))
        .filter(|_| run.algo.needs_start());
    tracing::debug!(
        graph = %id,
        algorithm = %run.algo,
        steps = trace.len(),
        elapsed = ?ctx.start.elapsed(),
        "trace_ready"
    );
    Ok(TraceRun {
        graph: id,
        algorithm: run.algo,
        start,
        trace,
    })
}

/// Selected slice of the trace: `(1-based page number, steps)` pairs
pub struct PageView<'a> {
    pub page_size: usize,
    pub page_count: usize,
    /// Page requested with `--page`, if any
    pub selected: Option<usize>,
    pub pages: Vec<(usize, &'a [Step])>,
}

fn select_pages(trace: &StepTrace, page_size: usize, page: Option<usize>) -> Result<PageView<'_>> {
    if page_size == 0 {
        return Err(TraceError::invalid_value("page size", page_size));
    }
    let page_count = trace.page_count(page_size);
    let pages = match page {
        None => trace
            .pages(page_size)
            .enumerate()
            .map(|(i, steps)| (i + 1, steps))
            .collect(),
        Some(number) => {
            let steps = number
                .checked_sub(1)
                .and_then(|k| trace.page(k, page_size))
                .ok_or_else(|| TraceError::invalid_value("page", number))?;
            vec![(number, steps)]
        }
    };
    Ok(PageView {
        page_size,
        page_count,
        selected: page,
        pages,
    })
}

pub fn execute(ctx: &CommandContext, args: &TraceArgs) -> Result<()> {
    let run = run_trace(ctx, &args.run)?;
    let page_size = args.page_size.unwrap_or(ctx.config.page_size);
    let view = select_pages(&run.trace, page_size, args.page)?;

    emit(
        ctx.cli.format,
        || json::envelope(&run, &view),
        || human::output_human(ctx.cli, &run, &view),
        || records::output_records(&run, &view),
    )
}
