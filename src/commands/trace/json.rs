use super::{PageView, TraceRun};
use algotrace_core::error::Result;
use serde_json::Value;

/// The pages envelope. Keys are camelCase like the steps inside it:
/// `{ graph, algorithm, start, steps, fingerprint, pageSize, pageCount, pages, [page] }`
pub fn envelope(run: &TraceRun, view: &PageView<'_>) -> Result<Value> {
    let pages: Vec<_> = view.pages.iter().map(|(_, steps)| *steps).collect();
    let fingerprint = run.trace.fingerprint()?;
    let mut output = serde_json::json!({
        "graph": run.graph.as_str(),
        "algorithm": run.algorithm,
        "start": run.start,
        "steps": run.trace.len(),
        "fingerprint": fingerprint,
        "pageSize": view.page_size,
        "pageCount": view.page_count,
        "pages": pages,
    });
    if let Some(number) = view.selected {
        output["page"] = serde_json::json!(number);
    }
    Ok(output)
}
