use datafusion::arrow::record_batch::RecordBatch;
use datafusion::arrow::util::pretty::pretty_format_batches;
use fbench_common::{BenchError, Result};

/// Canonical, comparable rendering of one statement's result set.
///
/// All batches of the statement are rendered as one table, so the same
/// logical rows canonicalize identically no matter how the engine chose
/// to slice them into physical batches. Both the distributed context's
/// and the reference engine's results go through this same function.
pub fn canonical_text(batches: &[RecordBatch]) -> Result<String> {
    let table = pretty_format_batches(batches)
        .map_err(|e| BenchError::Execution(format!("formatting result batches failed: {e}")))?;
    Ok(table.to_string())
}

/// Canonical renderings for the row-yielding statements of one query, in
/// statement order. Statements that produced no rows contribute nothing
/// here (they still counted toward the timing window).
pub fn canonicalize_results(statement_batches: &[Vec<RecordBatch>]) -> Result<Vec<String>> {
    let mut rendered = Vec::with_capacity(statement_batches.len());
    for batches in statement_batches {
        if batches.iter().map(RecordBatch::num_rows).sum::<usize>() == 0 {
            continue;
        }
        rendered.push(canonical_text(batches)?);
    }
    Ok(rendered)
}
