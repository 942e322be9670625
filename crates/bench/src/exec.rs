use std::time::{Duration, Instant};

use datafusion::arrow::record_batch::RecordBatch;
use fbench_common::Result;
use fbench_context::SqlEngine;

/// Outcome of one timed query: wall-clock elapsed over all statements,
/// and the collected batches per statement (row-less statements keep
/// their empty slot so callers can line results up with statements).
#[derive(Debug)]
pub struct ExecutionResult {
    pub elapsed: Duration,
    pub statement_batches: Vec<Vec<RecordBatch>>,
}

/// Submit every statement of one query in order and collect all results.
///
/// The timing window spans submission and collection of *all*
/// statements as a single unit. Failures propagate immediately; the
/// harness has no per-query isolation or retry.
pub async fn run_statements(
    engine: &dyn SqlEngine,
    statements: &[String],
) -> Result<ExecutionResult> {
    let start = Instant::now();
    let mut statement_batches = Vec::with_capacity(statements.len());
    for statement in statements {
        statement_batches.push(engine.sql(statement).await?);
    }
    let elapsed = start.elapsed();

    Ok(ExecutionResult {
        elapsed,
        statement_batches,
    })
}
