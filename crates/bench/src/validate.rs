use std::path::Path;

use fbench_common::{Result, TableBinding};
use fbench_context::{register_tpch_tables, ReferenceContext, SqlEngine};
use tracing::warn;

use crate::fmt::canonical_text;

/// Re-run `statements` on `reference` and compare against `calculated`,
/// the distributed context's already-canonicalized results.
///
/// Counts are checked first: a mismatch fails the query outright with no
/// element-wise comparison. On matching counts every pair is compared in
/// statement order; comparison does not stop at the first mismatch, so
/// each differing pair gets logged.
pub async fn validate_against(
    reference: &dyn SqlEngine,
    statements: &[String],
    calculated: &[String],
) -> Result<bool> {
    let mut expected = Vec::with_capacity(statements.len());
    for statement in statements {
        let batches = reference.sql(statement).await?;
        if batches.iter().map(|b| b.num_rows()).sum::<usize>() == 0 {
            continue;
        }
        expected.push(canonical_text(&batches)?);
    }

    if expected.len() != calculated.len() {
        warn!(
            expected = expected.len(),
            got = calculated.len(),
            "result set count mismatch"
        );
        return Ok(false);
    }

    let mut validated = true;
    for (got, want) in calculated.iter().zip(&expected) {
        if got != want {
            validated = false;
            warn!("result mismatch\nExpected:\n{want}\nGot:\n{got}");
        }
    }
    Ok(validated)
}

/// Validate one query: build a fresh reference engine over the same
/// named tables and binding mode, then compare its answers against the
/// distributed context's.
pub async fn validate_query(
    statements: &[String],
    data_path: &Path,
    binding: TableBinding,
    calculated: &[String],
) -> Result<bool> {
    let reference = ReferenceContext::new();
    register_tpch_tables(&reference, data_path, binding).await?;
    validate_against(&reference, statements, calculated).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use datafusion::arrow::array::Int64Array;
    use datafusion::arrow::datatypes::{DataType, Field, Schema};
    use datafusion::arrow::record_batch::RecordBatch;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    use super::*;

    fn batch(values: &[i64]) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("v", DataType::Int64, false)]));
        RecordBatch::try_new(schema, vec![Arc::new(Int64Array::from(values.to_vec()))]).unwrap()
    }

    /// Reference stand-in that answers each statement from a canned
    /// queue of batch sequences.
    #[derive(Debug)]
    struct CannedEngine {
        answers: Mutex<Vec<Vec<RecordBatch>>>,
    }

    impl CannedEngine {
        fn new(answers: Vec<Vec<RecordBatch>>) -> Self {
            Self {
                answers: Mutex::new(answers),
            }
        }
    }

    impl SqlEngine for CannedEngine {
        fn register_table<'a>(
            &'a self,
            _name: &'a str,
            _path: &'a Path,
            _binding: TableBinding,
        ) -> BoxFuture<'a, Result<()>> {
            async { Ok(()) }.boxed()
        }

        fn sql<'a>(&'a self, _statement: &'a str) -> BoxFuture<'a, Result<Vec<RecordBatch>>> {
            async move {
                let mut answers = self.answers.lock().unwrap();
                Ok(answers.remove(0))
            }
            .boxed()
        }
    }

    fn statements(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("SELECT {i}")).collect()
    }

    #[tokio::test]
    async fn matching_results_validate() {
        let reference = CannedEngine::new(vec![vec![batch(&[1, 2])], vec![batch(&[3])]]);
        let calculated = vec![
            canonical_text(&[batch(&[1, 2])]).unwrap(),
            canonical_text(&[batch(&[3])]).unwrap(),
        ];

        let outcome = validate_against(&reference, &statements(2), &calculated)
            .await
            .unwrap();
        assert!(outcome);
    }

    #[tokio::test]
    async fn empty_reference_results_fail_on_count() {
        // A stub reference producing no rows at all: count mismatch, no
        // element-wise comparison attempted.
        let reference = CannedEngine::new(vec![vec![]]);
        let calculated = vec![canonical_text(&[batch(&[1])]).unwrap()];

        let outcome = validate_against(&reference, &statements(1), &calculated)
            .await
            .unwrap();
        assert!(!outcome);
    }

    #[tokio::test]
    async fn count_comparison_ignores_row_less_statements() {
        // Row-less reference statements are filtered the same way the
        // distributed side's are, so counts still line up.
        let reference = CannedEngine::new(vec![vec![batch(&[])], vec![batch(&[9])]]);
        let calculated = vec![canonical_text(&[batch(&[9])]).unwrap()];

        let outcome = validate_against(&reference, &statements(2), &calculated)
            .await
            .unwrap();
        assert!(outcome);
    }

    #[tokio::test]
    async fn single_mismatch_fails_but_all_pairs_compared() {
        let reference = CannedEngine::new(vec![
            vec![batch(&[1])],
            vec![batch(&[2])],
            vec![batch(&[3])],
        ]);
        let calculated = vec![
            canonical_text(&[batch(&[1])]).unwrap(),
            canonical_text(&[batch(&[99])]).unwrap(),
            canonical_text(&[batch(&[98])]).unwrap(),
        ];

        let outcome = validate_against(&reference, &statements(3), &calculated)
            .await
            .unwrap();
        assert!(!outcome);
        // All canned answers consumed: comparison ran the full list.
        assert!(reference.answers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn physical_batching_differences_do_not_fail_validation() {
        let reference = CannedEngine::new(vec![vec![batch(&[1, 2, 3])]]);
        let calculated =
            vec![canonical_text(&[batch(&[1]), batch(&[2, 3])]).unwrap()];

        let outcome = validate_against(&reference, &statements(1), &calculated)
            .await
            .unwrap();
        assert!(outcome);
    }
}
