use std::path::PathBuf;
use std::time::Duration;

use fbench_common::{BenchConfig, Result};
use fbench_context::{register_tpch_tables, DistributedContext, SqlEngine};
use tracing::info;

use crate::exec::run_statements;
use crate::fmt::canonicalize_results;
use crate::queries::split_statements;
use crate::report::ReportWriter;
use crate::validate::validate_query;

/// Fixed pause after the last query so the execution context can release
/// cluster resources before shutdown. No queries execute after this
/// point.
pub const DRAIN_DELAY: Duration = Duration::from_secs(3);

/// Top-level benchmark control flow: connect the distributed context,
/// register the dataset, run the query list in order, and report.
#[derive(Debug)]
pub struct BenchmarkDriver {
    config: BenchConfig,
    data_path: PathBuf,
    queries: Vec<(String, String)>,
    output_dir: PathBuf,
    drain_delay: Duration,
}

impl BenchmarkDriver {
    pub fn new(
        config: BenchConfig,
        data_path: PathBuf,
        queries: Vec<(String, String)>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            config,
            data_path,
            queries,
            output_dir,
            drain_delay: DRAIN_DELAY,
        }
    }

    /// Replace the post-run drain pause. Embedded contexts with nothing
    /// to release can drain immediately.
    pub fn with_drain_delay(mut self, drain_delay: Duration) -> Self {
        self.drain_delay = drain_delay;
        self
    }

    /// Run the whole benchmark. Returns `true` when every validated
    /// query matched the reference engine (trivially `true` when
    /// validation is disabled); fatal execution errors abort the
    /// remaining run.
    pub async fn run(self) -> Result<bool> {
        let engine = DistributedContext::try_new(&self.config)?;
        register_tpch_tables(&engine, &self.data_path, self.config.binding).await?;

        let mut writer = ReportWriter::new(
            &self.config,
            self.data_path.to_string_lossy().to_string(),
            &self.output_dir,
        )?;
        info!(path = %writer.path().display(), "writing results");

        let outcome = self.run_queries(&engine, &mut writer).await;
        match outcome {
            Ok(()) => {
                info!(
                    "benchmark complete; pausing {:?} for the cluster to release resources",
                    self.drain_delay
                );
                tokio::time::sleep(self.drain_delay).await;
                engine.shutdown().await?;
                Ok(!writer.any_validation_failures())
            }
            Err(e) => {
                // Best-effort release on the failure path; the original
                // error is the one worth surfacing.
                let _ = engine.shutdown().await;
                Err(e)
            }
        }
    }

    async fn run_queries(&self, engine: &dyn SqlEngine, writer: &mut ReportWriter) -> Result<()> {
        for (query_id, sql) in &self.queries {
            info!(query = %query_id, "executing {sql}");

            let statements = split_statements(sql);
            let result = run_statements(engine, &statements).await?;
            let calculated = canonicalize_results(&result.statement_batches)?;
            for rendered in &calculated {
                info!("\n{rendered}");
            }

            let outcome = if self.config.validate {
                Some(
                    validate_query(&statements, &self.data_path, self.config.binding, &calculated)
                        .await?,
                )
            } else {
                None
            };

            writer.record(query_id, result.elapsed, outcome)?;
            info!(query = %query_id, "done with query");
        }
        Ok(())
    }
}
