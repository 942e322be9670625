//! Shared plumbing for the DataFusion-backed contexts.

use std::path::Path;
use std::sync::Arc;

use datafusion::arrow::record_batch::RecordBatch;
use datafusion::datasource::file_format::parquet::ParquetFormat;
use datafusion::datasource::listing::ListingOptions;
use datafusion::prelude::{ParquetReadOptions, SessionContext};
use fbench_common::{BenchError, Result, TableBinding};

/// Register `path` under `name` on a DataFusion session.
///
/// The path itself is identical in both modes; only the table provider
/// differs: a lazily-scanned listing source versus one concrete file.
pub(crate) async fn register_dataset(
    ctx: &SessionContext,
    name: &str,
    path: &Path,
    binding: TableBinding,
) -> Result<()> {
    let location: &str = &path.to_string_lossy();
    match binding {
        TableBinding::Listing => {
            let options = ListingOptions::new(Arc::new(ParquetFormat::default()))
                .with_file_extension(".parquet");
            ctx.register_listing_table(name, location, options, None, None)
                .await
                .map_err(|e| {
                    BenchError::Execution(format!("registering listing table {name} failed: {e}"))
                })?;
        }
        TableBinding::File => {
            ctx.register_parquet(name, location, ParquetReadOptions::default())
                .await
                .map_err(|e| {
                    BenchError::Execution(format!("registering parquet table {name} failed: {e}"))
                })?;
        }
    }
    Ok(())
}

/// Run one statement to completion and materialize every batch.
pub(crate) async fn collect_statement(
    ctx: &SessionContext,
    statement: &str,
) -> Result<Vec<RecordBatch>> {
    let df = ctx
        .sql(statement)
        .await
        .map_err(|e| BenchError::Execution(format!("statement submission failed: {e}")))?;
    df.collect()
        .await
        .map_err(|e| BenchError::Execution(format!("result collection failed: {e}")))
}
