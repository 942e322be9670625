use std::fmt::Debug;
use std::path::Path;

use datafusion::arrow::record_batch::RecordBatch;
use fbench_common::{Result, TableBinding};
use futures::future::BoxFuture;
use futures::FutureExt;

/// Narrow capability surface of a SQL engine as the harness sees it:
/// something that accepts named table registrations and produces an
/// ordered sequence of row batches for a SQL statement.
///
/// Both the distributed execution context and the reference engine sit
/// behind this trait so the comparison path never depends on a concrete
/// engine type.
pub trait SqlEngine: Send + Sync + Debug {
    /// Register a dataset under `name`. How `path` is interpreted is
    /// decided by `binding`, not by the registrar.
    fn register_table<'a>(
        &'a self,
        name: &'a str,
        path: &'a Path,
        binding: TableBinding,
    ) -> BoxFuture<'a, Result<()>>;

    /// Submit one statement and materialize its result batches in order.
    fn sql<'a>(&'a self, statement: &'a str) -> BoxFuture<'a, Result<Vec<RecordBatch>>>;

    /// Release engine-side resources. Engines without cluster state keep
    /// the default no-op.
    fn shutdown(&self) -> BoxFuture<'_, Result<()>> {
        async { Ok(()) }.boxed()
    }
}
