use std::path::Path;

use datafusion::arrow::record_batch::RecordBatch;
use datafusion::prelude::SessionContext;
use fbench_common::{Result, TableBinding};
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::engine::SqlEngine;
use crate::session::{collect_statement, register_dataset};

/// Trusted single-process execution path used to validate the
/// distributed context's output. Runs with an untuned default session:
/// the point is a second, independent answer, not a fast one.
#[derive(Default)]
pub struct ReferenceContext {
    ctx: SessionContext,
}

impl std::fmt::Debug for ReferenceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceContext").finish_non_exhaustive()
    }
}

impl ReferenceContext {
    pub fn new() -> Self {
        Self {
            ctx: SessionContext::new(),
        }
    }
}

impl SqlEngine for ReferenceContext {
    fn register_table<'a>(
        &'a self,
        name: &'a str,
        path: &'a Path,
        binding: TableBinding,
    ) -> BoxFuture<'a, Result<()>> {
        async move { register_dataset(&self.ctx, name, path, binding).await }.boxed()
    }

    fn sql<'a>(&'a self, statement: &'a str) -> BoxFuture<'a, Result<Vec<RecordBatch>>> {
        async move { collect_statement(&self.ctx, statement).await }.boxed()
    }
}
