use std::path::{Path, PathBuf};

use fbench_common::{Result, TableBinding};
use tracing::info;

use crate::engine::SqlEngine;

/// The eight TPC-H tables every dataset root is expected to carry.
pub const TPCH_TABLES: [&str; 8] = [
    "customer", "lineitem", "nation", "orders", "part", "partsupp", "region", "supplier",
];

/// Dataset file location for one table: `<root>/<table>.parquet`,
/// independent of binding mode.
pub fn table_path(data_path: &Path, table: &str) -> PathBuf {
    data_path.join(format!("{table}.parquet"))
}

/// Register the full TPC-H table set with `engine`.
///
/// Registration failures propagate immediately; there is no partial
/// recovery, the run aborts before any query executes.
pub async fn register_tpch_tables(
    engine: &dyn SqlEngine,
    data_path: &Path,
    binding: TableBinding,
) -> Result<()> {
    for table in TPCH_TABLES {
        let path = table_path(data_path, table);
        info!(table, path = %path.display(), "registering table");
        engine.register_table(table, &path, binding).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use datafusion::arrow::record_batch::RecordBatch;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingEngine {
        registrations: Mutex<Vec<(String, PathBuf, TableBinding)>>,
    }

    impl SqlEngine for RecordingEngine {
        fn register_table<'a>(
            &'a self,
            name: &'a str,
            path: &'a Path,
            binding: TableBinding,
        ) -> BoxFuture<'a, Result<()>> {
            async move {
                self.registrations.lock().unwrap().push((
                    name.to_string(),
                    path.to_path_buf(),
                    binding,
                ));
                Ok(())
            }
            .boxed()
        }

        fn sql<'a>(&'a self, _statement: &'a str) -> BoxFuture<'a, Result<Vec<RecordBatch>>> {
            async move { Ok(vec![]) }.boxed()
        }
    }

    #[tokio::test]
    async fn registers_all_tables_with_parquet_paths() {
        for binding in [TableBinding::File, TableBinding::Listing] {
            let engine = RecordingEngine::default();
            register_tpch_tables(&engine, Path::new("/data/tpch"), binding)
                .await
                .unwrap();

            let calls = engine.registrations.lock().unwrap();
            assert_eq!(calls.len(), TPCH_TABLES.len());
            for (call, expected) in calls.iter().zip(TPCH_TABLES) {
                assert_eq!(call.0, expected);
                assert_eq!(call.1, PathBuf::from(format!("/data/tpch/{expected}.parquet")));
                assert_eq!(call.2, binding);
            }
        }
    }
}
