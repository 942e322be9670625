use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// How a registered dataset path is interpreted by the execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableBinding {
    /// The path is a listing source scanned lazily by the context.
    Listing,
    /// The path is one concrete parquet file.
    File,
}

/// Immutable benchmark configuration, built once at startup and handed
/// through to the distributed execution context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    pub concurrency: usize,
    pub batch_size: usize,
    pub partitions_per_worker: Option<usize>,
    pub worker_pool_min: Option<usize>,
    pub prefetch_buffer_size: usize,
    pub binding: TableBinding,
    pub validate: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            batch_size: 8192,
            partitions_per_worker: None,
            worker_pool_min: None,
            prefetch_buffer_size: 0,
            binding: TableBinding::File,
            validate: false,
        }
    }
}

impl BenchConfig {
    /// Reject configurations the execution context cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(BenchError::InvalidConfig(
                "concurrency must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
