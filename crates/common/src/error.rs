use thiserror::Error;

/// Canonical fbench error taxonomy used across crates.
///
/// Classification guidance:
/// - [`BenchError::InvalidConfig`]: CLI/config/dataset-path contract violations
/// - [`BenchError::Execution`]: engine failures while registering tables or running SQL
/// - [`BenchError::Report`]: report serialization/persistence failures
/// - [`BenchError::Io`]: raw filesystem IO failures from std APIs
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid or inconsistent configuration.
    ///
    /// Examples:
    /// - query number outside 1..=22
    /// - zero concurrency
    /// - missing query file in the query bank
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Execution-context failures after configuration succeeded.
    ///
    /// Examples:
    /// - table registration rejected (unreadable path, malformed schema)
    /// - statement submission or batch collection failure
    #[error("execution error: {0}")]
    Execution(String),

    /// Report encode/persist failures.
    #[error("report error: {0}")]
    Report(String),

    /// Transparent std IO failures.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Standard fbench result alias.
pub type Result<T> = std::result::Result<T, BenchError>;
