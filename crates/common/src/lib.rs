//! Shared configuration and error types for the fbench harness crates.
//!
//! Architecture role:
//! - defines the benchmark configuration handed to the execution context
//! - provides the common [`BenchError`] / [`Result`] contracts
//!
//! Key modules:
//! - [`config`]
//! - [`error`]

pub mod config;
pub mod error;

pub use config::{BenchConfig, TableBinding};
pub use error::{BenchError, Result};
