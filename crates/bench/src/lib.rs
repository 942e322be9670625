//! TPC-H benchmark harness for the distributed execution context.
//!
//! Architecture role:
//! - loads the query bank and resolves the query selection
//! - executes and times each query against the distributed context
//! - canonicalizes results and cross-checks them against the reference
//!   engine when validation is enabled
//! - maintains the incrementally persisted benchmark report
//!
//! Key modules:
//! - [`queries`]
//! - [`exec`]
//! - [`fmt`]
//! - [`validate`]
//! - [`report`]
//! - [`driver`]
//!
//! [`fixtures`] writes a deterministic miniature TPC-H dataset, used by
//! the integration tests and handy for smoke-testing a deployment.

pub mod driver;
pub mod exec;
pub mod fixtures;
pub mod fmt;
pub mod queries;
pub mod report;
pub mod validate;

pub use driver::BenchmarkDriver;
pub use report::ReportWriter;
