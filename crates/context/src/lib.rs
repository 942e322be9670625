//! Execution-context layer for the fbench harness.
//!
//! Architecture role:
//! - defines the [`SqlEngine`] capability trait the harness drives
//! - provides the tuned [`DistributedContext`] under measurement and the
//!   untuned [`ReferenceContext`] used for cross-validation
//! - registers the TPC-H dataset with either context
//!
//! Key modules:
//! - [`engine`]
//! - [`distributed`]
//! - [`reference`]
//! - [`tables`]

mod session;

pub mod distributed;
pub mod engine;
pub mod reference;
pub mod tables;

pub use distributed::DistributedContext;
pub use engine::SqlEngine;
pub use reference::ReferenceContext;
pub use tables::{register_tpch_tables, table_path, TPCH_TABLES};
