use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use fbench_common::{BenchError, Result};
use tracing::{info, warn};

/// Identifier used for a user-supplied ad hoc query.
pub const ADHOC_QUERY_ID: &str = "custom query";

/// Numbered queries in the bank: q1.sql through q22.sql.
pub const TPCH_QUERY_COUNT: usize = 22;

/// Root of the query bank. Defaults to the repo's `queries/` directory;
/// `FBENCH_QUERY_ROOT` points the suite at an alternate bank without a
/// rebuild.
pub fn default_query_root() -> PathBuf {
    match env::var("FBENCH_QUERY_ROOT") {
        Ok(root) => PathBuf::from(root),
        Err(_) => Path::new(env!("CARGO_MANIFEST_DIR")).join("../../queries"),
    }
}

/// Load the text of one numbered TPC-H query from the bank.
pub fn tpch_query(root: &Path, qnum: usize) -> Result<String> {
    let path = root.join(format!("q{qnum}.sql"));
    fs::read_to_string(&path).map_err(|e| {
        BenchError::InvalidConfig(format!(
            "failed reading query {qnum} at {}: {e}",
            path.display()
        ))
    })
}

/// Split a query's SQL text into its `;`-separated statements,
/// discarding whitespace-only fragments and preserving order.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Resolve the query selection into an ordered `(id, sql)` list.
///
/// A single numbered query and an ad hoc query are meant to be mutually
/// exclusive; when both are given only an advisory is emitted and the
/// numbered query wins. This soft check is deliberate, see DESIGN.md.
/// With neither given, the full ordered suite 1..=22 runs.
pub fn resolve_queries(
    root: &Path,
    qnum: Option<usize>,
    adhoc: Option<String>,
) -> Result<Vec<(String, String)>> {
    if qnum.is_some() && adhoc.is_some() {
        warn!("Please specify either --qnum or --query, but not both");
    }

    if let Some(qnum) = qnum {
        if !(1..=TPCH_QUERY_COUNT).contains(&qnum) {
            return Err(BenchError::InvalidConfig(format!(
                "invalid query number {qnum}: please specify a number between 1 and 22"
            )));
        }
        info!(qnum, "executing tpch query");
        return Ok(vec![(qnum.to_string(), tpch_query(root, qnum)?)]);
    }

    if let Some(sql) = adhoc {
        info!(sql = %sql, "executing custom query");
        return Ok(vec![(ADHOC_QUERY_ID.to_string(), sql)]);
    }

    info!("executing all tpch queries");
    (1..=TPCH_QUERY_COUNT)
        .map(|qnum| Ok((qnum.to_string(), tpch_query(root, qnum)?)))
        .collect()
}
