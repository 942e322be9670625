use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fbench_common::{BenchConfig, BenchError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Engine identifier embedded in the report and the report file name.
pub const ENGINE_NAME: &str = "datafusion-ray";
/// Benchmark identifier embedded in the report and the report file name.
pub const BENCHMARK_NAME: &str = "tpch";

/// Settings echoed into the report for later comparison across runs.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSettings {
    pub concurrency: usize,
    pub batch_size: usize,
    pub prefetch_buffer_size: usize,
    pub partitions_per_worker: Option<usize>,
}

/// The durable benchmark report. `queries` and `validated` are
/// order-preserving maps: iteration order is execution order.
#[derive(Debug, Serialize)]
pub struct BenchmarkReport {
    engine: &'static str,
    benchmark: &'static str,
    settings: ReportSettings,
    data_path: String,
    queries: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validated: Option<Map<String, Value>>,
}

impl BenchmarkReport {
    fn new(config: &BenchConfig, data_path: String) -> Self {
        Self {
            engine: ENGINE_NAME,
            benchmark: BENCHMARK_NAME,
            settings: ReportSettings {
                concurrency: config.concurrency,
                batch_size: config.batch_size,
                prefetch_buffer_size: config.prefetch_buffer_size,
                partitions_per_worker: config.partitions_per_worker,
            },
            data_path,
            queries: Map::new(),
            validated: config.validate.then(Map::new),
        }
    }
}

/// Exclusive owner of the [`BenchmarkReport`].
///
/// Every completed query rewrites the entire report to one
/// timestamp-named file and echoes the same serialization to stdout, so
/// a crash mid-run leaves a durable report of all completed queries and
/// an operator can watch results accumulate.
#[derive(Debug)]
pub struct ReportWriter {
    report: BenchmarkReport,
    path: PathBuf,
}

impl ReportWriter {
    /// Create the writer and pick the run's report file name from the
    /// start timestamp. Nothing is written until the first query
    /// completes.
    pub fn new(config: &BenchConfig, data_path: String, output_dir: &Path) -> Result<Self> {
        let started_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| BenchError::Report(format!("system clock before epoch: {e}")))?
            .as_millis();
        let path = output_dir.join(format!("{ENGINE_NAME}-{BENCHMARK_NAME}-{started_millis}.json"));

        Ok(Self {
            report: BenchmarkReport::new(config, data_path),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fold one completed query into the report and persist it.
    pub fn record(
        &mut self,
        query_id: &str,
        elapsed: Duration,
        outcome: Option<bool>,
    ) -> Result<()> {
        self.report
            .queries
            .insert(query_id.to_string(), Value::from(elapsed.as_secs_f64()));
        if let (Some(validated), Some(outcome)) = (self.report.validated.as_mut(), outcome) {
            validated.insert(query_id.to_string(), Value::from(outcome));
        }
        self.persist()
    }

    /// True when validation ran and at least one query came back false.
    pub fn any_validation_failures(&self) -> bool {
        self.report
            .validated
            .as_ref()
            .map(|validated| validated.values().any(|v| v == &Value::from(false)))
            .unwrap_or(false)
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.report)
            .map_err(|e| BenchError::Report(format!("report encode failed: {e}")))?;
        fs::write(&self.path, &payload)?;
        println!("{payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(validate: bool, dir: &Path) -> ReportWriter {
        let config = BenchConfig {
            concurrency: 4,
            validate,
            ..BenchConfig::default()
        };
        ReportWriter::new(&config, "/data/tpch".to_string(), dir).unwrap()
    }

    fn parse(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn nothing_on_disk_before_first_record() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer(false, dir.path());
        assert!(!writer.path().exists());
    }

    #[test]
    fn file_name_embeds_engine_benchmark_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer(false, dir.path());
        let name = writer.path().file_name().unwrap().to_string_lossy().to_string();
        let millis = name
            .strip_prefix("datafusion-ray-tpch-")
            .and_then(|rest| rest.strip_suffix(".json"))
            .unwrap();
        assert!(millis.parse::<u128>().is_ok());
    }

    #[test]
    fn report_rewritten_whole_after_each_query_in_execution_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(false, dir.path());

        writer.record("1", Duration::from_millis(1500), None).unwrap();
        let doc = parse(writer.path());
        assert_eq!(doc["queries"].as_object().unwrap().len(), 1);

        writer.record("10", Duration::from_millis(250), None).unwrap();
        writer.record("2", Duration::from_millis(40), None).unwrap();
        let doc = parse(writer.path());

        let keys: Vec<&String> = doc["queries"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["1", "10", "2"]);
        assert!((doc["queries"]["1"].as_f64().unwrap() - 1.5).abs() < 1e-9);
        assert_eq!(doc["engine"], ENGINE_NAME);
        assert_eq!(doc["benchmark"], BENCHMARK_NAME);
        assert_eq!(doc["data_path"], "/data/tpch");
        assert_eq!(doc["settings"]["concurrency"], 4);
        assert!(doc.get("validated").is_none());
    }

    #[test]
    fn validation_section_present_iff_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(true, dir.path());

        writer
            .record("1", Duration::from_millis(10), Some(true))
            .unwrap();
        writer
            .record("2", Duration::from_millis(10), Some(false))
            .unwrap();

        let doc = parse(writer.path());
        let validated = doc["validated"].as_object().unwrap();
        assert_eq!(validated.len(), 2);
        assert_eq!(validated["1"], Value::from(true));
        assert_eq!(validated["2"], Value::from(false));
        assert!(writer.any_validation_failures());
    }

    #[test]
    fn all_true_outcomes_report_no_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = writer(true, dir.path());
        writer
            .record("1", Duration::from_millis(10), Some(true))
            .unwrap();
        assert!(!writer.any_validation_failures());
    }
}
