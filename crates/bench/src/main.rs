use std::path::PathBuf;

use fbench_bench::driver::BenchmarkDriver;
use fbench_bench::queries;
use fbench_common::{BenchConfig, TableBinding};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct CliArgs {
    data: String,
    concurrency: usize,
    qnum: Option<usize>,
    query: Option<String>,
    listing_tables: bool,
    validate: bool,
    batch_size: usize,
    partitions_per_processor: Option<usize>,
    prefetch_buffer_size: usize,
    worker_pool_min: Option<usize>,
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            print_usage();
            std::process::exit(1);
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_lowercase())),
        )
        .try_init();

    let config = BenchConfig {
        concurrency: cli.concurrency,
        batch_size: cli.batch_size,
        partitions_per_worker: cli.partitions_per_processor,
        worker_pool_min: cli.worker_pool_min,
        prefetch_buffer_size: cli.prefetch_buffer_size,
        binding: if cli.listing_tables {
            TableBinding::Listing
        } else {
            TableBinding::File
        },
        validate: cli.validate,
    };

    let query_root = queries::default_query_root();
    let query_list = match queries::resolve_queries(&query_root, cli.qnum, cli.query) {
        Ok(query_list) => query_list,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let driver = BenchmarkDriver::new(
        config,
        PathBuf::from(cli.data),
        query_list,
        PathBuf::from("."),
    );
    match driver.run().await {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Possible incorrect query result");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("benchmark failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut data = None;
    let mut concurrency = None;
    let mut qnum = None;
    let mut query = None;
    let mut listing_tables = false;
    let mut validate = false;
    let mut batch_size = 8192usize;
    let mut partitions_per_processor = None;
    let mut prefetch_buffer_size = 0usize;
    let mut worker_pool_min = None;
    let mut log_level = "INFO".to_string();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                i += 1;
                data = Some(take_value(args, i, "--data")?);
            }
            "--concurrency" => {
                i += 1;
                concurrency = Some(take_parsed(args, i, "--concurrency")?);
            }
            "--qnum" => {
                i += 1;
                qnum = Some(take_parsed(args, i, "--qnum")?);
            }
            "--query" => {
                i += 1;
                query = Some(take_value(args, i, "--query")?);
            }
            "--listing-tables" => {
                listing_tables = true;
            }
            "--validate" => {
                validate = true;
            }
            "--batch-size" => {
                i += 1;
                batch_size = take_parsed(args, i, "--batch-size")?;
            }
            "--partitions-per-processor" => {
                i += 1;
                partitions_per_processor = Some(take_parsed(args, i, "--partitions-per-processor")?);
            }
            "--prefetch-buffer-size" => {
                i += 1;
                prefetch_buffer_size = take_parsed(args, i, "--prefetch-buffer-size")?;
            }
            "--worker-pool-min" => {
                i += 1;
                worker_pool_min = Some(take_parsed(args, i, "--worker-pool-min")?);
            }
            "--log-level" => {
                i += 1;
                log_level = take_value(args, i, "--log-level")?;
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
        i += 1;
    }

    Ok(CliArgs {
        data: data.ok_or("missing required argument --data")?,
        concurrency: concurrency.ok_or("missing required argument --concurrency")?,
        qnum,
        query,
        listing_tables,
        validate,
        batch_size,
        partitions_per_processor,
        prefetch_buffer_size,
        worker_pool_min,
        log_level,
    })
}

fn take_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn take_parsed(args: &[String], i: usize, flag: &str) -> Result<usize, String> {
    take_value(args, i, flag)?
        .parse::<usize>()
        .map_err(|e| format!("invalid value for {flag}: {e}"))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  tpcbench --data PATH --concurrency N [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data PATH                      dataset root directory (required)");
    eprintln!("  --concurrency N                  target parallelism for the execution context (required)");
    eprintln!("  --qnum N                         run one TPC-H query, 1-22");
    eprintln!("  --query SQL                      run one custom query against the TPC-H tables");
    eprintln!("  --listing-tables                 register tables as listing sources instead of files");
    eprintln!("  --validate                       cross-check results against the reference engine");
    eprintln!("  --batch-size N                   rows per execution batch (default 8192)");
    eprintln!("  --partitions-per-processor N     cap on partitions per distributed worker");
    eprintln!("  --prefetch-buffer-size N         batches eagerly buffered per stage (default 0)");
    eprintln!("  --worker-pool-min N              minimum standing worker pool size");
    eprintln!("  --log-level LEVEL                ERROR, WARN, INFO, DEBUG, TRACE (default INFO)");
}
