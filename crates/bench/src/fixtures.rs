//! Deterministic miniature TPC-H dataset.
//!
//! Writes all eight tables as single parquet files with a few
//! hand-authored, join-consistent rows. Small enough for tests, shaped
//! enough that the standard queries find matching rows (q1/q3/q6
//! predicates all select data).

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use datafusion::arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use datafusion::arrow::compute::cast;
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::parquet::arrow::ArrowWriter;
use fbench_common::{BenchError, Result};

/// Write the full eight-table dataset under `root`, one
/// `<table>.parquet` file each.
pub fn write_tpch_dataset(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    write_region(root)?;
    write_nation(root)?;
    write_supplier(root)?;
    write_customer(root)?;
    write_part(root)?;
    write_partsupp(root)?;
    write_orders(root)?;
    write_lineitem(root)?;
    Ok(())
}

fn write_region(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("r_regionkey", DataType::Int64, false),
        Field::new("r_name", DataType::Utf8, false),
        Field::new("r_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[0, 1, 2, 3, 4]),
        utf8(&["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"]),
        utf8(&["quiet", "busy", "vast", "old", "dry"]),
    ];
    write_parquet(&root.join("region.parquet"), schema, columns)
}

fn write_nation(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("n_nationkey", DataType::Int64, false),
        Field::new("n_name", DataType::Utf8, false),
        Field::new("n_regionkey", DataType::Int64, false),
        Field::new("n_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[0, 1, 2, 3, 5, 6, 7, 8]),
        utf8(&[
            "ALGERIA",
            "ARGENTINA",
            "BRAZIL",
            "CANADA",
            "ETHIOPIA",
            "FRANCE",
            "GERMANY",
            "INDIA",
        ]),
        int64(&[0, 1, 1, 1, 0, 3, 3, 2]),
        utf8(&["", "", "", "", "", "", "", ""]),
    ];
    write_parquet(&root.join("nation.parquet"), schema, columns)
}

fn write_supplier(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("s_suppkey", DataType::Int64, false),
        Field::new("s_name", DataType::Utf8, false),
        Field::new("s_address", DataType::Utf8, false),
        Field::new("s_nationkey", DataType::Int64, false),
        Field::new("s_phone", DataType::Utf8, false),
        Field::new("s_acctbal", DataType::Float64, false),
        Field::new("s_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 2]),
        utf8(&["Supplier#000000001", "Supplier#000000002"]),
        utf8(&["17 rue de Rivoli", "204 Avenida Paulista"]),
        int64(&[6, 2]),
        utf8(&["16-123-456-7890", "12-987-654-3210"]),
        float64(&[4032.68, 1285.77]),
        utf8(&["even deposits", "furious packages"]),
    ];
    write_parquet(&root.join("supplier.parquet"), schema, columns)
}

fn write_customer(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("c_custkey", DataType::Int64, false),
        Field::new("c_name", DataType::Utf8, false),
        Field::new("c_address", DataType::Utf8, false),
        Field::new("c_nationkey", DataType::Int64, false),
        Field::new("c_phone", DataType::Utf8, false),
        Field::new("c_acctbal", DataType::Float64, false),
        Field::new("c_mktsegment", DataType::Utf8, false),
        Field::new("c_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 2, 3]),
        utf8(&[
            "Customer#000000001",
            "Customer#000000002",
            "Customer#000000003",
        ]),
        utf8(&["Unter den Linden 5", "Rua Oscar Freire 9", "Place Bellecour 2"]),
        int64(&[7, 2, 6]),
        utf8(&["17-555-000-1111", "12-555-000-2222", "16-555-000-3333"]),
        float64(&[711.56, 121.65, 7498.12]),
        utf8(&["BUILDING", "AUTOMOBILE", "BUILDING"]),
        utf8(&["ironic requests", "silent theodolites", "bold accounts"]),
    ];
    write_parquet(&root.join("customer.parquet"), schema, columns)
}

fn write_part(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("p_partkey", DataType::Int64, false),
        Field::new("p_name", DataType::Utf8, false),
        Field::new("p_mfgr", DataType::Utf8, false),
        Field::new("p_brand", DataType::Utf8, false),
        Field::new("p_type", DataType::Utf8, false),
        Field::new("p_size", DataType::Int64, false),
        Field::new("p_container", DataType::Utf8, false),
        Field::new("p_retailprice", DataType::Float64, false),
        Field::new("p_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 2, 3]),
        utf8(&[
            "spring green yellow purple part",
            "blush thistle blue yellow part",
            "dark wheat khaki tomato part",
        ]),
        utf8(&["Manufacturer#1", "Manufacturer#1", "Manufacturer#2"]),
        utf8(&["Brand#13", "Brand#13", "Brand#42"]),
        utf8(&[
            "ECONOMY ANODIZED STEEL",
            "LARGE BRUSHED BRASS",
            "STANDARD POLISHED TIN",
        ]),
        int64(&[15, 15, 3]),
        utf8(&["JUMBO PKG", "LG CASE", "SM BOX"]),
        float64(&[901.0, 902.0, 903.0]),
        utf8(&["", "", ""]),
    ];
    write_parquet(&root.join("part.parquet"), schema, columns)
}

fn write_partsupp(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ps_partkey", DataType::Int64, false),
        Field::new("ps_suppkey", DataType::Int64, false),
        Field::new("ps_availqty", DataType::Int64, false),
        Field::new("ps_supplycost", DataType::Float64, false),
        Field::new("ps_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 1, 2, 3]),
        int64(&[1, 2, 1, 2]),
        int64(&[3325, 8076, 4069, 2721]),
        float64(&[771.64, 337.09, 357.84, 123.45]),
        utf8(&["", "", "", ""]),
    ];
    write_parquet(&root.join("partsupp.parquet"), schema, columns)
}

fn write_orders(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("o_orderkey", DataType::Int64, false),
        Field::new("o_custkey", DataType::Int64, false),
        Field::new("o_orderstatus", DataType::Utf8, false),
        Field::new("o_totalprice", DataType::Float64, false),
        Field::new("o_orderdate", DataType::Date32, false),
        Field::new("o_orderpriority", DataType::Utf8, false),
        Field::new("o_clerk", DataType::Utf8, false),
        Field::new("o_shippriority", DataType::Int64, false),
        Field::new("o_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 2, 3, 4]),
        int64(&[1, 2, 3, 1]),
        utf8(&["O", "F", "O", "F"]),
        float64(&[58937.97, 37087.62, 5280.0, 31197.9]),
        date32(&["1995-02-12", "1994-06-01", "1996-01-02", "1993-08-01"])?,
        utf8(&["1-URGENT", "3-MEDIUM", "5-LOW", "1-URGENT"]),
        utf8(&["Clerk#000000001", "Clerk#000000002", "Clerk#000000003", "Clerk#000000004"]),
        int64(&[0, 0, 0, 0]),
        utf8(&["", "", "", ""]),
    ];
    write_parquet(&root.join("orders.parquet"), schema, columns)
}

fn write_lineitem(root: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("l_orderkey", DataType::Int64, false),
        Field::new("l_partkey", DataType::Int64, false),
        Field::new("l_suppkey", DataType::Int64, false),
        Field::new("l_linenumber", DataType::Int64, false),
        Field::new("l_quantity", DataType::Float64, false),
        Field::new("l_extendedprice", DataType::Float64, false),
        Field::new("l_discount", DataType::Float64, false),
        Field::new("l_tax", DataType::Float64, false),
        Field::new("l_returnflag", DataType::Utf8, false),
        Field::new("l_linestatus", DataType::Utf8, false),
        Field::new("l_shipdate", DataType::Date32, false),
        Field::new("l_commitdate", DataType::Date32, false),
        Field::new("l_receiptdate", DataType::Date32, false),
        Field::new("l_shipinstruct", DataType::Utf8, false),
        Field::new("l_shipmode", DataType::Utf8, false),
        Field::new("l_comment", DataType::Utf8, false),
    ]));
    let columns = vec![
        int64(&[1, 1, 2, 2, 3, 4]),
        int64(&[1, 2, 2, 3, 1, 3]),
        int64(&[1, 2, 2, 2, 1, 2]),
        int64(&[1, 2, 1, 2, 1, 1]),
        float64(&[17.0, 36.0, 8.0, 24.0, 5.0, 30.0]),
        float64(&[17954.55, 40983.48, 9794.64, 27348.0, 5280.0, 31197.9]),
        float64(&[0.04, 0.09, 0.06, 0.07, 0.0, 0.1]),
        float64(&[0.02, 0.06, 0.02, 0.05, 0.0, 0.07]),
        utf8(&["N", "N", "R", "R", "N", "A"]),
        utf8(&["O", "O", "F", "F", "O", "F"]),
        date32(&[
            "1995-04-01",
            "1995-04-15",
            "1994-02-21",
            "1994-09-30",
            "1996-01-30",
            "1993-10-10",
        ])?,
        date32(&[
            "1995-03-20",
            "1995-04-01",
            "1994-02-10",
            "1994-09-15",
            "1996-01-20",
            "1993-10-01",
        ])?,
        date32(&[
            "1995-04-10",
            "1995-04-20",
            "1994-03-01",
            "1994-10-05",
            "1996-02-05",
            "1993-10-20",
        ])?,
        utf8(&[
            "DELIVER IN PERSON",
            "TAKE BACK RETURN",
            "NONE",
            "COLLECT COD",
            "DELIVER IN PERSON",
            "NONE",
        ]),
        utf8(&["TRUCK", "MAIL", "SHIP", "RAIL", "AIR", "FOB"]),
        utf8(&["", "", "", "", "", ""]),
    ];
    write_parquet(&root.join("lineitem.parquet"), schema, columns)
}

fn int64(values: &[i64]) -> ArrayRef {
    Arc::new(Int64Array::from(values.to_vec()))
}

fn float64(values: &[f64]) -> ArrayRef {
    Arc::new(Float64Array::from(values.to_vec()))
}

fn utf8(values: &[&str]) -> ArrayRef {
    Arc::new(StringArray::from(values.to_vec()))
}

fn date32(values: &[&str]) -> Result<ArrayRef> {
    cast(&utf8(values), &DataType::Date32)
        .map_err(|e| BenchError::Execution(format!("date column build failed: {e}")))
}

fn write_parquet(path: &Path, schema: Arc<Schema>, columns: Vec<ArrayRef>) -> Result<()> {
    let batch = RecordBatch::try_new(schema.clone(), columns)
        .map_err(|e| BenchError::Execution(format!("fixture batch for {path:?} failed: {e}")))?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)
        .map_err(|e| BenchError::Execution(format!("parquet writer for {path:?} failed: {e}")))?;
    writer
        .write(&batch)
        .map_err(|e| BenchError::Execution(format!("parquet write for {path:?} failed: {e}")))?;
    writer
        .close()
        .map_err(|e| BenchError::Execution(format!("parquet close for {path:?} failed: {e}")))?;
    Ok(())
}
