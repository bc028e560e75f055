//! CSV loading
//!
//! Turns CSV text with a header row into [`Record`]s. Cells are typed the
//! way a spreadsheet export is usually read: blank cells become null,
//! `true`/`false` become booleans, numbers become numbers, and everything
//! else stays text.

use crate::error::Result;
use crate::record::{Dataset, Record};
use serde_json::{Number, Value};
use std::io::Read;
use std::path::Path;

/// Parse CSV text into a dataset
pub fn parse_csv(input: &str) -> Result<Dataset> {
    read_csv(input.as_bytes())
}

/// Load a CSV file from disk into a dataset
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    read_csv(std::io::BufReader::new(file))
}

/// Read CSV from any reader into a dataset
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (column, cell) in headers.iter().zip(row.iter()) {
            record.insert(column.to_string(), type_cell(cell));
        }
        records.push(record);
    }

    Dataset::new(records)
}

fn type_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if cell.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = cell
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
    {
        return Value::Number(n);
    }
    Value::String(cell.to_string())
}
