//! CSV input for the report generator

use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::constants::columns;
use crate::core::error::{LoadMailError, Result};
use crate::core::types::MetricRow;

/// Read every data row of a CSV file with a header row.
///
/// Rows keep file order. A missing file is reported as `FileNotFound`,
/// anything the CSV reader rejects (including non-UTF-8 text) as `Csv`.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<MetricRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            LoadMailError::FileNotFound(path.display().to_string())
        }
        _ => LoadMailError::Io(e),
    })?;
    parse_rows(file)
}

/// Parse CSV content from any reader
pub fn parse_rows<R: Read>(input: R) -> Result<Vec<MetricRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Short rows just lack their trailing columns; extra cells have no header and are dropped
        let row = MetricRow::from_pairs(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.to_string(), value.to_string())),
        );
        rows.push(row);
    }

    Ok(rows)
}

/// Fixed four-row dataset used when no CSV is available
pub fn sample_rows() -> Vec<MetricRow> {
    const SAMPLE: [[&str; 6]; 4] = [
        ["user_login", "/api/auth/login", "245", "200", "120.5", "2024-01-15 10:00:00"],
        ["product_search", "/api/products/search", "312", "200", "98.2", "2024-01-15 10:05:00"],
        ["checkout", "/api/orders/checkout", "890", "500", "45.7", "2024-01-15 10:10:00"],
        ["user_profile", "/api/users/profile", "156", "200", "150.3", "2024-01-15 10:15:00"],
    ];

    SAMPLE
        .iter()
        .map(|values| {
            MetricRow::from_pairs(
                columns::SAMPLE_SCHEMA
                    .iter()
                    .copied()
                    .zip(values.iter().copied()),
            )
        })
        .collect()
}
