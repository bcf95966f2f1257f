use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::constants::report;

/// One CSV data row: column name to raw cell text.
///
/// Columns are looked up by header name, never by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricRow {
    fields: HashMap<String, String>,
}

impl MetricRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw cell value, if the row has that column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Cell value for display: missing or blank cells become the `N/A` placeholder
    pub fn display_value(&self, column: &str) -> &str {
        match self.get(column) {
            Some(value) if !value.trim().is_empty() => value,
            _ => report::MISSING_VALUE,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Aggregate view of one CSV file, created fresh for every report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Number of data rows (header excluded)
    pub total_requests: usize,
    /// Generation time, human readable
    pub timestamp: String,
    /// Data rows in file order
    pub rows: Vec<MetricRow>,
}

impl MetricsSnapshot {
    /// Build a snapshot; `total_requests` is always the row count
    pub fn new(rows: Vec<MetricRow>, timestamp: impl Into<String>) -> Self {
        Self {
            total_requests: rows.len(),
            timestamp: timestamp.into(),
            rows,
        }
    }

    /// The rows that fit in the report table
    pub fn table_rows(&self) -> &[MetricRow] {
        let end = self.rows.len().min(report::MAX_TABLE_ROWS);
        &self.rows[..end]
    }

    /// True when more rows exist than the table shows
    pub fn is_truncated(&self) -> bool {
        self.rows.len() > report::MAX_TABLE_ROWS
    }
}

/// Rendered HTML document together with the path it lives at.
///
/// The notifier treats the content as an opaque blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    path: PathBuf,
    html: String,
}

impl RenderedReport {
    pub fn new(path: impl Into<PathBuf>, html: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            html: html.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }
}

impl fmt::Display for RenderedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path.display(), self.html.len())
    }
}
