//! Report generation and logging
//!
//! This module reads load-test CSV files, renders the HTML summary,
//! writes it to disk, and holds the structured logging helpers.

pub mod csv_source;
pub mod generator;
pub mod html;
pub mod logging;

// Re-export commonly used items
pub use generator::{
    GenerateOptions, GenerationSummary, ReportGenerator, generate, read_report, write_report,
};
pub use html::HtmlReport;
