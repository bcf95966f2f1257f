//! Report generation: CSV in, HTML file out
//!
//! The document is rendered completely in memory before anything touches the
//! output path, and is moved into place with a rename, so a failed run never
//! leaves a truncated report behind.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::report;
use crate::core::error::{LoadMailError, Result};
use crate::core::types::{MetricsSnapshot, RenderedReport};
use crate::reporting::csv_source;
use crate::reporting::html::HtmlReport;

/// Options controlling report generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Render the built-in sample dataset when the CSV file does not exist
    pub sample_if_missing: bool,
}

/// Outcome of a generator run
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub report: RenderedReport,
    /// Data rows read (the table shows at most ten of them)
    pub total_requests: usize,
    pub rows_shown: usize,
    /// True when the sample dataset stood in for a missing CSV
    pub used_sample: bool,
}

/// Converts a CSV file of load-test results into an HTML summary
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    options: GenerateOptions,
}

impl ReportGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Read the CSV, render the report, and write it to `output_path`
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        csv_path: P,
        output_path: Q,
    ) -> Result<GenerationSummary> {
        let csv_path = csv_path.as_ref();
        let (rows, used_sample) = match csv_source::read_rows(csv_path) {
            Ok(rows) => (rows, false),
            Err(LoadMailError::FileNotFound(path)) if self.options.sample_if_missing => {
                warn!("CSV file '{path}' not found, using sample dataset");
                (csv_source::sample_rows(), true)
            }
            Err(e) => return Err(e),
        };
        debug!("Read {} row(s) from {}", rows.len(), csv_path.display());

        let snapshot = MetricsSnapshot::new(rows, current_timestamp());
        let report = RenderedReport::new(output_path.as_ref(), HtmlReport::render(&snapshot));
        write_report(&report)?;

        Ok(GenerationSummary {
            total_requests: snapshot.total_requests,
            rows_shown: snapshot.table_rows().len(),
            used_sample,
            report,
        })
    }

    /// Render and write a report, returning only the rendered document
    pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        csv_path: P,
        output_path: Q,
    ) -> Result<RenderedReport> {
        self.run(csv_path, output_path).map(|summary| summary.report)
    }
}

/// Generate a report with default options
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    output_path: Q,
) -> Result<RenderedReport> {
    ReportGenerator::default().generate(csv_path, output_path)
}

/// Generation time in the report's human-readable format
fn current_timestamp() -> String {
    chrono::Local::now()
        .format(report::TIMESTAMP_FORMAT)
        .to_string()
}

/// Write a rendered report to its path, creating parent directories first
pub fn write_report(report: &RenderedReport) -> Result<()> {
    let path = report.path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, report.as_bytes()) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    debug!("Wrote {report}");
    Ok(())
}

/// Read a previously generated report back from disk
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<RenderedReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadMailError::FileNotFound(path.display().to_string()));
    }
    let html = fs::read_to_string(path)?;
    Ok(RenderedReport::new(path, html))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("results.csv");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_generate_writes_report() -> Result<()> {
        let dir = TempDir::new()?;
        let csv = write_csv(
            &dir,
            "test_name,endpoint,response_time_ms,status_code\nlogin,/api/login,245,200\n",
        );
        let output = dir.path().join("out").join("summary.html");

        let report = generate(&csv, &output)?;

        assert_eq!(report.path(), output.as_path());
        assert!(report.html().contains("Total Requests: 1"));
        assert!(report.html().contains("/api/login"));
        Ok(())
    }

    #[test]
    fn test_written_file_matches_in_memory_report() -> Result<()> {
        let dir = TempDir::new()?;
        let csv = write_csv(&dir, "test_name\na\nb\n");
        let output = dir.path().join("summary.html");

        let report = generate(&csv, &output)?;
        let on_disk = fs::read(&output)?;

        assert_eq!(on_disk, report.as_bytes());
        assert_eq!(read_report(&output)?, report);
        Ok(())
    }

    #[test]
    fn test_generate_creates_nested_dirs_idempotently() -> Result<()> {
        let dir = TempDir::new()?;
        let csv = write_csv(&dir, "test_name\na\n");
        let output = dir.path().join("a").join("b").join("c").join("report.html");

        generate(&csv, &output)?;
        generate(&csv, &output)?;

        assert!(output.exists());
        Ok(())
    }

    #[test]
    fn test_generate_empty_csv_is_not_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let csv = write_csv(&dir, "test_name,endpoint,response_time_ms,status_code\n");
        let output = dir.path().join("summary.html");

        let summary = ReportGenerator::default().run(&csv, &output)?;

        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.rows_shown, 0);
        assert!(summary.report.html().contains("Total Requests: 0"));
        Ok(())
    }

    #[test]
    fn test_generate_counts_all_rows_but_shows_ten() -> Result<()> {
        let dir = TempDir::new()?;
        let mut content = String::from("test_name,endpoint\n");
        for i in 0..12 {
            content.push_str(&format!("t{i},/e{i}\n"));
        }
        let csv = write_csv(&dir, &content);

        let summary = ReportGenerator::default().run(&csv, dir.path().join("r.html"))?;
        assert_eq!(summary.total_requests, 12);
        assert_eq!(summary.rows_shown, 10);
        assert!(!summary.used_sample);
        Ok(())
    }

    #[test]
    fn test_missing_csv_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("summary.html");

        let err = generate(dir.path().join("missing.csv"), &output).unwrap_err();

        assert!(matches!(err, LoadMailError::FileNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_csv_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("bad.csv");
        fs::write(&csv, b"test_name\n\xff\xfe\xfd\n").unwrap();
        let output = dir.path().join("summary.html");

        let err = generate(&csv, &output).unwrap_err();

        assert!(matches!(err, LoadMailError::Csv(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_failed_run_keeps_previous_report() -> Result<()> {
        let dir = TempDir::new()?;
        let output = dir.path().join("summary.html");
        fs::write(&output, "previous")?;

        assert!(generate(dir.path().join("missing.csv"), &output).is_err());
        assert_eq!(fs::read_to_string(&output)?, "previous");
        Ok(())
    }

    #[test]
    fn test_sample_used_when_requested() -> Result<()> {
        let dir = TempDir::new()?;
        let generator = ReportGenerator::new(GenerateOptions {
            sample_if_missing: true,
        });

        let summary = generator.run(dir.path().join("missing.csv"), dir.path().join("s.html"))?;

        assert!(summary.used_sample);
        assert_eq!(summary.total_requests, 4);
        assert!(summary.report.html().contains("user_login"));
        Ok(())
    }

    #[test]
    fn test_read_report_missing() {
        let err = read_report("/no/such/report.html").unwrap_err();
        assert!(matches!(err, LoadMailError::FileNotFound(_)));
    }

    #[test]
    fn test_no_staging_file_left_behind() -> Result<()> {
        let dir = TempDir::new()?;
        let csv = write_csv(&dir, "test_name\na\n");
        generate(&csv, dir.path().join("summary.html"))?;

        let leftovers: Vec<_> = fs::read_dir(dir.path())?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        Ok(())
    }

    #[test]
    fn test_timestamp_format() {
        let ts = current_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, report::TIMESTAMP_FORMAT).is_ok());
    }
}
