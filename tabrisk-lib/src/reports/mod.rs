//! Report generation for evaluation runs
//!
//! Three generators share the same input, a [`Report`] borrowing the run's result list,
//! plugin runs, warnings and dataset summaries:
//! - **HTML**: self-contained document with embedded CSS and dark mode
//! - **JSON**: machine-readable structured data
//! - **Console**: short colored summary for the terminal
//!
//! [`write_report`] picks HTML or JSON from the destination path and writes the file.

mod common;
mod console;
mod html;
mod json;
mod report;

pub use console::generate as generate_console;
pub use html::generate as generate_html;
pub use json::generate as generate_json;
pub use report::{DatasetSummary, Report};

use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "   reports";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Json,
}

impl ReportFormat {
    /// The format implied by `path`, and the path the report is actually written to.
    ///
    /// A `.json` extension (any case) selects JSON. Anything else is HTML, with `.html`
    /// appended when the path does not already end in it.
    #[must_use]
    pub fn for_path(path: &Utf8Path) -> (Self, Utf8PathBuf) {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => (Self::Json, path.to_path_buf()),
            Some("html") => (Self::Html, path.to_path_buf()),
            _ => (Self::Html, Utf8PathBuf::from(format!("{path}.html"))),
        }
    }
}

/// Render `report` to `path` and return where it was written.
pub fn write_report(report: &Report<'_>, path: &Utf8Path) -> Result<Utf8PathBuf> {
    let (format, path) = ReportFormat::for_path(path);

    let mut output = String::new();
    match format {
        ReportFormat::Html => generate_html(report, &mut output)?,
        ReportFormat::Json => generate_json(report, &mut output)?,
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).into_app_err_with(|| format!("could not create directory '{parent}'"))?;
    }
    fs::write(&path, output).into_app_err_with(|| format!("could not write report to '{path}'"))?;

    log::info!(target: LOG_TARGET, "Wrote {format:?} report to '{path}'");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn empty_report() -> Report<'static> {
        Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &[],
            runs: &[],
            warnings: &[],
        }
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(ReportFormat::for_path(Utf8Path::new("out.json")), (ReportFormat::Json, "out.json".into()));
        assert_eq!(ReportFormat::for_path(Utf8Path::new("OUT.JSON")), (ReportFormat::Json, "OUT.JSON".into()));
        assert_eq!(ReportFormat::for_path(Utf8Path::new("out.html")), (ReportFormat::Html, "out.html".into()));
        assert_eq!(ReportFormat::for_path(Utf8Path::new("out")), (ReportFormat::Html, "out.html".into()));
        assert_eq!(ReportFormat::for_path(Utf8Path::new("out.txt")), (ReportFormat::Html, "out.txt.html".into()));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_report_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = Utf8PathBuf::from_path_buf(dir.path().join("nested/report")).unwrap();

        let written = write_report(&empty_report(), &target).unwrap();

        assert_eq!(written.file_name(), Some("report.html"));
        let contents = fs::read_to_string(&written).unwrap();
        assert!(contents.contains("<!DOCTYPE html>"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let target = Utf8PathBuf::from_path_buf(dir.path().join("report.json")).unwrap();

        let written = write_report(&empty_report(), &target).unwrap();

        assert_eq!(written, target);
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(json["metrics"], serde_json::json!([]));
    }
}
