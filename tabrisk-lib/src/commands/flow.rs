//! One evaluation run, from the data directory to the written report.

use super::Host;
use crate::Result;
use crate::data::{csv_files, load_datasets};
use crate::engine::{Engine, PluginRun, Progress, Registry, Warning};
use crate::metrics::{MetricResult, Options};
use crate::plugins::PluginUnit;
use crate::reports::{DatasetSummary, Report, write_report};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use ohno::bail;
use std::io::Write;
use std::sync::Arc;

const LOG_TARGET: &str = "      flow";

/// Inputs of one evaluation run.
#[derive(Debug)]
pub struct EvaluationRequest<'a> {
    pub data_dir: &'a Utf8Path,
    pub output: &'a Utf8Path,
    pub parallel: bool,
    pub options: Options,
    pub units: &'a [PluginUnit],
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub datasets: Vec<DatasetSummary>,
    pub results: Vec<MetricResult>,
    pub warnings: Vec<Warning>,
    pub runs: Vec<PluginRun>,
    pub report_path: Utf8PathBuf,
}

impl RunSummary {
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report {
            generated_at: self.generated_at,
            datasets: &self.datasets,
            results: &self.results,
            runs: &self.runs,
            warnings: &self.warnings,
        }
    }
}

/// Load the datasets, discover the plugins, run them and write the report.
///
/// # Errors
///
/// Fails when the data directory is missing or holds no loadable CSV file, when a plugin
/// unit cannot be loaded, or when the report cannot be written. Problems with single
/// datasets or plugins are returned as warnings instead, and are also written to the
/// host's error stream.
pub async fn run_evaluation<H: Host>(host: &mut H, request: EvaluationRequest<'_>, progress: &dyn Progress) -> Result<RunSummary> {
    let data_dir = request.data_dir;

    progress.set_phase("Loading");
    if !data_dir.exists() {
        bail!("data directory '{data_dir}' does not exist");
    }
    if !data_dir.is_dir() {
        bail!("data location '{data_dir}' is not a directory");
    }

    let files = csv_files(data_dir)?;
    if files.is_empty() {
        bail!("no .csv files found in '{data_dir}'");
    }

    let (data, skipped) = load_datasets(&files);
    if data.is_empty() {
        bail!("none of the {} CSV file(s) in '{data_dir}' could be loaded", files.len());
    }

    let mut warnings: Vec<Warning> = skipped
        .into_iter()
        .map(|s| Warning::DatasetSkipped {
            file: s.file,
            error: s.error.to_string(),
        })
        .collect();

    progress.set_phase("Discovering");
    let mut registry = Registry::new();
    registry.discover(request.units)?;

    let datasets = DatasetSummary::from_map(&data);
    let outcome = Engine::new(request.parallel)
        .run(&registry, Arc::new(data), Arc::new(request.options), progress)
        .await;
    warnings.extend(outcome.warnings);

    for warning in &warnings {
        log::warn!(target: LOG_TARGET, "{warning}");
        let _ = writeln!(host.error(), "warning: {warning}");
    }

    let mut summary = RunSummary {
        generated_at: Utc::now(),
        datasets,
        results: outcome.results,
        warnings,
        runs: outcome.runs,
        report_path: request.output.to_path_buf(),
    };
    let report_path = write_report(&summary.report(), request.output)?;
    summary.report_path = report_path;

    Ok(summary)
}
