use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use super::flow::{EvaluationRequest, run_evaluation};
use super::{Host, ProgressReporter};
use crate::Result;
use crate::engine::Progress;
use crate::plugins::PLUGIN_UNITS;
use crate::reports::generate_console;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::time::Duration;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Path to configuration file (default is `tabrisk.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Report destination; a `.json` extension writes JSON, anything else writes HTML
    #[arg(long, short = 'o', value_name = "PATH", default_value = "report.html")]
    pub output: Utf8PathBuf,

    /// Directory holding the dataset CSV files (overrides `data_dir` from the configuration)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<Utf8PathBuf>,

    /// Run metric plugins concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub async fn evaluate<H: Host>(host: &mut H, args: &EvaluateArgs) -> Result<()> {
    init_logging(args.log_level);

    match evaluate_inner(host, args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Evaluation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

async fn evaluate_inner<H: Host>(host: &mut H, args: &EvaluateArgs) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let data_dir = args.data_dir.clone().unwrap_or(config.data_dir);

    let delay = if args.log_level == LogLevel::None {
        Duration::from_millis(300)
    } else {
        Duration::from_hours(365 * 24)
    };
    let progress = ProgressReporter::new(delay, args.color.for_stderr());

    let request = EvaluationRequest {
        data_dir: &data_dir,
        output: &args.output,
        parallel: args.parallel || config.parallel,
        options: config.options,
        units: PLUGIN_UNITS,
    };
    let outcome = run_evaluation(host, request, &progress).await;
    progress.done();
    let summary = outcome?;

    let mut console_output = String::new();
    generate_console(&summary.report(), &summary.report_path, args.color.for_stdout(), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    Ok(())
}
