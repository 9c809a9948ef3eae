use super::{Report, common};
use crate::Result;
use camino::Utf8Path;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(report: &Report<'_>, output_path: &Utf8Path, use_colors: bool, writer: &mut W) -> Result<()> {
    let heading = format!(
        "Evaluated {} dataset(s) with {} plugin(s)",
        report.datasets.len(),
        report.runs.len()
    );
    if use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }

    let max_name_len = report.results.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for result in report.results {
        writeln!(
            writer,
            "  {:<width$} : {}",
            result.name,
            common::format_value(&result.value),
            width = max_name_len
        )?;
    }

    let warnings = format!("{} warning(s)", report.warnings.len());
    let warnings = match (use_colors, report.warnings.is_empty()) {
        (true, true) => warnings.green().to_string(),
        (true, false) => warnings.yellow().bold().to_string(),
        (false, _) => warnings,
    };
    writeln!(writer, "{} metric(s), {warnings}", report.results.len())?;

    if use_colors {
        writeln!(writer, "Report written to {}", output_path.cyan())?;
    } else {
        writeln!(writer, "Report written to {output_path}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Warning;
    use crate::metrics::{MetricResult, Value};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_without_colors() {
        let results = [MetricResult::new("row_count", Value::Null), MetricResult::new("dcr_min", 0.5)];
        let warnings = [Warning::PluginFailed {
            plugin: "p".into(),
            error: "e".into(),
        }];
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &results,
            runs: &[],
            warnings: &warnings,
        };

        let mut output = String::new();
        generate(&report, Utf8Path::new("out/report.html"), false, &mut output).unwrap();

        assert_eq!(
            output,
            "Evaluated 0 dataset(s) with 0 plugin(s)\n  row_count : —\n  dcr_min   : 0.5000\n2 metric(s), 1 warning(s)\nReport written to out/report.html\n"
        );
    }

    #[test]
    fn test_colors_emit_ansi() {
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &[],
            runs: &[],
            warnings: &[],
        };

        let mut output = String::new();
        generate(&report, Utf8Path::new("r.json"), true, &mut output).unwrap();
        assert!(output.contains("\u{1b}["));
    }
}
