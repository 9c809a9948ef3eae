use super::{Report, common};
use crate::Result;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(report: &Report<'_>, writer: &mut W) -> Result<()> {
    let datasets: Vec<_> = report
        .datasets
        .iter()
        .map(|d| {
            json!({
                "name": d.name,
                "rows": d.rows,
                "columns": d.columns,
            })
        })
        .collect();

    let metrics: Vec<_> = report
        .results
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "value": r.value,
                "details": r.details,
            })
        })
        .collect();

    let plugins: Vec<_> = report
        .runs
        .iter()
        .map(|run| {
            json!({
                "id": run.id,
                "outcome": run.outcome,
                "results": run.results,
                "elapsed_ms": common::elapsed_ms(run.elapsed),
            })
        })
        .collect();

    let output = json!({
        "generated_at": report.generated_at.to_rfc3339(),
        "datasets": datasets,
        "metrics": metrics,
        "plugins": plugins,
        "warnings": report.warnings,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{OutcomeKind, PluginRun, Warning};
    use crate::metrics::{MetricResult, Value};
    use crate::reports::DatasetSummary;
    use chrono::{TimeZone, Utc};
    use core::time::Duration;

    fn render(report: &Report<'_>) -> serde_json::Value {
        let mut output = String::new();
        generate(report, &mut output).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    fn sample_parts() -> (Vec<DatasetSummary>, Vec<MetricResult>, Vec<PluginRun>, Vec<Warning>) {
        let datasets = vec![
            DatasetSummary {
                name: "Xsyn".into(),
                rows: 4,
                columns: 2,
            },
            DatasetSummary {
                name: "Xtrain".into(),
                rows: 5,
                columns: 2,
            },
        ];
        let results = vec![
            MetricResult::new("row_count", Value::Null).with_detail("Xsyn", 4_usize).with_detail("Xtrain", 5_usize),
            MetricResult::new("similar_check", 1_usize).with_detail("common_rows", 1_usize),
        ];
        let runs = vec![
            PluginRun {
                id: "tabrisk_lib::plugins::row_count".into(),
                outcome: OutcomeKind::Contributed,
                results: 1,
                elapsed: Duration::from_millis(3),
            },
            PluginRun {
                id: "tabrisk_lib::plugins::dcr".into(),
                outcome: OutcomeKind::Failed,
                results: 0,
                elapsed: Duration::from_millis(7),
            },
        ];
        let warnings = vec![Warning::PluginFailed {
            plugin: "tabrisk_lib::plugins::dcr".into(),
            error: "no numeric column".into(),
        }];
        (datasets, results, runs, warnings)
    }

    #[test]
    fn test_json_report() {
        let (datasets, results, runs, warnings) = sample_parts();
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &datasets,
            results: &results,
            runs: &runs,
            warnings: &warnings,
        };

        let mut output = String::new();
        generate(&report, &mut output).unwrap();
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_metrics_keep_result_order() {
        let results = vec![MetricResult::new("b", 1_i64), MetricResult::new("a", 2_i64)];
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &results,
            runs: &[],
            warnings: &[],
        };

        let json = render(&report);
        assert_eq!(json["metrics"][0]["name"], "b");
        assert_eq!(json["metrics"][1]["name"], "a");
        assert_eq!(json["metrics"][0]["details"], json!({}));
    }

    #[test]
    fn test_null_value_and_nested_details() {
        let results = vec![MetricResult::new("m", Value::Null).with_detail("columns", Value::List(vec!["x".into(), "y".into()]))];
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &results,
            runs: &[],
            warnings: &[],
        };

        let json = render(&report);
        assert!(json["metrics"][0]["value"].is_null());
        assert_eq!(json["metrics"][0]["details"]["columns"], json!(["x", "y"]));
    }

    #[test]
    fn test_empty_report() {
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            datasets: &[],
            results: &[],
            runs: &[],
            warnings: &[],
        };

        let json = render(&report);
        assert_eq!(json["generated_at"], "2024-01-15T10:30:00+00:00");
        assert_eq!(json["metrics"], json!([]));
        assert_eq!(json["warnings"], json!([]));
    }
}
