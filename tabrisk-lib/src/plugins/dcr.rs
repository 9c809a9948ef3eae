//! Distance to closest record.
//!
//! For each evaluated synthetic row, the Euclidean distance to the nearest original row,
//! computed over the numeric columns both datasets share. A distance of zero means the
//! synthetic row reproduces an original record on every shared numeric column.

use super::dataset_pair;
use crate::Result;
use crate::data::{DatasetMap, Table};
use crate::metrics::{Evaluation, MetricPlugin, MetricResult, Options, Value};
use ohno::bail;
use std::sync::Arc;

pub const UNIT_ID: &str = module_path!();

pub const MAX_ROWS_OPTION: &str = "dcr_max_rows";
pub const DEFAULT_MAX_ROWS: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct DistanceToClosestRecord;

impl MetricPlugin for DistanceToClosestRecord {
    fn description(&self) -> &str {
        "Distance from synthetic rows to their closest original row"
    }

    fn evaluate_privacy(&self, data: &DatasetMap, options: &Options) -> Result<Evaluation> {
        let Some((synthetic_name, synthetic, original_name, original)) = dataset_pair(data, options) else {
            return Ok(Evaluation::None);
        };

        let columns = shared_numeric_columns(synthetic, original);
        if columns.is_empty() {
            bail!("'{synthetic_name}' and '{original_name}' share no numeric column");
        }

        let max_rows = options.positive_usize_or(MAX_ROWS_OPTION, DEFAULT_MAX_ROWS);
        let original_points = points(original, columns.iter().map(|c| c.original), original.row_count());
        let synthetic_points = points(synthetic, columns.iter().map(|c| c.synthetic), max_rows);

        let mut distances: Vec<f64> = synthetic_points
            .iter()
            .map(|p| original_points.iter().map(|q| distance(p, q)).fold(f64::INFINITY, f64::min))
            .collect();
        distances.sort_by(f64::total_cmp);

        let evaluated = distances.len();
        let column_names: Vec<Value> = columns.iter().map(|c| Value::from(c.name.as_str())).collect();

        let min = distances.first().copied().unwrap_or(0.0);
        let zero_share = share(distances.iter().filter(|d| **d == 0.0).count(), evaluated);

        Ok(vec![
            MetricResult::new("dcr_min", min),
            MetricResult::new("dcr_median", median(&distances))
                .with_detail("rows_evaluated", evaluated)
                .with_detail("columns", Value::List(column_names)),
            MetricResult::new("dcr_zero_share", zero_share),
        ]
        .into())
    }
}

pub fn load() -> Result<Option<Arc<dyn MetricPlugin>>> {
    Ok(Some(Arc::new(DistanceToClosestRecord)))
}

struct SharedColumn {
    name: String,
    synthetic: usize,
    original: usize,
}

/// Columns numeric in both tables, matched by name, in synthetic column order.
fn shared_numeric_columns(synthetic: &Table, original: &Table) -> Vec<SharedColumn> {
    let original_numeric = original.numeric_columns();

    synthetic
        .numeric_columns()
        .into_iter()
        .filter_map(|s| {
            let name = &synthetic.columns()[s];
            original
                .column_index(name)
                .filter(|o| original_numeric.contains(o))
                .map(|o| SharedColumn {
                    name: name.clone(),
                    synthetic: s,
                    original: o,
                })
        })
        .collect()
}

fn points(table: &Table, columns: impl Iterator<Item = usize> + Clone, limit: usize) -> Vec<Vec<f64>> {
    (0..table.row_count().min(limit))
        .map(|row| columns.clone().map(|col| table.numeric(row, col).unwrap_or(f64::NAN)).collect())
        .collect()
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => f64::midpoint(sorted[n / 2 - 1], sorted[n / 2]),
    }
}

#[expect(clippy::cast_precision_loss, reason = "row counts are far below 2^52")]
fn share(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::test_support::{datasets, table};

    fn results(evaluation: Evaluation) -> Vec<MetricResult> {
        match evaluation {
            Evaluation::Many(results) => results,
            other => panic!("expected a list of results, got {}", other.shape()),
        }
    }

    fn value(results: &[MetricResult], name: &str) -> f64 {
        results.iter().find(|r| r.name == name).unwrap().value.as_f64().unwrap()
    }

    #[test]
    fn test_distances_over_shared_numeric_columns() {
        let data = datasets(vec![
            ("Xtrain", table(&["x", "y", "city"], &[&["0", "0", "Oslo"], &["10", "10", "Rome"]])),
            ("Xsyn", table(&["x", "y", "city"], &[&["0", "0", "Lima"], &["3", "4", "Oslo"], &["10", "10", "Rome"]])),
        ]);

        let results = results(DistanceToClosestRecord.evaluate_privacy(&data, &Options::new()).unwrap());
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["dcr_min", "dcr_median", "dcr_zero_share"]);

        assert!(value(&results, "dcr_min").abs() < 1e-9);
        assert!(value(&results, "dcr_median").abs() < 1e-9);
        assert!((value(&results, "dcr_zero_share") - 2.0 / 3.0).abs() < 1e-9);

        let median = &results[1];
        assert_eq!(median.details["rows_evaluated"], Value::Int(3));
        assert_eq!(median.details["columns"], Value::List(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn test_median_of_even_count() {
        let data = datasets(vec![
            ("Xtrain", table(&["x"], &[&["0"]])),
            ("Xsyn", table(&["x"], &[&["1"], &["3"]])),
        ]);

        let results = results(DistanceToClosestRecord.evaluate_privacy(&data, &Options::new()).unwrap());
        assert!((value(&results, "dcr_min") - 1.0).abs() < 1e-9);
        assert!((value(&results, "dcr_median") - 2.0).abs() < 1e-9);
        assert!(value(&results, "dcr_zero_share").abs() < 1e-9);
    }

    #[test]
    fn test_max_rows_limits_evaluated_rows() {
        let data = datasets(vec![
            ("Xtrain", table(&["x"], &[&["0"]])),
            ("Xsyn", table(&["x"], &[&["0"], &["5"], &["7"]])),
        ]);
        let options = Options::new().with(MAX_ROWS_OPTION, 1_i64);

        let results = results(DistanceToClosestRecord.evaluate_privacy(&data, &options).unwrap());
        assert_eq!(results[1].details["rows_evaluated"], Value::Int(1));
        assert!((value(&results, "dcr_zero_share") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_dataset_gives_nothing() {
        let data = datasets(vec![("Xsyn", table(&["x"], &[&["1"]]))]);
        assert_eq!(DistanceToClosestRecord.evaluate_privacy(&data, &Options::new()).unwrap(), Evaluation::None);
    }

    #[test]
    fn test_no_shared_numeric_column_fails() {
        let data = datasets(vec![
            ("Xtrain", table(&["x"], &[&["a"]])),
            ("Xsyn", table(&["x"], &[&["1"]])),
        ]);

        let err = DistanceToClosestRecord.evaluate_privacy(&data, &Options::new()).unwrap_err();
        assert!(err.to_string().contains("share no numeric column"), "{err}");
    }
}
