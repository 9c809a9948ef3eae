//! Synthetic rows copied verbatim from the original dataset.
//!
//! Rows are only compared when both tables have the same header, column names and order
//! included. Tables whose headers differ yield a null value with an `error` detail, even
//! when their rows would line up positionally.

use super::dataset_pair;
use crate::Result;
use crate::data::DatasetMap;
use crate::metrics::{Evaluation, MetricPlugin, MetricResult, Options, Value};
use std::collections::HashSet;
use std::sync::Arc;

pub const UNIT_ID: &str = module_path!();

pub const METRIC_NAME: &str = "similar_check";

#[derive(Debug, Clone, Copy)]
pub struct SimilarCheck;

impl MetricPlugin for SimilarCheck {
    fn description(&self) -> &str {
        "Distinct synthetic rows that also appear in the original dataset"
    }

    fn evaluate_privacy(&self, data: &DatasetMap, options: &Options) -> Result<Evaluation> {
        let Some((synthetic_name, synthetic, original_name, original)) = dataset_pair(data, options) else {
            return Ok(Evaluation::None);
        };

        if synthetic.columns() != original.columns() {
            let result = MetricResult::new(METRIC_NAME, Value::Null).with_detail(
                "error",
                format!("cannot compare rows: '{synthetic_name}' and '{original_name}' have different columns"),
            );
            return Ok(result.into());
        }

        let original_rows: HashSet<&[String]> = original.rows().collect();
        let common = synthetic
            .rows()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter(|row| original_rows.contains(row))
            .count();

        Ok(MetricResult::new(METRIC_NAME, common).with_detail("common_rows", common).into())
    }
}

pub fn load() -> Result<Option<Arc<dyn MetricPlugin>>> {
    Ok(Some(Arc::new(SimilarCheck)))
}
