//! Row count of every loaded dataset.

use crate::Result;
use crate::data::DatasetMap;
use crate::metrics::{Evaluation, MetricPlugin, MetricResult, Options, Value};
use std::sync::Arc;

pub const UNIT_ID: &str = module_path!();

pub const METRIC_NAME: &str = "row_count";

#[derive(Debug, Clone, Copy)]
pub struct RowCount;

impl MetricPlugin for RowCount {
    fn description(&self) -> &str {
        "Number of rows in each loaded dataset"
    }

    fn evaluate_privacy(&self, data: &DatasetMap, _options: &Options) -> Result<Evaluation> {
        let counts = data.iter().map(|(name, table)| (name.to_string(), Value::from(table.row_count())));
        Ok(MetricResult::new(METRIC_NAME, Value::Null).with_details(counts).into())
    }
}

pub fn load() -> Result<Option<Arc<dyn MetricPlugin>>> {
    Ok(Some(Arc::new(RowCount)))
}
