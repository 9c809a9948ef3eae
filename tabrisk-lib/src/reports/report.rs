use crate::data::DatasetMap;
use crate::engine::{PluginRun, Warning};
use crate::metrics::MetricResult;
use chrono::{DateTime, Utc};

/// Shape of one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

impl DatasetSummary {
    /// One summary per dataset, in load order.
    #[must_use]
    pub fn from_map(data: &DatasetMap) -> Vec<Self> {
        data.iter()
            .map(|(name, table)| Self {
                name: name.to_string(),
                rows: table.row_count(),
                columns: table.column_count(),
            })
            .collect()
    }
}

/// Everything a report renders.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub datasets: &'a [DatasetSummary],
    pub results: &'a [MetricResult],
    pub runs: &'a [PluginRun],
    pub warnings: &'a [Warning],
}
