use super::{Evaluation, Options};
use crate::Result;
use crate::data::DatasetMap;

/// The capability every metric plugin exposes.
///
/// Implementations receive the run's datasets and options by shared reference and must
/// not keep anything from one call to the next. Any error or panic is contained by the
/// engine; a plugin never needs to guard against its own failure.
pub trait MetricPlugin: Send + Sync {
    /// One-line human description of what the plugin measures.
    fn description(&self) -> &str;

    fn evaluate_privacy(&self, data: &DatasetMap, options: &Options) -> Result<Evaluation>;
}
