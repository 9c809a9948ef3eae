//! The metric capability contract, as a plugin unit.
//!
//! This unit lives in the plugin namespace so the contract has a concrete home next to
//! the real metrics, but it is not a metric. Discovery excludes it by identity and its
//! evaluation always fails.

use crate::Result;
use crate::data::DatasetMap;
use crate::metrics::{Evaluation, MetricPlugin, Options};
use ohno::bail;
use std::sync::Arc;

pub const UNIT_ID: &str = module_path!();

#[derive(Debug, Clone, Copy)]
pub struct Contract;

impl MetricPlugin for Contract {
    fn description(&self) -> &str {
        "Capability contract definition (not a metric)"
    }

    fn evaluate_privacy(&self, _data: &DatasetMap, _options: &Options) -> Result<Evaluation> {
        bail!("'{UNIT_ID}' defines the plugin contract and cannot be evaluated")
    }
}

pub fn load() -> Result<Option<Arc<dyn MetricPlugin>>> {
    Ok(Some(Arc::new(Contract)))
}
