//! The metric capability contract and its value model
//!
//! Every plugin implements [`MetricPlugin`], whose single operation
//! `evaluate_privacy` receives the run's datasets and [`Options`] and returns an
//! [`Evaluation`]: nothing, a single [`MetricResult`], or an ordered list of them.
//!
//! Results carry a [`Value`], a small closed set of shapes (null, boolean, integer,
//! float, text, list, map) shared with the run options, so report generators never need
//! to inspect values dynamically.

mod evaluation;
mod metric_result;
mod options;
mod plugin;
mod value;

pub use evaluation::Evaluation;
pub use metric_result::MetricResult;
pub use options::Options;
pub use plugin::MetricPlugin;
pub use value::Value;
