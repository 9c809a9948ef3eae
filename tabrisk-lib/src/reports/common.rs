//! Formatting shared across report generators.

use crate::metrics::{MetricResult, Value};
use core::time::Duration;

/// A metric's primary value, or a dash when it only carries details.
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Details as `key: value` pairs in key order.
pub fn format_details(result: &MetricResult) -> Vec<String> {
    result.details.iter().map(|(key, value)| format!("{key}: {value}")).collect()
}

pub fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
