use super::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// The unit of output produced by a metric plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub name: String,

    /// Primary scalar of the metric; `Value::Null` means "see details".
    pub value: Value,

    pub details: BTreeMap<String, Value>,
}

impl MetricResult {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.details.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.details.extend(details);
        self
    }

    /// A result is well-formed when its name has visible content.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_details() {
        let result = MetricResult::new("rowcount", 5_i64);
        assert_eq!(result.name, "rowcount");
        assert_eq!(result.value, Value::Int(5));
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_with_detail_overwrites_same_key() {
        let result = MetricResult::new("m", Value::Null).with_detail("k", 1_i64).with_detail("k", 2_i64);
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.details["k"], Value::Int(2));
    }

    #[test]
    fn test_well_formed() {
        assert!(MetricResult::new("x", 1_i64).is_well_formed());
        assert!(!MetricResult::new("", 1_i64).is_well_formed());
        assert!(!MetricResult::new("  \t", 1_i64).is_well_formed());
    }

    #[test]
    fn test_serialize_keeps_null_value_and_empty_details() {
        let json = serde_json::to_value(MetricResult::new("row_count", Value::Null)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "row_count", "value": null, "details": {} }));
    }
}
