use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dynamically shaped value, used both for run options and for metric values/details.
///
/// The set of cases is closed so report generators can match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Map(BTreeMap<String, Self>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers are widened to `f64`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "option and metric integers are far below 2^53")]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl Display for Value {
    /// Formats the value for human consumption. Floats use four decimals.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => write!(f, "—"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v:.4}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Map(map) => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "—");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(0.5).to_string(), "0.5000");
        assert_eq!(Value::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_display_nested() {
        let mut map = BTreeMap::new();
        let _ = map.insert("b".to_string(), Value::Int(2));
        let _ = map.insert("a".to_string(), Value::List(vec![Value::Int(1), Value::Bool(false)]));
        assert_eq!(Value::Map(map).to_string(), "a: 1, false, b: 2");
    }

    #[test]
    fn test_as_f64_widens_integers() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("1.5").as_f64(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7_i64)), Value::Int(7));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let table: BTreeMap<String, Value> = toml::from_str(
            r#"
            name = "Xsyn"
            rows = 10
            share = 0.25
            verbose = true
            cols = ["a", "b"]
            [nested]
            k = 5
            "#,
        )
        .unwrap();

        assert_eq!(table["name"], Value::from("Xsyn"));
        assert_eq!(table["rows"], Value::Int(10));
        assert_eq!(table["share"], Value::Float(0.25));
        assert_eq!(table["verbose"], Value::Bool(true));
        assert_eq!(table["cols"], Value::List(vec![Value::from("a"), Value::from("b")]));
        assert!(matches!(&table["nested"], Value::Map(m) if m["k"] == Value::Int(5)));
    }

    #[test]
    fn test_serialize_to_json() {
        let json = serde_json::to_string(&Value::List(vec![Value::Null, Value::Int(1), Value::from("x")])).unwrap();
        assert_eq!(json, r#"[null,1,"x"]"#);
    }
}
