//! The value domain for the right-hand side of comparisons.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A comparison right-hand side.
///
/// Numbers are kept as [`serde_json::Number`] so that integer literals keep
/// their integer rendering (`1`, not `1.0`) across a parse/stringify cycle.
/// Field paths used as values (`a = b`) are stored as plain [`String`]s; the
/// wire format does not distinguish them from string literals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Timestamp(Timestamp),
}

impl FilterValue {
    /// Falsiness test used by the `maybe` builder variants: `null`, `false`,
    /// numeric zero, and the empty string are absent-like. Timestamps are
    /// always present.
    pub fn is_falsy(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Bool(b) => !b,
            FilterValue::Number(n) => n.as_f64() == Some(0.0),
            FilterValue::String(s) => s.is_empty(),
            FilterValue::Timestamp(_) => false,
        }
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Number(Number::from(v))
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Number(Number::from(v))
    }
}

impl From<u64> for FilterValue {
    fn from(v: u64) -> Self {
        FilterValue::Number(Number::from(v))
    }
}

impl From<f64> for FilterValue {
    /// Non-finite values are not representable as JSON numbers and become
    /// `Null`, matching JSON literal encoding.
    fn from(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => FilterValue::Number(n),
            None => FilterValue::Null,
        }
    }
}

impl From<Number> for FilterValue {
    fn from(v: Number) -> Self {
        FilterValue::Number(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::String(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::String(v)
    }
}

impl From<Timestamp> for FilterValue {
    fn from(v: Timestamp) -> Self {
        FilterValue::Timestamp(v)
    }
}

impl<T> From<Option<T>> for FilterValue
where
    T: Into<FilterValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => FilterValue::Null,
        }
    }
}
