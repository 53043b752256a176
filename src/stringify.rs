//! Canonical text rendering of [`Filter`] trees.

use jiff::tz::TimeZone;
use jiff::Timestamp;

use crate::error::Error;
use crate::filter::Filter;
use crate::token::match_field_path;
use crate::value::FilterValue;

/// Renders a filter as canonical text.
///
/// Logical children of logical nodes are always parenthesized, so the output
/// is unambiguous under the parser's right-associative grammar even when the
/// tree was hand-assembled without explicit grouping. The only validation
/// performed anywhere in the crate happens here: every comparison field must
/// match the field-path syntax.
///
/// ```
/// use filter_syntax::{and, eq, gt, like, or, stringify_filter};
///
/// let f = and([or([eq("a", 1), gt("b", 1)]), like("c", "hey")]);
/// assert_eq!(stringify_filter(&f).unwrap(), r#"(a = 1 || b > 1) && c ~ "hey""#);
/// ```
pub fn stringify_filter(filter: &Filter) -> Result<String, Error> {
    match filter {
        Filter::Container(f) => Ok(format!("({})", stringify_filter(&f.filter)?)),
        Filter::Comparison(f) => {
            if !is_valid_field(&f.field) {
                return Err(Error::InvalidField {
                    field: f.field.clone(),
                });
            }
            Ok(format!(
                "{} {} {}",
                f.field,
                f.op.symbol(),
                wrap_value(&f.value)
            ))
        }
        Filter::Logical(f) => {
            let lhs = stringify_side(&f.lhs)?;
            let rhs = stringify_side(&f.rhs)?;
            Ok(format!("{} {} {}", lhs, f.op.symbol(), rhs))
        }
    }
}

/// [`stringify_filter`] over an optional tree; absent filters render as the
/// empty string, pairing with the builders' `maybe` variants.
pub fn stringify_filter_maybe(filter: Option<&Filter>) -> Result<String, Error> {
    match filter {
        Some(filter) => stringify_filter(filter),
        None => Ok(String::new()),
    }
}

fn stringify_side(side: &Filter) -> Result<String, Error> {
    if side.is_logical() {
        Ok(format!("({})", stringify_filter(side)?))
    } else {
        stringify_filter(side)
    }
}

/// Literal-value encoding: JSON for everything except timestamps, which
/// render as a quoted `YYYY-MM-DD HH:mm:ss.sssZ` (UTC, millisecond
/// precision, space instead of `T`).
fn wrap_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Null => "null".to_string(),
        FilterValue::Bool(b) => serde_json::Value::Bool(*b).to_string(),
        FilterValue::Number(n) => serde_json::Value::Number(n.clone()).to_string(),
        FilterValue::String(s) => serde_json::Value::String(s.clone()).to_string(),
        FilterValue::Timestamp(ts) => {
            serde_json::Value::String(format_timestamp(ts)).to_string()
        }
    }
}

fn format_timestamp(ts: &Timestamp) -> String {
    let dt = ts.to_zoned(TimeZone::UTC).datetime();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}Z",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.millisecond(),
    )
}

fn is_valid_field(field: &str) -> bool {
    match_field_path(field) == Some(field.len())
}
