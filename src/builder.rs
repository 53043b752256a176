//! Construction algebra for [`Filter`] trees: comparison constructors,
//! variadic logical folds, grouping, and De Morgan negation.
//!
//! The `*_maybe` variants treat falsy values (`null`, `false`, `0`, `""`) and
//! `None` operands as absent: they drop them and return `None` when nothing
//! survives. The plain variants assume at least one present operand and
//! panic otherwise.

use crate::filter::{ComparisonFilter, ContainerFilter, Filter, LogicalFilter};
use crate::ops::{ComparisonOp, ContainerOp, LogicalOp};
use crate::value::FilterValue;

/// Builds a single comparison node. The field text is taken as-is; it is only
/// validated against the field-path syntax when the tree is stringified.
///
/// ```
/// use filter_syntax::{comparison, stringify_filter, ComparisonOp};
///
/// let f = comparison(ComparisonOp::Gte, "age", 21);
/// assert_eq!(stringify_filter(&f).unwrap(), "age >= 21");
/// ```
pub fn comparison(
    op: ComparisonOp,
    field: impl Into<String>,
    value: impl Into<FilterValue>,
) -> Filter {
    Filter::Comparison(ComparisonFilter {
        field: field.into(),
        op,
        value: value.into(),
    })
}

/// Like [`comparison`], but absent when the value is falsy.
pub fn comparison_maybe(
    op: ComparisonOp,
    field: impl Into<String>,
    value: impl Into<FilterValue>,
) -> Option<Filter> {
    let value = value.into();
    if value.is_falsy() {
        return None;
    }
    Some(comparison(op, field, value))
}

/// Compares `field` against each value and folds the comparisons with `or`.
/// Falsy values are dropped first.
///
/// # Panics
///
/// Panics when every value is falsy; use [`either_maybe`] when that can
/// happen.
pub fn either(
    op: ComparisonOp,
    field: impl Into<String>,
    values: impl IntoIterator<Item = impl Into<FilterValue>>,
) -> Filter {
    match either_maybe(op, field, values) {
        Some(filter) => filter,
        None => panic!("either() requires at least one present value"),
    }
}

/// Maps [`comparison_maybe`] over the values and or-folds the survivors.
pub fn either_maybe(
    op: ComparisonOp,
    field: impl Into<String>,
    values: impl IntoIterator<Item = impl Into<FilterValue>>,
) -> Option<Filter> {
    let field = field.into();
    or_maybe(
        values
            .into_iter()
            .map(|value| comparison_maybe(op, &field, value))
            .collect::<Vec<_>>(),
    )
}

/// And-folds the operands left to right.
///
/// A single operand is returned unwrapped. With three or more operands the
/// previously accumulated pair is parenthesized as it becomes the new left
/// side, unless the incoming operand is itself a logical filter. The check
/// is on the incoming operand's shape, not the accumulator's.
///
/// ```
/// use filter_syntax::{and, eq, stringify_filter};
///
/// let f = and([eq("a", 1), eq("b", 2), eq("c", 3)]);
/// assert_eq!(stringify_filter(&f).unwrap(), "(a = 1 && b = 2) && c = 3");
/// ```
///
/// # Panics
///
/// Panics on an empty operand list; use [`and_maybe`] when that can happen.
pub fn and(exprs: impl IntoIterator<Item = Filter>) -> Filter {
    match fold_logical(LogicalOp::And, exprs) {
        Some(filter) => filter,
        None => panic!("and() requires at least one operand"),
    }
}

/// Or-folds the operands left to right; same shape rules as [`and`].
///
/// # Panics
///
/// Panics on an empty operand list; use [`or_maybe`] when that can happen.
pub fn or(exprs: impl IntoIterator<Item = Filter>) -> Filter {
    match fold_logical(LogicalOp::Or, exprs) {
        Some(filter) => filter,
        None => panic!("or() requires at least one operand"),
    }
}

/// [`and`] over optional operands: absents are dropped, and the result is
/// `None` when nothing survives. A lone survivor is returned unwrapped.
pub fn and_maybe(exprs: impl IntoIterator<Item = Option<Filter>>) -> Option<Filter> {
    fold_logical(LogicalOp::And, exprs.into_iter().flatten())
}

/// [`or`] over optional operands; see [`and_maybe`].
pub fn or_maybe(exprs: impl IntoIterator<Item = Option<Filter>>) -> Option<Filter> {
    fold_logical(LogicalOp::Or, exprs.into_iter().flatten())
}

fn fold_logical(op: LogicalOp, exprs: impl IntoIterator<Item = Filter>) -> Option<Filter> {
    let mut exprs = exprs.into_iter();
    let first = exprs.next()?;
    let second = match exprs.next() {
        Some(expr) => expr,
        None => return Some(first),
    };

    let mut acc = LogicalFilter {
        lhs: Box::new(first),
        op,
        rhs: Box::new(second),
    };

    for expr in exprs {
        let incoming_is_logical = expr.is_logical();
        let prev = Filter::Logical(acc);
        // The accumulated pair is grouped unless the *incoming* operand is
        // itself logical; that asymmetry is part of the fold's contract.
        let lhs = if incoming_is_logical { prev } else { par(prev) };
        acc = LogicalFilter {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(expr),
        };
    }

    Some(Filter::Logical(acc))
}

/// Wraps the filter in an explicit group. Idempotent: an already grouped
/// filter is returned unchanged, so `par(par(f)) == par(f)`.
pub fn par(filter: Filter) -> Filter {
    match filter {
        Filter::Container(_) => filter,
        other => Filter::Container(ContainerFilter {
            op: ContainerOp::Par,
            filter: Box::new(other),
        }),
    }
}

/// Negates a filter.
///
/// Comparisons swap to their registry inverse (`eq` → `neq`, `gt` → `lte`);
/// logical nodes expand by De Morgan (operator inverted, both sides negated
/// recursively). Grouped filters are returned unchanged; to negate a
/// grouped expression, negate the inner expression before grouping it.
///
/// ```
/// use filter_syntax::{eq, not, stringify_filter};
///
/// let f = not(eq("a", 1));
/// assert_eq!(stringify_filter(&f).unwrap(), "a != 1");
/// assert_eq!(not(not(eq("a", 1))), eq("a", 1));
/// ```
pub fn not(filter: Filter) -> Filter {
    match filter {
        Filter::Container(_) => filter,
        Filter::Comparison(f) => Filter::Comparison(ComparisonFilter {
            op: f.op.inverse(),
            ..f
        }),
        Filter::Logical(f) => Filter::Logical(LogicalFilter {
            lhs: Box::new(not(*f.lhs)),
            op: f.op.inverse(),
            rhs: Box::new(not(*f.rhs)),
        }),
    }
}

/// `field != ""`, i.e. the field holds some non-empty value.
pub fn not_empty(field: impl Into<String>) -> Filter {
    not(eq(field, ""))
}

/// `field = value`
pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Eq, field, value)
}

/// `field > value`
pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Gt, field, value)
}

/// `field >= value`
pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Gte, field, value)
}

/// `field < value`
pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Lt, field, value)
}

/// `field <= value`
pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Lte, field, value)
}

/// `field ~ value`
pub fn like(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Like, field, value)
}

/// `field ?= value`
pub fn any(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Any, field, value)
}

/// `field ?> value`
pub fn anygt(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Anygt, field, value)
}

/// `field ?>= value`
pub fn anygte(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Anygte, field, value)
}

/// `field ?< value`
pub fn anylt(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Anylt, field, value)
}

/// `field ?<= value`
pub fn anylte(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Anylte, field, value)
}

/// `field ?~ value`
pub fn anylike(field: impl Into<String>, value: impl Into<FilterValue>) -> Filter {
    comparison(ComparisonOp::Anylike, field, value)
}
