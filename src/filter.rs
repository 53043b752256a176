//! The filter AST: three node shapes and the sum type over them.
//!
//! Trees are immutable values. The builders and the parser only ever produce
//! new nodes; nothing mutates a child in place, so a tree can be shared
//! read-only across threads.

use serde::{Deserialize, Serialize};

use crate::ops::{ComparisonOp, ContainerOp, FilterOp, LogicalOp};
use crate::value::FilterValue;

/// Leaf node: `field op value`.
///
/// `field` is an opaque path (`name`, `name.sub`,
/// `@request.data.role:isset`); its syntax is only validated when the tree
/// is stringified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFilter {
    pub field: String,
    pub op: ComparisonOp,
    pub value: FilterValue,
}

/// Binary node joining two sub-filters with `&&` or `||`. Children are
/// exclusively owned; the tree is finite and acyclic by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogicalFilter {
    pub lhs: Box<Filter>,
    pub op: LogicalOp,
    pub rhs: Box<Filter>,
}

/// An explicitly parenthesized sub-expression, preserved as its own node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerFilter {
    pub op: ContainerOp,
    pub filter: Box<Filter>,
}

/// The whole AST vocabulary. There is no NOT node; negation is a transform
/// over the tree (see [`crate::builder::not`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    Comparison(ComparisonFilter),
    Logical(LogicalFilter),
    Container(ContainerFilter),
}

impl Filter {
    /// The node's operator, tagged with its registry table.
    pub fn op(&self) -> FilterOp {
        match self {
            Filter::Comparison(f) => FilterOp::Comparison(f.op),
            Filter::Logical(f) => FilterOp::Logical(f.op),
            Filter::Container(f) => FilterOp::Container(f.op),
        }
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Filter::Logical(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Filter::Container(_))
    }
}

impl From<ComparisonFilter> for Filter {
    fn from(f: ComparisonFilter) -> Self {
        Filter::Comparison(f)
    }
}

impl From<LogicalFilter> for Filter {
    fn from(f: LogicalFilter) -> Self {
        Filter::Logical(f)
    }
}

impl From<ContainerFilter> for Filter {
    fn from(f: ContainerFilter) -> Self {
        Filter::Container(f)
    }
}
