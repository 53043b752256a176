//! Operator registry: the fixed identifier/symbol tables every other module
//! consults, plus the inverse table used for negation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping operators. `Par` is the only one: an explicitly parenthesized
/// sub-expression. Its wire symbol is empty; the parentheses themselves are
/// produced by the stringifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerOp {
    Par,
}

/// Logical connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    And,
    Or,
}

/// Field comparison operators. The `any*` family compares against multi-value
/// fields ("at least one element matches").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    Nlike,
    Any,
    Nany,
    Anygt,
    Anygte,
    Anylt,
    Anylte,
    Anylike,
    Nanylike,
}

/// Registry order for the container table.
pub const CONTAINER_OPS: [ContainerOp; 1] = [ContainerOp::Par];

/// Registry order for the logical table.
pub const LOGICAL_OPS: [LogicalOp; 2] = [LogicalOp::And, LogicalOp::Or];

/// Registry order for the comparison table.
pub const COMPARISON_OPS: [ComparisonOp; 16] = [
    ComparisonOp::Eq,
    ComparisonOp::Neq,
    ComparisonOp::Gt,
    ComparisonOp::Gte,
    ComparisonOp::Lt,
    ComparisonOp::Lte,
    ComparisonOp::Like,
    ComparisonOp::Nlike,
    ComparisonOp::Any,
    ComparisonOp::Nany,
    ComparisonOp::Anygt,
    ComparisonOp::Anygte,
    ComparisonOp::Anylt,
    ComparisonOp::Anylte,
    ComparisonOp::Anylike,
    ComparisonOp::Nanylike,
];

/// Comparison table re-ordered longest symbol first (stable within equal
/// lengths). The tokenizer must try `?>=` before `?>` before `>`.
pub(crate) const COMPARISON_OPS_LONGEST_FIRST: [ComparisonOp; 16] = [
    ComparisonOp::Nany,
    ComparisonOp::Anygte,
    ComparisonOp::Anylte,
    ComparisonOp::Nanylike,
    ComparisonOp::Neq,
    ComparisonOp::Gte,
    ComparisonOp::Lte,
    ComparisonOp::Nlike,
    ComparisonOp::Any,
    ComparisonOp::Anygt,
    ComparisonOp::Anylt,
    ComparisonOp::Anylike,
    ComparisonOp::Eq,
    ComparisonOp::Gt,
    ComparisonOp::Lt,
    ComparisonOp::Like,
];

impl ContainerOp {
    pub fn ident(self) -> &'static str {
        match self {
            ContainerOp::Par => "par",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ContainerOp::Par => "",
        }
    }

    /// `par` is its own inverse: negating a grouped expression is a no-op.
    pub fn inverse(self) -> ContainerOp {
        match self {
            ContainerOp::Par => ContainerOp::Par,
        }
    }
}

impl LogicalOp {
    pub fn ident(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }

    /// De Morgan pairing.
    pub fn inverse(self) -> LogicalOp {
        match self {
            LogicalOp::And => LogicalOp::Or,
            LogicalOp::Or => LogicalOp::And,
        }
    }
}

impl ComparisonOp {
    pub fn ident(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "eq",
            ComparisonOp::Neq => "neq",
            ComparisonOp::Gt => "gt",
            ComparisonOp::Gte => "gte",
            ComparisonOp::Lt => "lt",
            ComparisonOp::Lte => "lte",
            ComparisonOp::Like => "like",
            ComparisonOp::Nlike => "nlike",
            ComparisonOp::Any => "any",
            ComparisonOp::Nany => "nany",
            ComparisonOp::Anygt => "anygt",
            ComparisonOp::Anygte => "anygte",
            ComparisonOp::Anylt => "anylt",
            ComparisonOp::Anylte => "anylte",
            ComparisonOp::Anylike => "anylike",
            ComparisonOp::Nanylike => "nanylike",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Neq => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Like => "~",
            ComparisonOp::Nlike => "!~",
            ComparisonOp::Any => "?=",
            ComparisonOp::Nany => "?!=",
            ComparisonOp::Anygt => "?>",
            ComparisonOp::Anygte => "?>=",
            ComparisonOp::Anylt => "?<",
            ComparisonOp::Anylte => "?<=",
            ComparisonOp::Anylike => "?~",
            ComparisonOp::Nanylike => "?!~",
        }
    }

    /// The operator whose meaning is the negation of `self`. Inversion is an
    /// involution: `op.inverse().inverse() == op`. Note the strict/non-strict
    /// swap on the ordering operators (`gt` inverts to `lte`, not `lt`).
    pub fn inverse(self) -> ComparisonOp {
        match self {
            ComparisonOp::Eq => ComparisonOp::Neq,
            ComparisonOp::Neq => ComparisonOp::Eq,
            ComparisonOp::Gt => ComparisonOp::Lte,
            ComparisonOp::Gte => ComparisonOp::Lt,
            ComparisonOp::Lt => ComparisonOp::Gte,
            ComparisonOp::Lte => ComparisonOp::Gt,
            ComparisonOp::Like => ComparisonOp::Nlike,
            ComparisonOp::Nlike => ComparisonOp::Like,
            ComparisonOp::Any => ComparisonOp::Nany,
            ComparisonOp::Nany => ComparisonOp::Any,
            ComparisonOp::Anygt => ComparisonOp::Anylte,
            ComparisonOp::Anygte => ComparisonOp::Anylt,
            ComparisonOp::Anylt => ComparisonOp::Anygte,
            ComparisonOp::Anylte => ComparisonOp::Anygt,
            ComparisonOp::Anylike => ComparisonOp::Nanylike,
            ComparisonOp::Nanylike => ComparisonOp::Anylike,
        }
    }
}

/// Any operator identifier, tagged with the table it belongs to. The three
/// identifier sets are disjoint by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOp {
    Container(ContainerOp),
    Logical(LogicalOp),
    Comparison(ComparisonOp),
}

impl FilterOp {
    pub fn ident(self) -> &'static str {
        match self {
            FilterOp::Container(op) => op.ident(),
            FilterOp::Logical(op) => op.ident(),
            FilterOp::Comparison(op) => op.ident(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FilterOp::Container(op) => op.symbol(),
            FilterOp::Logical(op) => op.symbol(),
            FilterOp::Comparison(op) => op.symbol(),
        }
    }

    pub fn inverse(self) -> FilterOp {
        match self {
            FilterOp::Container(op) => FilterOp::Container(op.inverse()),
            FilterOp::Logical(op) => FilterOp::Logical(op.inverse()),
            FilterOp::Comparison(op) => FilterOp::Comparison(op.inverse()),
        }
    }

    /// Looks an identifier (`"eq"`, `"and"`, `"par"`, ...) up across the
    /// three tables. Unknown identifiers yield `None`.
    pub fn from_ident(ident: &str) -> Option<FilterOp> {
        op_of_ident(ident)
    }

    /// Reverse lookup by wire symbol, scanning container, then logical, then
    /// comparison tables in that order. Exact match only; input is not
    /// trimmed or normalized.
    pub fn from_symbol(symbol: &str) -> Option<FilterOp> {
        op_of_symbol(symbol)
    }
}

impl fmt::Display for ContainerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

/// Which registry table an operator identifier belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    Container,
    Logical,
    Comparison,
}

/// Membership test against the three identifier sets. Unknown identifiers
/// (including symbols like `"="`) classify as `None`.
///
/// ```
/// use filter_syntax::{classify, OpClass};
///
/// assert_eq!(classify("par"), Some(OpClass::Container));
/// assert_eq!(classify("or"), Some(OpClass::Logical));
/// assert_eq!(classify("anygte"), Some(OpClass::Comparison));
/// assert_eq!(classify("="), None);
/// ```
pub fn classify(ident: &str) -> Option<OpClass> {
    match op_of_ident(ident)? {
        FilterOp::Container(_) => Some(OpClass::Container),
        FilterOp::Logical(_) => Some(OpClass::Logical),
        FilterOp::Comparison(_) => Some(OpClass::Comparison),
    }
}

/// Wire symbol for an operator identifier; `""` for anything unrecognized.
/// Never fails.
pub fn symbol_of(ident: &str) -> &'static str {
    match op_of_ident(ident) {
        Some(op) => op.symbol(),
        None => "",
    }
}

/// Operator for a wire symbol, scanning container, then logical, then
/// comparison tables. `None` when nothing matches exactly.
pub fn op_of_symbol(symbol: &str) -> Option<FilterOp> {
    for op in CONTAINER_OPS {
        if op.symbol() == symbol {
            return Some(FilterOp::Container(op));
        }
    }
    for op in LOGICAL_OPS {
        if op.symbol() == symbol {
            return Some(FilterOp::Logical(op));
        }
    }
    for op in COMPARISON_OPS {
        if op.symbol() == symbol {
            return Some(FilterOp::Comparison(op));
        }
    }
    None
}

fn op_of_ident(ident: &str) -> Option<FilterOp> {
    for op in CONTAINER_OPS {
        if op.ident() == ident {
            return Some(FilterOp::Container(op));
        }
    }
    for op in LOGICAL_OPS {
        if op.ident() == ident {
            return Some(FilterOp::Logical(op));
        }
    }
    for op in COMPARISON_OPS {
        if op.ident() == ident {
            return Some(FilterOp::Comparison(op));
        }
    }
    None
}
