//! # filter-syntax
//!
//! Builds, parses, and prints the boolean filter expressions a record store
//! accepts: field comparisons joined by `&&`/`||` with explicit grouping,
//! e.g. `(status = true || role != "guest") && created > {:since}`.
//!
//! The three surfaces share one AST:
//!
//! - the builder functions ([`eq`], [`and`], [`not`], ...) construct and
//!   normalize trees in code,
//! - [`parse_filter`] / [`parse_filter_with`] turn filter text (plus optional
//!   placeholder bindings) into the same tree,
//! - [`stringify_filter`] renders any tree back to canonical text for
//!   transport.
//!
//! ## Example
//! ```
//! use filter_syntax::{and, eq, like, not, or, par, parse_filter, stringify_filter};
//!
//! // Build...
//! let f = and([
//!     par(or([eq("status", "open"), eq("status", "stale")])),
//!     not(like("title", "wip")),
//! ]);
//! let text = stringify_filter(&f).unwrap();
//! assert_eq!(text, r#"(status = "open" || status = "stale") && title !~ "wip""#);
//!
//! // ...and the canonical text parses back to the same tree.
//! assert_eq!(parse_filter(&text).unwrap(), f);
//! ```
//!
//! Trees are immutable values: every transform (grouping, negation, folding)
//! returns a new tree, so parsing, building, and stringifying are pure and
//! freely usable across threads.

mod builder;
mod error;
mod filter;
mod ops;
mod parser;
mod stringify;
mod token;
mod value;

pub use jiff::Timestamp;

pub use builder::*;
pub use error::Error;
pub use filter::{ComparisonFilter, ContainerFilter, Filter, LogicalFilter};
pub use ops::{
    classify, op_of_symbol, symbol_of, ComparisonOp, ContainerOp, FilterOp, LogicalOp, OpClass,
    COMPARISON_OPS, CONTAINER_OPS, LOGICAL_OPS,
};
pub use parser::{parse_filter, parse_filter_with, Params};
pub use stringify::{stringify_filter, stringify_filter_maybe};
pub use token::{Token, TokenKind, Tokenizer};
pub use value::FilterValue;
