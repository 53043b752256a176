//! Error type shared by the parser and the stringifier.

use std::fmt;

use crate::token::{Token, TokenKind};

/// Everything that can go wrong while parsing or stringifying a filter.
///
/// All variants are surfaced immediately to the caller; there is no partial
/// or recoverable parse. The builder functions never produce errors; their
/// `maybe` variants encode absence as `None` instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Input at `position` could not be tokenized.
    Lex { position: usize },
    /// The grammar required one of `expected`, the tokenizer produced
    /// something else.
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: Token,
    },
    /// A token of the right kind but the wrong literal text, e.g. `)` where
    /// `(` was required.
    UnexpectedSymbol {
        expected: &'static str,
        found: Token,
    },
    /// A matched operator symbol could not be mapped back to an operator
    /// identifier. The registry is the single source of truth for symbols,
    /// so this indicates an internal invariant violation.
    UnknownOperator { symbol: String },
    /// A number or string literal that failed literal-value decoding.
    InvalidLiteral { text: String },
    /// A comparison field that does not match the field-path syntax,
    /// detected while stringifying.
    InvalidField { field: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex { position } => {
                write!(f, "unrecognized input at byte {position}")
            }
            Error::UnexpectedToken { expected, found } => {
                write!(f, "expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(
                    f,
                    ", got {:?} ({}) at byte {}",
                    found.text, found.kind, found.position
                )
            }
            Error::UnexpectedSymbol { expected, found } => {
                write!(
                    f,
                    "expected {:?}, got {:?} at byte {}",
                    expected, found.text, found.position
                )
            }
            Error::UnknownOperator { symbol } => {
                write!(f, "symbol {symbol:?} maps to no known operator")
            }
            Error::InvalidLiteral { text } => {
                write!(f, "invalid literal: {text}")
            }
            Error::InvalidField { field } => {
                write!(f, "invalid field: {field}")
            }
        }
    }
}

impl std::error::Error for Error {}
