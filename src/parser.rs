//! Recursive-descent parser from filter text to the [`Filter`] AST.
//!
//! Grammar:
//!
//! ```text
//! filter           := comparisonFilter | containerFilter
//! comparisonFilter := FIELD COMPARISON_OP value (LOGICAL_OP filter)?
//! containerFilter  := '(' filter ')' (LOGICAL_OP filter)?
//! value            := placeholder | boolean | null | number | FIELD | string
//! ```
//!
//! The continuation rule makes chained logical operators right-associative:
//! `a || b || c` parses as `a || (b || c)`. The builder's variadic fold is
//! left-associative instead; the two shapes are both intentional and the
//! stringifier's unconditional grouping keeps either unambiguous on the wire.

use std::collections::HashMap;

use tracing::trace;

use crate::builder::par;
use crate::error::Error;
use crate::filter::{ComparisonFilter, Filter, LogicalFilter};
use crate::ops::{op_of_symbol, ComparisonOp, FilterOp, LogicalOp};
use crate::token::{Token, TokenKind, Tokenizer};
use crate::value::FilterValue;

/// Placeholder bindings: `{:name}` in the input resolves to `params["name"]`,
/// or to `null` when the name is absent.
pub type Params = HashMap<String, FilterValue>;

/// Parses a filter string without placeholder bindings.
///
/// ```
/// use filter_syntax::{eq, parse_filter};
///
/// assert_eq!(parse_filter("a = 1").unwrap(), eq("a", 1));
/// ```
pub fn parse_filter(input: &str) -> Result<Filter, Error> {
    parse_filter_with(input, &Params::new())
}

/// Parses a filter string, resolving `{:name}` placeholders against `params`.
///
/// ```
/// use filter_syntax::{like, parse_filter_with, Params};
///
/// let mut params = Params::new();
/// params.insert("title".to_string(), "example".into());
/// let f = parse_filter_with("title ~ {:title}", &params).unwrap();
/// assert_eq!(f, like("title", "example"));
/// ```
pub fn parse_filter_with(input: &str, params: &Params) -> Result<Filter, Error> {
    trace!(input, "parsing filter expression");
    Parser::new(input, params).parse()
}

/// Two-slot recursive-descent parser: the current token plus one of
/// lookahead, pulled lazily from the tokenizer.
struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    params: &'a Params,
    current: Token,
    next: Token,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, params: &'a Params) -> Self {
        let mut tokenizer = Tokenizer::new(input);
        let current = tokenizer.next_token();
        let next = tokenizer.next_token();
        Parser {
            tokenizer,
            params,
            current,
            next,
        }
    }

    fn parse(mut self) -> Result<Filter, Error> {
        let filter = self.parse_filter_expr()?;
        // A complete parse consumes the whole input; a filter followed by
        // anything but a logical operator is malformed, not truncated.
        match self.current.kind {
            TokenKind::Eof => Ok(filter),
            TokenKind::Unknown => Err(Error::Lex {
                position: self.current.position,
            }),
            _ => Err(Error::UnexpectedToken {
                expected: vec![TokenKind::LogicalOp, TokenKind::Eof],
                found: self.current,
            }),
        }
    }

    fn parse_filter_expr(&mut self) -> Result<Filter, Error> {
        match self.current.kind {
            TokenKind::Field => self.parse_comparison(),
            TokenKind::ContainerOp => self.parse_container(),
            TokenKind::Unknown => Err(Error::Lex {
                position: self.current.position,
            }),
            _ => Err(Error::UnexpectedToken {
                expected: vec![TokenKind::Field, TokenKind::ContainerOp],
                found: self.current.clone(),
            }),
        }
    }

    fn parse_comparison(&mut self) -> Result<Filter, Error> {
        let field = self.consume(&[TokenKind::Field])?;
        let op_token = self.consume(&[TokenKind::ComparisonOp])?;
        let op = comparison_op(&op_token)?;

        let raw = self.consume(&[
            TokenKind::Boolean,
            TokenKind::Field,
            TokenKind::String,
            TokenKind::Number,
            TokenKind::Null,
            TokenKind::Placeholder,
        ])?;
        let value = self.resolve_value(raw)?;

        let filter = Filter::Comparison(ComparisonFilter {
            field: field.text,
            op,
            value,
        });
        self.parse_logical_if_present(filter)
    }

    fn parse_container(&mut self) -> Result<Filter, Error> {
        self.consume_symbol(TokenKind::ContainerOp, "(")?;
        let inner = self.parse_filter_expr()?;
        self.consume_symbol(TokenKind::ContainerOp, ")")?;
        self.parse_logical_if_present(par(inner))
    }

    fn parse_logical(&mut self, lhs: Filter) -> Result<Filter, Error> {
        let op_token = self.consume(&[TokenKind::LogicalOp])?;
        let op = logical_op(&op_token)?;
        let rhs = self.parse_filter_expr()?;
        let filter = Filter::Logical(LogicalFilter {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        });
        self.parse_logical_if_present(filter)
    }

    /// Continuation rule: a trailing logical operator starts a new level with
    /// everything built so far on the left. An already-logical left side is
    /// grouped first, mirroring the builder fold's wrap of the accumulated
    /// side one level at a time.
    fn parse_logical_if_present(&mut self, filter: Filter) -> Result<Filter, Error> {
        if self.current.kind == TokenKind::LogicalOp {
            let lhs = if filter.is_logical() {
                par(filter)
            } else {
                filter
            };
            return self.parse_logical(lhs);
        }
        Ok(filter)
    }

    fn resolve_value(&self, token: Token) -> Result<FilterValue, Error> {
        match token.kind {
            TokenKind::Placeholder => {
                // Strip `{:` and `}`; unresolved names bind to null.
                let name = &token.text[2..token.text.len() - 1];
                Ok(self
                    .params
                    .get(name)
                    .cloned()
                    .unwrap_or(FilterValue::Null))
            }
            // Field-to-field comparison: the path is kept verbatim and is not
            // distinguished from a string at the value level.
            TokenKind::Field => Ok(FilterValue::String(token.text)),
            TokenKind::String => {
                if token.text.starts_with('\'') && token.text.ends_with('\'') {
                    let inner = &token.text[1..token.text.len() - 1];
                    return Ok(FilterValue::String(inner.to_string()));
                }
                match serde_json::from_str::<String>(&token.text) {
                    Ok(s) => Ok(FilterValue::String(s)),
                    Err(_) => Err(Error::InvalidLiteral { text: token.text }),
                }
            }
            TokenKind::Boolean => Ok(FilterValue::Bool(token.text == "true")),
            TokenKind::Null => Ok(FilterValue::Null),
            // The lexer is laxer than JSON about numbers (`+1`, `.5`); those
            // forms fail literal decoding here rather than being normalized.
            TokenKind::Number => match serde_json::from_str::<serde_json::Number>(&token.text) {
                Ok(n) => Ok(FilterValue::Number(n)),
                Err(_) => Err(Error::InvalidLiteral { text: token.text }),
            },
            _ => Err(Error::UnexpectedToken {
                expected: vec![
                    TokenKind::Boolean,
                    TokenKind::Field,
                    TokenKind::String,
                    TokenKind::Number,
                    TokenKind::Null,
                    TokenKind::Placeholder,
                ],
                found: token,
            }),
        }
    }

    /// Returns the current token and advances, failing when its kind is not
    /// one of `expected`. An `Unknown` token is always a lex failure.
    fn consume(&mut self, expected: &[TokenKind]) -> Result<Token, Error> {
        if self.current.kind == TokenKind::Unknown {
            return Err(Error::Lex {
                position: self.current.position,
            });
        }
        if !expected.contains(&self.current.kind) {
            return Err(Error::UnexpectedToken {
                expected: expected.to_vec(),
                found: self.current.clone(),
            });
        }
        Ok(self.advance())
    }

    /// [`Self::consume`] plus an exact-text check, used for the parenthesis
    /// tokens where the kind alone does not identify the delimiter.
    fn consume_symbol(&mut self, expected: TokenKind, text: &'static str) -> Result<Token, Error> {
        let token = self.consume(&[expected])?;
        if token.text != text {
            return Err(Error::UnexpectedSymbol {
                expected: text,
                found: token,
            });
        }
        Ok(token)
    }

    fn advance(&mut self) -> Token {
        let upcoming = self.tokenizer.next_token();
        std::mem::replace(
            &mut self.current,
            std::mem::replace(&mut self.next, upcoming),
        )
    }
}

fn comparison_op(token: &Token) -> Result<ComparisonOp, Error> {
    match op_of_symbol(&token.text) {
        Some(FilterOp::Comparison(op)) => Ok(op),
        _ => Err(Error::UnknownOperator {
            symbol: token.text.clone(),
        }),
    }
}

fn logical_op(token: &Token) -> Result<LogicalOp, Error> {
    match op_of_symbol(&token.text) {
        Some(FilterOp::Logical(op)) => Ok(op),
        _ => Err(Error::UnknownOperator {
            symbol: token.text.clone(),
        }),
    }
}
