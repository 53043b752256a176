//! Tokenizer for the textual filter grammar.
//!
//! A single cursor walks the input and tries the matchers in a fixed
//! priority order: logical symbols, comparison symbols (longest first, so
//! `?>=` wins over `?>` over `>`), parentheses, placeholders, the
//! `true`/`false`/`null` literals, numbers, field paths, quoted strings.
//! Whitespace between tokens is skipped; anything else becomes an
//! [`TokenKind::Unknown`] token, which the parser reports as a lex failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ops::{COMPARISON_OPS_LONGEST_FIRST, LOGICAL_OPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Eof,
    Unknown,
    LogicalOp,
    ComparisonOp,
    ContainerOp,
    Placeholder,
    Boolean,
    Null,
    Number,
    Field,
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "eof",
            TokenKind::Unknown => "unknown",
            TokenKind::LogicalOp => "logical_op",
            TokenKind::ComparisonOp => "comparison_op",
            TokenKind::ContainerOp => "container_op",
            TokenKind::Placeholder => "placeholder",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Number => "number",
            TokenKind::Field => "field",
            TokenKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A typed slice of the input. `text` is the matched text verbatim (quoted
/// strings keep their delimiters); `position` is the byte offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

/// Cursor-based lexer over a filter string.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, pos: 0 }
    }

    /// Produces the next token. Never fails: exhausted input yields `Eof`
    /// tokens and unlexable input yields a single `Unknown` token covering
    /// the offending run of characters.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                position: self.pos,
            };
        }

        for op in LOGICAL_OPS {
            if rest.starts_with(op.symbol()) {
                return self.take(TokenKind::LogicalOp, op.symbol().len());
            }
        }

        for op in COMPARISON_OPS_LONGEST_FIRST {
            if rest.starts_with(op.symbol()) {
                return self.take(TokenKind::ComparisonOp, op.symbol().len());
            }
        }

        if rest.starts_with('(') || rest.starts_with(')') {
            return self.take(TokenKind::ContainerOp, 1);
        }

        if let Some(len) = match_placeholder(rest) {
            return self.take(TokenKind::Placeholder, len);
        }

        if let Some(len) = match_keyword(rest, "true").or_else(|| match_keyword(rest, "false")) {
            return self.take(TokenKind::Boolean, len);
        }

        if let Some(len) = match_keyword(rest, "null") {
            return self.take(TokenKind::Null, len);
        }

        if let Some(len) = match_number(rest) {
            return self.take(TokenKind::Number, len);
        }

        if let Some(len) = match_field_path(rest) {
            return self.take(TokenKind::Field, len);
        }

        if let Some(len) = match_string(rest) {
            return self.take(TokenKind::String, len);
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.take(TokenKind::Unknown, end)
    }

    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let token = Token {
            kind,
            text: self.input[self.pos..self.pos + len].to_string(),
            position: self.pos,
        };
        self.pos += len;
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.input[self.pos..].chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }
}

/// `{:name}`; the name is any non-empty run of non-whitespace characters
/// other than the closing brace.
fn match_placeholder(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("{:")?;
    let mut len = 0;
    for c in rest.chars() {
        if c == '}' {
            return if len > 0 { Some(2 + len + 1) } else { None };
        }
        if c.is_whitespace() {
            return None;
        }
        len += c.len_utf8();
    }
    None
}

/// A literal keyword, required to end at a field-path boundary so that
/// `trueish` lexes as a field rather than `true` + garbage.
fn match_keyword(s: &str, keyword: &str) -> Option<usize> {
    let rest = s.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if is_word_char(c) || c == '.' || c == ':' => None,
        _ => Some(keyword.len()),
    }
}

/// `[+-]? digits? ('.' digits)?` with at least one digit overall; a trailing
/// bare dot is left for the next token.
fn match_number(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            return Some(j);
        }
    }
    if i > int_start {
        Some(i)
    } else {
        None
    }
}

/// Field-path syntax: `@?\w+(\.\w+)*(:[a-z_]+)?`. Returns the matched length
/// from the start of `s`, or `None` when `s` does not begin with a field
/// path. Shared with the stringifier's field validation.
pub(crate) fn match_field_path(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'@') {
        i += 1;
    }

    let first = word_run(bytes, i);
    if first == 0 {
        return None;
    }
    i += first;

    while i < bytes.len() && bytes[i] == b'.' {
        let seg = word_run(bytes, i + 1);
        if seg == 0 {
            break;
        }
        i += 1 + seg;
    }

    if i < bytes.len() && bytes[i] == b':' {
        let mut j = i + 1;
        while j < bytes.len() && (bytes[j].is_ascii_lowercase() || bytes[j] == b'_') {
            j += 1;
        }
        if j > i + 1 {
            i = j;
        }
    }

    Some(i)
}

/// Quoted string: token text keeps the delimiters. Double-quoted strings
/// honor backslash escapes; single-quoted strings end at the nearest quote.
/// Either form may be empty.
fn match_string(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, quote) = chars.next()?;
    match quote {
        '"' => {
            let mut escaped = false;
            for (i, c) in chars {
                if escaped {
                    escaped = false;
                    continue;
                }
                match c {
                    '\\' => escaped = true,
                    '"' => return Some(i + 1),
                    _ => {}
                }
            }
            None
        }
        '\'' => {
            for (i, c) in chars {
                if c == '\'' {
                    return Some(i + 1);
                }
            }
            None
        }
        _ => None,
    }
}

fn word_run(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    i - from
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
