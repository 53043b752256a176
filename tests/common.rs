#![allow(dead_code)]
//! Shared helpers for `filter-syntax` integration tests.

use filter_syntax::*;

pub fn parse_ok(input: &str) -> Filter {
    match parse_filter(input) {
        Ok(filter) => filter,
        Err(err) => panic!("expected {input:?} to parse, got: {err}"),
    }
}

pub fn parse_err(input: &str) -> Error {
    match parse_filter(input) {
        Err(err) => err,
        Ok(filter) => panic!("expected {input:?} to fail, got: {filter:?}"),
    }
}

pub fn render(filter: &Filter) -> String {
    match stringify_filter(filter) {
        Ok(text) => text,
        Err(err) => panic!("expected {filter:?} to stringify, got: {err}"),
    }
}

pub fn as_logical(filter: &Filter) -> &LogicalFilter {
    match filter {
        Filter::Logical(f) => f,
        other => panic!("expected a logical filter, got: {other:?}"),
    }
}

pub fn as_comparison(filter: &Filter) -> &ComparisonFilter {
    match filter {
        Filter::Comparison(f) => f,
        other => panic!("expected a comparison filter, got: {other:?}"),
    }
}

pub fn as_container(filter: &Filter) -> &Filter {
    match filter {
        Filter::Container(f) => &f.filter,
        other => panic!("expected a container filter, got: {other:?}"),
    }
}

pub fn ts(text: &str) -> Timestamp {
    text.parse().expect("test timestamp must be valid RFC 3339")
}
