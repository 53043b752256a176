mod common;

use common::*;
use filter_syntax::*;

#[test]
fn every_comparison_operator_parses() {
    let cases = [
        ("a = 1", ComparisonOp::Eq),
        ("a != 1", ComparisonOp::Neq),
        ("a > 1", ComparisonOp::Gt),
        ("a >= 1", ComparisonOp::Gte),
        ("a < 1", ComparisonOp::Lt),
        ("a <= 1", ComparisonOp::Lte),
        ("a ~ 1", ComparisonOp::Like),
        ("a !~ 1", ComparisonOp::Nlike),
        ("a ?= 1", ComparisonOp::Any),
        ("a ?!= 1", ComparisonOp::Nany),
        ("a ?> 1", ComparisonOp::Anygt),
        ("a ?>= 1", ComparisonOp::Anygte),
        ("a ?< 1", ComparisonOp::Anylt),
        ("a ?<= 1", ComparisonOp::Anylte),
        ("a ?~ 1", ComparisonOp::Anylike),
        ("a ?!~ 1", ComparisonOp::Nanylike),
    ];

    for (input, op) in cases {
        assert_eq!(parse_ok(input), comparison(op, "a", 1), "input: {input}");
    }
}

#[test]
fn negative_operators_match_negated_builders() {
    assert_eq!(parse_ok("a != 1"), not(eq("a", 1)));
    assert_eq!(parse_ok("a !~ 1"), not(like("a", 1)));
    assert_eq!(parse_ok("a ?!= 1"), not(any("a", 1)));
    assert_eq!(parse_ok("a ?!~ 1"), not(anylike("a", 1)));
}

#[test]
fn double_quoted_string_value() {
    assert_eq!(parse_ok(r#"a = "b""#), eq("a", "b"));
}

#[test]
fn double_quoted_string_decodes_escapes() {
    assert_eq!(parse_ok(r#"a = "say \"hi\"\n""#), eq("a", "say \"hi\"\n"));
}

#[test]
fn single_quoted_string_is_stripped_verbatim() {
    assert_eq!(parse_ok("a = 'b'"), eq("a", "b"));
    // No escape decoding between single quotes.
    assert_eq!(parse_ok(r"a = 'b\n'"), eq("a", r"b\n"));
}

#[test]
fn boolean_values() {
    assert_eq!(parse_ok("a = true"), eq("a", true));
    assert_eq!(parse_ok("a = false"), eq("a", false));
}

#[test]
fn number_values() {
    assert_eq!(parse_ok("a = 1"), eq("a", 1));
    assert_eq!(parse_ok("pi = 3.1415"), eq("pi", 3.1415));
    assert_eq!(parse_ok("a = -2"), eq("a", -2));
    assert_eq!(parse_ok("a = -0.5"), eq("a", -0.5));
}

#[test]
fn non_json_number_forms_fail_literal_decoding() {
    // The lexer matches these, literal decoding rejects them.
    for input in ["a = +1", "a = .5", "a = -.5", "a = +0.5"] {
        let err = parse_err(input);
        assert!(
            matches!(err, Error::InvalidLiteral { .. }),
            "input: {input}, got: {err}"
        );
    }
}

#[test]
fn null_value() {
    assert_eq!(parse_ok("a = null"), eq("a", FilterValue::Null));
}

#[test]
fn field_as_value_is_kept_as_string() {
    assert_eq!(parse_ok("a = b"), eq("a", "b"));
    assert_eq!(parse_ok("a = b.c:isset"), eq("a", "b.c:isset"));
}

#[test]
fn placeholder_resolves_against_params() {
    let mut params = Params::new();
    params.insert("title".to_string(), "example".into());
    let f = parse_filter_with("title ~ {:title}", &params).unwrap();
    assert_eq!(f, like("title", "example"));
}

#[test]
fn unresolved_placeholder_binds_null() {
    let f = parse_filter_with("a = {:missing}", &Params::new()).unwrap();
    assert_eq!(f, eq("a", FilterValue::Null));
}

#[test]
fn field_with_prefix_and_modifier() {
    assert_eq!(
        parse_ok("@request.data.role:isset = false"),
        eq("@request.data.role:isset", false)
    );
}

#[test]
fn logical_and() {
    assert_eq!(
        parse_ok("a = '1' && b >= 2"),
        and([eq("a", "1"), gte("b", 2)])
    );
}

#[test]
fn logical_or() {
    assert_eq!(
        parse_ok("a = 1 || b ~ 'hey'"),
        or([eq("a", 1), like("b", "hey")])
    );
}

#[test]
fn three_terms_chain_right_associatively() {
    // The parser nests to the right; the builder fold nests to the left.
    // Both shapes are intentional.
    assert_eq!(
        parse_ok("a = 1 || a = 2 || a > 3"),
        or([eq("a", 1), or([eq("a", 2), gt("a", 3)])])
    );
}

#[test]
fn parenthesized_left_side() {
    assert_eq!(
        parse_ok("(a = 1 || a = 2) && b ~ 'hey'"),
        and([par(or([eq("a", 1), eq("a", 2)])), like("b", "hey")])
    );
}

#[test]
fn parenthesized_right_side() {
    assert_eq!(
        parse_ok("a = 1 || (a = 2 && b ~ 'hey')"),
        or([eq("a", 1), par(and([eq("a", 2), like("b", "hey")]))])
    );
}

#[test]
fn both_sides_parenthesized() {
    assert_eq!(
        parse_ok("(a = 1 || a = 2) && (b ~ 'hey' && c != 1)"),
        and([
            par(or([eq("a", 1), eq("a", 2)])),
            par(and([like("b", "hey"), not(eq("c", 1))])),
        ])
    );
}

#[test]
fn bare_container() {
    assert_eq!(parse_ok("(a = 1)"), par(eq("a", 1)));
}

#[test]
fn empty_string_values() {
    assert_eq!(
        parse_ok(r#"(a ~ "" || b ~ "") || c ~ """#),
        or([par(or([like("a", ""), like("b", "")])), like("c", "")])
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_ok("  a = 1\t"), eq("a", 1));
}

#[test]
fn field_cannot_start_with_dot() {
    parse_err(". = 1");
    parse_err(".abc = 1");
    parse_err(". = .");
    parse_err("abc = .def");
}

#[test]
fn bare_at_sign_is_not_a_field() {
    parse_err("@ = 1");
    parse_err("abc = @");
}

#[test]
fn empty_input_fails() {
    let err = parse_err("");
    assert!(matches!(err, Error::UnexpectedToken { found, .. } if found.kind == TokenKind::Eof));
}

#[test]
fn missing_value_fails() {
    parse_err("a =");
    parse_err("a = &&");
}

#[test]
fn missing_operator_fails() {
    let err = parse_err("a 1");
    assert!(matches!(
        err,
        Error::UnexpectedToken { found, .. } if found.kind == TokenKind::Number
    ));
}

#[test]
fn unbalanced_parentheses_fail() {
    parse_err("(a = 1");
    parse_err("a = 1)");
    let err = parse_err(")a = 1(");
    assert!(matches!(err, Error::UnexpectedSymbol { expected: "(", .. }));
}

#[test]
fn trailing_tokens_fail() {
    let err = parse_err("a = 1 b = 2");
    assert!(matches!(
        err,
        Error::UnexpectedToken { expected, .. }
            if expected == vec![TokenKind::LogicalOp, TokenKind::Eof]
    ));
}

#[test]
fn dangling_logical_operator_fails() {
    parse_err("a = 1 &&");
    parse_err("&& a = 1");
}

#[test]
fn unlexable_input_is_a_lex_error() {
    assert!(matches!(parse_err("a = #"), Error::Lex { .. }));
    assert!(matches!(parse_err("a = 1 ; b = 2"), Error::Lex { .. }));
}

#[test]
fn unterminated_string_fails() {
    parse_err(r#"a = "unterminated"#);
    parse_err("a = 'unterminated");
}

#[test]
fn incomplete_placeholder_fails() {
    parse_err("a = {:name");
    parse_err("a = {:}");
}
