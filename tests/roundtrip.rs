mod common;

use common::*;
use filter_syntax::*;

#[test]
fn explicitly_grouped_trees_round_trip() {
    let filters = [
        eq("a", 1),
        like("title", ""),
        eq("flag", false),
        eq("ref", FilterValue::Null),
        gt("score", -2),
        lte("pi", 3.1415),
        and([par(or([eq("status", "open"), eq("status", "stale")])), not(like("title", "wip"))]),
        or([eq("a", 1), par(and([eq("b", 2), gt("c", 3)]))]),
        par(eq("a", 1)),
    ];

    for filter in filters {
        let text = render(&filter);
        assert_eq!(parse_ok(&text), filter, "text: {text}");
    }
}

#[test]
fn fold_generated_trees_round_trip() {
    // The fold's own grouping is explicit in the tree, so its output parses
    // back to the identical shape.
    let filters = [
        and([eq("a", 1), eq("b", 2), eq("c", 3)]),
        or([eq("a", 1), eq("b", 2), eq("c", 3), eq("d", 4)]),
        either(ComparisonOp::Eq, "name", ["Bob", "John", "James"]),
    ];

    for filter in filters {
        let text = render(&filter);
        assert_eq!(parse_ok(&text), filter, "text: {text}");
    }
}

#[test]
fn canonical_text_re_renders_identically() {
    let inputs = [
        "a = 1",
        r#"a = "b""#,
        "a != null",
        "a ?>= 2.5",
        r#"(a = 1 || a = 2) && b ~ "hey""#,
        "a = 1 && (b = 2 || c = 3)",
        "(a = 1)",
        "@request.data.role:isset = false",
    ];

    for input in inputs {
        assert_eq!(render(&parse_ok(input)), input, "input: {input}");
    }
}

#[test]
fn bare_logical_chains_normalize_on_re_render() {
    // Right-associative parse plus unconditional grouping on output.
    let f = parse_ok("a = 1 || b = 2 || c = 3");
    assert_eq!(render(&f), "a = 1 || (b = 2 || c = 3)");
}

#[test]
fn timestamps_come_back_as_strings() {
    let f = eq("created", ts("2022-08-01T10:00:00Z"));
    let text = render(&f);
    assert_eq!(parse_ok(&text), eq("created", "2022-08-01 10:00:00.000Z"));
}
