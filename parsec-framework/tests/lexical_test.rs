use parsec_framework::{
    attempt, comma_sep, identifier, multi_line_comment, one_line_comment, operator, parens,
    reserved, reserved_op, satisfy, symbol, whitespace, Output, Spec, StringVessel, Vessel,
};

fn vessel(input: &str, spec: Spec) -> StringVessel {
    StringVessel::new(input).with_spec(spec)
}

#[test]
fn test_nested_block_comment() {
    let mut v = vessel("{- a {- b -} c -}TAIL", Spec::haskell_style());
    assert_eq!(multi_line_comment().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), "TAIL");
}

#[test]
fn test_flat_block_comment_ends_at_first_marker() {
    let spec = Spec::haskell_style().with_nested_comments(false);
    let mut v = vessel("{- a {- b -} c -}TAIL", spec);
    assert_eq!(multi_line_comment().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), " c -}TAIL");
}

#[test]
fn test_deeply_nested_comment() {
    let mut v = vessel("{- foo {- {- test -} -}-}Bar", Spec::haskell_style());
    assert_eq!(multi_line_comment().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), "Bar");
}

#[test]
fn test_marker_characters_inside_comment() {
    let mut v = vessel("{- a - b } { c -}x", Spec::haskell_style());
    assert_eq!(multi_line_comment().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), "x");
}

#[test]
fn test_unterminated_comment_fails() {
    let mut v = vessel("{- abc", Spec::haskell_style());
    assert_eq!(attempt(multi_line_comment()).parse(&mut v), None);
    assert_eq!(v.offset(), 0);

    let failure = v.failure().unwrap();
    assert_eq!(failure.position.offset, 6);
    assert!(failure.expected.contains("\"-}\""));
}

#[test]
fn test_line_comment_stops_before_newline() {
    let mut v = vessel("-- note\nx", Spec::haskell_style());
    assert_eq!(one_line_comment().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), "\nx");
}

#[test]
fn test_line_comment_at_end_of_input() {
    let mut v = vessel("// trailing", Spec::java_style());
    assert_eq!(one_line_comment().parse(&mut v), Some(Output::Nil));
    assert!(v.is_eof());
}

#[test]
fn test_empty_markers_disable_comments() {
    let mut v = vessel("{- x -}", Spec::new());
    assert_eq!(multi_line_comment().parse(&mut v), None);
    assert_eq!(one_line_comment().parse(&mut v), None);
    assert_eq!(v.offset(), 0);

    let spec = Spec::new().with_block_comments("{-", "");
    let mut v = vessel("{- x", spec);
    assert_eq!(multi_line_comment().parse(&mut v), None);
    assert_eq!(v.offset(), 0);
}

#[test]
fn test_whitespace_skips_comments_and_blanks() {
    let mut v = vessel("  -- one\n {- two {- three -} -}\t\nrest", Spec::haskell_style());
    assert_eq!(whitespace().parse(&mut v), Some(Output::Nil));
    assert_eq!(v.input(), "rest");
}

#[test]
fn test_whitespace_leaves_unknown_markers() {
    let mut v = vessel("  // x", Spec::haskell_style());
    whitespace().parse(&mut v);
    assert_eq!(v.input(), "// x");
}

#[test]
fn test_whitespace_leaves_unterminated_comment() {
    let mut v = vessel(" {- open", Spec::haskell_style());
    whitespace().parse(&mut v);
    assert_eq!(v.input(), "{- open");
}

#[test]
fn test_whitespace_does_not_touch_diagnostics() {
    let mut v = vessel("  x", Spec::haskell_style());
    whitespace().parse(&mut v);
    assert!(v.failure().is_none());
}

#[test]
fn test_symbol_skips_trailing_whitespace() {
    let mut v = vessel("(   x", Spec::new());
    assert_eq!(symbol("(").parse(&mut v), Some(Output::str("(")));
    assert_eq!(v.input(), "x");
}

#[test]
fn test_identifier() {
    let mut v = vessel("foo_bar1  baz", Spec::new());
    assert_eq!(identifier().parse(&mut v), Some(Output::str("foo_bar1")));
    assert_eq!(identifier().parse(&mut v), Some(Output::str("baz")));
    assert!(v.is_eof());
}

#[test]
fn test_identifier_rejects_reserved_names() {
    let spec = Spec::new().with_reserved_names(["Foo"]);

    let mut v = vessel("Foo bar", spec.clone());
    assert_eq!(identifier().parse(&mut v), None);
    assert_eq!(v.offset(), 0);
    let failure = v.failure().unwrap();
    assert_eq!(failure.position.offset, 0);
    assert_eq!(failure.expected.len(), 1);
    assert!(failure.expected.contains("identifier"));

    let mut v = vessel("Foobar", spec);
    assert_eq!(identifier().parse(&mut v), Some(Output::str("Foobar")));
}

#[test]
fn test_rejected_reserved_name_keeps_earlier_failure() {
    let spec = Spec::new().with_reserved_names(["Foo"]);
    let mut v = vessel("1 Foo bar", spec);
    v.pop(2);
    v.expect("digit");
    let before = v.failure();

    assert_eq!(identifier().parse(&mut v), None);
    assert_eq!(v.offset(), 2);
    let failure = v.failure().unwrap();
    assert_eq!(failure.position, before.unwrap().position);
    assert!(failure.expected.contains("identifier"));
    assert!(!failure.expected.contains("matching character"));
}

#[test]
fn test_identifier_reserved_case_insensitive() {
    let spec = Spec::new()
        .with_reserved_names(["Foo"])
        .with_case_sensitive(false);
    let mut v = vessel("FOO", spec);
    assert_eq!(identifier().parse(&mut v), None);
    assert_eq!(v.offset(), 0);
}

#[test]
fn test_identifier_with_custom_alphabet() {
    let spec = Spec::new().with_ident(
        satisfy(char::is_uppercase),
        satisfy(char::is_lowercase),
    );
    let mut v = vessel("FooFizz", spec);
    assert_eq!(identifier().parse(&mut v), Some(Output::str("Foo")));
    assert_eq!(identifier().parse(&mut v), Some(Output::str("Fizz")));
}

#[test]
fn test_reserved_keyword() {
    let mut v = vessel("let x", Spec::new());
    assert_eq!(reserved("let").parse(&mut v), Some(Output::str("let")));
    assert_eq!(v.input(), "x");
}

#[test]
fn test_reserved_keyword_needs_word_boundary() {
    let mut v = vessel("letter", Spec::new());
    assert_eq!(reserved("let").parse(&mut v), None);
    assert_eq!(v.offset(), 0);
}

#[test]
fn test_reserved_keyword_case_insensitive() {
    let mut v = vessel("LeT x", Spec::new().with_case_sensitive(false));
    assert_eq!(reserved("let").parse(&mut v), Some(Output::str("let")));

    let mut v = vessel("LeT x", Spec::new());
    assert_eq!(reserved("let").parse(&mut v), None);
}

#[test]
fn test_operator() {
    let mut v = vessel("+= 1", Spec::new());
    assert_eq!(operator().parse(&mut v), Some(Output::str("+=")));
    assert_eq!(v.input(), "1");
}

#[test]
fn test_operator_rejects_reserved_ops() {
    let spec = Spec::new().with_reserved_op_names(["="]);
    let mut v = vessel("= x", spec.clone());
    assert_eq!(operator().parse(&mut v), None);
    assert_eq!(v.offset(), 0);
    let failure = v.failure().unwrap();
    assert_eq!(failure.position.offset, 0);
    assert!(failure.expected.contains("operator"));
    assert_eq!(failure.expected.len(), 1);

    let mut v = vessel("== x", spec);
    assert_eq!(operator().parse(&mut v), Some(Output::str("==")));
}

#[test]
fn test_reserved_op() {
    let mut v = vessel("= x", Spec::new());
    assert_eq!(reserved_op("=").parse(&mut v), Some(Output::str("=")));
    assert_eq!(v.input(), "x");

    let mut v = vessel("== x", Spec::new());
    assert_eq!(reserved_op("=").parse(&mut v), None);
    assert_eq!(v.offset(), 0);
}

#[test]
fn test_parens_and_comma_sep() {
    let mut v = vessel("( a , b ,c ) rest", Spec::new());
    let out = parens(comma_sep(identifier())).parse(&mut v);
    assert_eq!(
        out,
        Some(Output::Seq(vec![
            Output::str("a"),
            Output::str("b"),
            Output::str("c"),
        ]))
    );
    assert_eq!(v.input(), "rest");
}

#[test]
fn test_parens_unclosed_restores() {
    let mut v = vessel("( a b", Spec::new());
    assert_eq!(parens(identifier()).parse(&mut v), None);
    assert_eq!(v.offset(), 0);
}

#[test]
fn test_spec_is_read_at_parse_time() {
    let comment = multi_line_comment();
    let mut v = vessel("/* c */{- h -}", Spec::java_style());
    assert_eq!(comment.parse(&mut v), Some(Output::Nil));
    v.set_spec(Spec::haskell_style());
    assert_eq!(comment.parse(&mut v), Some(Output::Nil));
    assert!(v.is_eof());
}
