use parsec_framework::{
    any, collect, eof, identifier, many, many1, parse_str, run, satisfy, skip, string, symbol,
    Output, ParseError, Parser, Spec, StringVessel, Vessel,
};

fn digits() -> Parser {
    many1(satisfy(|c| c.is_ascii_digit()).label("digit")).map(|out| Output::Str(out.text()))
}

#[test]
fn test_run_full_match() {
    let out = parse_str(&digits(), Spec::new(), "2024");
    assert_eq!(out, Ok(Output::str("2024")));
}

#[test]
fn test_run_unmatched_reports_expectations() {
    let err = parse_str(&digits(), Spec::new(), "x1").unwrap_err();
    match &err {
        ParseError::Unmatched { position, expected } => {
            assert_eq!(position.offset, 0);
            assert!(expected.contains("digit"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "no match at 1:1, expected digit");
}

#[test]
fn test_run_unmatched_reports_furthest_point() {
    let call: Parser = collect(vec![identifier(), symbol("("), identifier(), symbol(")")]);
    let err = parse_str(&call, Spec::new(), "f(\n  x y)").unwrap_err();
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 5);
    match err {
        ParseError::Unmatched { expected, .. } => assert!(expected.contains("\")\"")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_run_incomplete_keeps_partial_result() {
    let err = parse_str(&digits(), Spec::new(), "12ab").unwrap_err();
    assert_eq!(
        err,
        ParseError::Incomplete {
            position: parsec_framework::Position::at(1, 3, 2),
            rest: "ab".to_string(),
            partial: Output::str("12"),
        }
    );
    assert_eq!(err.to_string(), "incomplete parse at 1:3: \"ab\" remains");
}

#[test]
fn test_run_empty_input() {
    let grammar: Parser = skip(many(string("a")));
    assert_eq!(parse_str(&grammar, Spec::new(), ""), Ok(Output::Nil));
    assert!(parse_str(&eof::<()>(), Spec::new(), "").is_ok());
}

#[test]
fn test_run_zero_width_repetition_hits_fuel() {
    let forever = many(any(vec![string("a"), skip(eof())]));
    let mut v: StringVessel = StringVessel::new("aa").with_fuel(100);
    let err = run(&forever, &mut v).unwrap_err();
    assert!(matches!(err, ParseError::FuelExhausted { .. }));
    assert_eq!(err.position().offset, 2);
}

#[test]
fn test_fuel_is_refilled_for_new_input() {
    let forever = many(any(vec![string("a"), skip(eof())]));
    let mut v: StringVessel = StringVessel::new("aa").with_fuel(10);
    assert!(matches!(
        run(&forever, &mut v),
        Err(ParseError::FuelExhausted { .. })
    ));

    v.set_input("b");
    assert_eq!(v.remaining_fuel(), Some(10));
    v.pop(1);
    assert_eq!(run(&skip(eof()), &mut v), Ok(Output::Nil));

    v.reset();
    assert_eq!(run(&string("b"), &mut v), Ok(Output::str("b")));
}

#[test]
fn test_run_within_fuel_budget() {
    let grammar = many(string("a"));
    let mut v: StringVessel = StringVessel::new("aaa").with_fuel(10);
    assert!(run(&grammar, &mut v).is_ok());
    assert_eq!(v.remaining_fuel(), Some(6));
}

#[test]
fn test_run_uses_named_positions() {
    let mut v: StringVessel = StringVessel::new("?").with_name("input.txt");
    let err = run(&digits(), &mut v).unwrap_err();
    assert_eq!(err.to_string(), "no match at input.txt:1:1, expected digit");
}
