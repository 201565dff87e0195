//! Single-step matchers.

use crate::output::Output;
use crate::parser::Parser;

/// Consumes one code point if `check` accepts it.
///
/// Fails without consuming anything otherwise.
pub fn satisfy<S, F>(check: F) -> Parser<S>
where
    S: 'static,
    F: Fn(char) -> bool + 'static,
{
    Parser::new(move |v| match v.next() {
        Some(ch) if check(ch) => {
            v.pop(1);
            Some(Output::Char(ch))
        }
        _ => {
            v.expect("matching character");
            None
        }
    })
}

/// Matches `literal` one code point at a time and returns it as a string.
///
/// Not atomic: on a partial match the matched prefix stays consumed. Wrap
/// in [`attempt`](crate::attempt) when that matters.
pub fn string<S: 'static>(literal: impl Into<String>) -> Parser<S> {
    let literal = literal.into();
    let expected = format!("{literal:?}");
    Parser::new(move |v| {
        for want in literal.chars() {
            match v.next() {
                Some(ch) if ch == want => v.pop(1),
                _ => {
                    v.expect(&expected);
                    return None;
                }
            }
        }
        Some(Output::Str(literal.clone()))
    })
}

/// Consumes and returns any one code point; fails only at end of input.
pub fn token<S: 'static>() -> Parser<S> {
    Parser::new(|v| match v.next() {
        Some(ch) => {
            v.pop(1);
            Some(Output::Char(ch))
        }
        None => {
            v.expect("any character");
            None
        }
    })
}

/// Consumes one code point that appears in `chars`.
pub fn one_of<S: 'static>(chars: &str) -> Parser<S> {
    let set: Vec<char> = chars.chars().collect();
    let expected = format!("one of {chars:?}");
    satisfy(move |c| set.contains(&c)).label(expected)
}

/// Consumes one code point that does not appear in `chars`.
pub fn none_of<S: 'static>(chars: &str) -> Parser<S> {
    let set: Vec<char> = chars.chars().collect();
    let expected = format!("none of {chars:?}");
    satisfy(move |c| !set.contains(&c)).label(expected)
}

/// Succeeds with `Nil`, consuming nothing, only at end of input.
pub fn eof<S: 'static>() -> Parser<S> {
    Parser::new(|v| {
        if v.is_eof() {
            Some(Output::Nil)
        } else {
            v.expect("end of input");
            None
        }
    })
}
