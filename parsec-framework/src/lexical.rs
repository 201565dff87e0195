//! Whitespace, comments, identifiers and symbols.
//!
//! Everything here reads the [`Spec`](crate::Spec) of the vessel at the
//! moment it runs, so one grammar can be reused under different lexical
//! conventions.

use crate::combinators::{
    all, any, attempt, between, hidden, lexeme, many, many1, not_followed_by, sep_by, skip,
};
use crate::diagnostic::Failure;
use crate::output::Output;
use crate::parser::Parser;
use crate::primitive::{none_of, one_of, satisfy, string};
use crate::spec::Spec;
use crate::vessel::Vessel;
use parsec_common::Checkpoint;

/// Skips any mix of whitespace and comments; never fails.
///
/// Comments are tried atomically, so a marker that does not open a complete
/// comment is left for the caller.
pub fn whitespace<S: Clone + 'static>() -> Parser<S> {
    hidden(skip(many(any(vec![
        satisfy(char::is_whitespace),
        attempt(one_line_comment()),
        attempt(multi_line_comment()),
    ]))))
}

/// Skips a line comment up to, not including, the next newline.
///
/// Fails straight away when the vessel's `Spec` has no line comment marker.
pub fn one_line_comment<S: Clone + 'static>() -> Parser<S> {
    Parser::new(|v| {
        let spec = v.spec();
        if spec.comment_line.is_empty() {
            return None;
        }
        skip(all(vec![
            attempt(string(spec.comment_line.clone())),
            many(satisfy(|c| c != '\n')),
        ]))
        .parse(v)
    })
}

/// Skips a block comment, including nested ones when `nested_comments` is set.
///
/// Fails straight away when either block marker is empty.
pub fn multi_line_comment<S: Clone + 'static>() -> Parser<S> {
    Parser::new(|v| {
        let spec = v.spec();
        if spec.comment_start.is_empty() || spec.comment_end.is_empty() {
            return None;
        }
        attempt(string(spec.comment_start.clone())).parse(v)?;
        in_comment().parse(v)
    })
}

/// Scans the body of a block comment whose start marker was just consumed,
/// through the matching end marker.
///
/// Each step takes the end marker, a whole nested comment (nested mode
/// only), a run of code points outside both markers, or a single marker
/// code point that did not complete a marker.
pub fn in_comment<S: Clone + 'static>() -> Parser<S> {
    Parser::new(|v| {
        let spec = v.spec();
        let markers = format!("{}{}", spec.comment_start, spec.comment_end);
        let end = attempt(string(spec.comment_end.clone()));
        let nested = if spec.nested_comments {
            Some(multi_line_comment())
        } else {
            None
        };
        let run = many1(none_of(&markers));
        let marker = one_of(&markers);

        while v.tick() {
            if end.parse(v).is_some() {
                return Some(Output::Nil);
            }
            if let Some(nested) = &nested {
                if nested.parse(v).is_some() {
                    continue;
                }
            }
            if run.parse(v).is_none() && marker.parse(v).is_none() {
                break;
            }
        }
        v.expect(&format!("{:?}", spec.comment_end));
        None
    })
}

/// An `ident_start` followed by any number of `ident_letter`s, as one
/// string. Does not skip trailing whitespace or look at reserved names.
pub fn ident<S: 'static>() -> Parser<S> {
    Parser::new(|v| {
        let spec = v.spec();
        let first = spec.ident_start.parse(v)?;
        let rest = many(spec.ident_letter.clone()).parse(v)?;
        let mut name = first.text();
        name.push_str(&rest.text());
        Some(Output::Str(name))
    })
}

/// An identifier that is not a reserved name, plus trailing whitespace.
///
/// A reserved name fails as if nothing had been read.
pub fn identifier<S: Clone + 'static>() -> Parser<S> {
    let ident = ident();
    lexeme(attempt(Parser::new(move |v| {
        let start = v.checkpoint();
        let saved = v.failure();
        let name = ident.parse(v)?;
        if v.spec().is_reserved_name(&name.text()) {
            retract(v, start, saved);
            return None;
        }
        Some(name)
    })))
    .label("identifier")
}

/// The keyword `name`, not followed by an identifier letter, plus trailing
/// whitespace. Honours `case_sensitive`.
pub fn reserved<S: Clone + 'static>(name: impl Into<String>) -> Parser<S> {
    let name = name.into();
    let expected = format!("{name:?}");
    let keyword = Parser::new(move |v| {
        let spec = v.spec();
        for want in name.chars() {
            match v.next() {
                Some(ch) if chars_match(&spec, ch, want) => v.pop(1),
                _ => return None,
            }
        }
        not_followed_by(spec.ident_letter.clone()).parse(v)?;
        Some(Output::Str(name.clone()))
    });
    lexeme(attempt(keyword)).label(expected)
}

/// An operator that is not a reserved operator, plus trailing whitespace.
pub fn operator<S: Clone + 'static>() -> Parser<S> {
    let op = Parser::new(|v| {
        let start = v.checkpoint();
        let saved = v.failure();
        let spec = v.spec();
        let first = spec.op_start.parse(v)?;
        let rest = many(spec.op_letter.clone()).parse(v)?;
        let mut name = first.text();
        name.push_str(&rest.text());
        if spec.is_reserved_op(&name) {
            retract(v, start, saved);
            return None;
        }
        Some(Output::Str(name))
    });
    lexeme(attempt(op)).label("operator")
}

/// The operator `name`, not followed by an operator letter, plus trailing
/// whitespace.
pub fn reserved_op<S: Clone + 'static>(name: impl Into<String>) -> Parser<S> {
    let name = name.into();
    let expected = format!("{name:?}");
    let literal = string(name.clone());
    let op = Parser::new(move |v| {
        literal.parse(v)?;
        not_followed_by(v.spec().op_letter.clone()).parse(v)?;
        Some(Output::Str(name.clone()))
    });
    lexeme(attempt(op)).label(expected)
}

/// Matches `literal` exactly and skips trailing whitespace.
pub fn symbol<S: Clone + 'static>(literal: &str) -> Parser<S> {
    lexeme(string(literal))
}

/// `body` between `(` and `)`.
pub fn parens<S: Clone + 'static>(body: Parser<S>) -> Parser<S> {
    enclosed("(", ")", body)
}

/// `body` between `[` and `]`.
pub fn brackets<S: Clone + 'static>(body: Parser<S>) -> Parser<S> {
    enclosed("[", "]", body)
}

/// `body` between `{` and `}`.
pub fn braces<S: Clone + 'static>(body: Parser<S>) -> Parser<S> {
    enclosed("{", "}", body)
}

/// `body` between `<` and `>`.
pub fn angles<S: Clone + 'static>(body: Parser<S>) -> Parser<S> {
    enclosed("<", ">", body)
}

/// Zero or more `item`s separated by commas.
pub fn comma_sep<S: Clone + 'static>(item: Parser<S>) -> Parser<S> {
    sep_by(symbol(","), item)
}

/// Zero or more `item`s separated by semicolons.
pub fn semi_sep<S: Clone + 'static>(item: Parser<S>) -> Parser<S> {
    sep_by(symbol(";"), item)
}

fn enclosed<S: Clone + 'static>(open: &str, close: &str, body: Parser<S>) -> Parser<S> {
    lexeme(between(symbol(open), symbol(close), body))
}

/// Undoes a token that was read in full and then rejected, including
/// whatever reading it added to the failure record.
fn retract<S>(v: &mut dyn Vessel<S>, start: Checkpoint<S>, saved: Option<Failure>) {
    v.restore(start);
    v.set_failure(saved);
}

fn chars_match<S: 'static>(spec: &Spec<S>, got: char, want: char) -> bool {
    if spec.case_sensitive {
        got == want
    } else {
        got.to_lowercase().eq(want.to_lowercase())
    }
}
