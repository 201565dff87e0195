//! Control combinators.
//!
//! Only [`attempt`] (and [`between`], which is built on it) rolls the vessel
//! back on failure. Every other combinator leaves behind whatever its parts
//! consumed before the failure.

use crate::lexical::whitespace;
use crate::output::Output;
use crate::parser::Parser;

/// Runs `parser`; on failure restores the position and state it started
/// from.
pub fn attempt<S: Clone + 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| {
        let checkpoint = v.checkpoint();
        let out = parser.parse(v);
        if out.is_none() {
            log::trace!(
                "rolling back from offset {} to {}",
                v.offset(),
                checkpoint.offset()
            );
            v.restore(checkpoint);
        }
        out
    })
}

/// Ordered choice: the first alternative that matches wins.
///
/// Consumption by a failed alternative is visible to the next one unless
/// that alternative is wrapped in [`attempt`].
pub fn any<S: 'static>(parsers: Vec<Parser<S>>) -> Parser<S> {
    Parser::new(move |v| {
        for parser in &parsers {
            if let Some(out) = parser.parse(v) {
                return Some(out);
            }
        }
        None
    })
}

/// Runs every parser in order, stopping at the first failure, and returns
/// the output of the last one.
///
/// An empty list fails, as there is no last match to return.
pub fn all<S: 'static>(parsers: Vec<Parser<S>>) -> Parser<S> {
    Parser::new(move |v| {
        let mut last = None;
        for parser in &parsers {
            last = Some(parser.parse(v)?);
        }
        last
    })
}

/// Runs every parser in order and returns all their outputs as a sequence.
pub fn collect<S: 'static>(parsers: Vec<Parser<S>>) -> Parser<S> {
    Parser::new(move |v| {
        let mut matches = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            matches.push(parser.parse(v)?);
        }
        Some(Output::Seq(matches))
    })
}

/// Matches `open`, `body`, `close` as one unit and returns `body`'s output.
pub fn between<S: Clone + 'static>(
    open: Parser<S>,
    close: Parser<S>,
    body: Parser<S>,
) -> Parser<S> {
    attempt(Parser::new(move |v| {
        open.parse(v)?;
        let out = body.parse(v)?;
        close.parse(v)?;
        Some(out)
    }))
}

/// Matches `parser` zero or more times; never fails.
///
/// `Nil` outputs are dropped from the result. Every success of `parser` must
/// consume input, otherwise this loops until the vessel's step budget (if
/// any) runs out.
pub fn many<S: 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| {
        let mut matches = Vec::new();
        while v.tick() {
            match parser.parse(v) {
                Some(Output::Nil) => {}
                Some(out) => matches.push(out),
                None => break,
            }
        }
        Some(Output::Seq(matches))
    })
}

/// Matches `parser` one or more times.
pub fn many1<S: 'static>(parser: Parser<S>) -> Parser<S> {
    let rest = many(parser.clone());
    Parser::new(move |v| {
        let first = parser.parse(v)?;
        let mut matches = vec![first];
        matches.extend(rest.parse(v)?.into_items());
        Some(Output::Seq(matches))
    })
}

/// Matches `item` zero or more times, separated by `delim`; never fails.
///
/// A trailing delimiter is consumed and accepted.
pub fn sep_by<S: 'static>(delim: Parser<S>, item: Parser<S>) -> Parser<S> {
    Parser::new(move |v| {
        let mut matches = Vec::new();
        while v.tick() {
            match item.parse(v) {
                Some(out) => matches.push(out),
                None => break,
            }
            if delim.parse(v).is_none() {
                break;
            }
        }
        Some(Output::Seq(matches))
    })
}

/// Runs `parser` and throws its output away.
pub fn skip<S: 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| parser.parse(v).map(|_| Output::Nil))
}

/// Runs `parser`, then swallows any trailing whitespace and comments.
pub fn lexeme<S: Clone + 'static>(parser: Parser<S>) -> Parser<S> {
    let trivia = whitespace();
    Parser::new(move |v| {
        let out = parser.parse(v)?;
        trivia.parse(v);
        Some(out)
    })
}

/// Returns `parser`'s output, or `Nil` if it does not match. Not atomic.
pub fn optional<S: 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| Some(parser.parse(v).unwrap_or_default()))
}

/// Succeeds without consuming anything if `parser` does not match here.
pub fn not_followed_by<S: Clone + 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| {
        let checkpoint = v.checkpoint();
        let matched = parser.parse(v).is_some();
        v.restore(checkpoint);
        if matched {
            None
        } else {
            Some(Output::Nil)
        }
    })
}

/// Runs `parser` without letting it add to the vessel's failure record.
///
/// Used for trivia, whose expectations would only clutter diagnostics.
pub fn hidden<S: 'static>(parser: Parser<S>) -> Parser<S> {
    Parser::new(move |v| {
        let saved = v.failure();
        let out = parser.parse(v);
        v.set_failure(saved);
        out
    })
}
