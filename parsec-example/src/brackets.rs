//! Balanced bracket matching.
//!
//! Words may be wrapped in any nesting of `()`, `[]` and `{}`; each pair
//! becomes a node tagged with its bracket kind. `//` and `/* */` comments
//! are skipped between tokens.

use parsec_framework::{
    all, any, braces, brackets, lexeme, many, many1, none_of, not_followed_by, parens, string,
    whitespace, Deferred, GrammarError, Output, Parser, Spec,
};

const DELIMITERS: &str = "()[]{}";

/// Java-style comments, nothing reserved.
pub fn spec() -> Spec {
    Spec::java_style()
}

/// A run of anything but brackets and whitespace that stops before a
/// comment marker.
pub fn word() -> Parser {
    let letter = none_of(&format!("{DELIMITERS} \t\r\n"));
    let outside_comment: Parser = Parser::new(move |v| {
        let spec = v.spec();
        for marker in [&spec.comment_line, &spec.comment_start] {
            if !marker.is_empty() {
                not_followed_by(string(marker.as_str())).parse(v)?;
            }
        }
        letter.parse(v)
    });
    lexeme(many1(outside_comment)).map(|out| Output::Str(out.text()))
}

/// The bracket grammar: leading trivia, then any number of words and
/// bracketed groups.
pub fn grammar() -> Result<Parser, GrammarError> {
    let cell = Deferred::new();
    let inner = cell.parser();
    let body = many(any(vec![
        word(),
        parens(inner.clone()).map(|out| Output::node("parens", out)),
        brackets(inner.clone()).map(|out| Output::node("brackets", out)),
        braces(inner).map(|out| Output::node("braces", out)),
    ]));
    let body = cell.define(body)?;
    log::trace!("bracket grammar defined");
    Ok(all(vec![whitespace(), body]))
}

/// The deepest bracket nesting in a tree produced by [`grammar`].
pub fn max_depth(out: &Output) -> usize {
    match out {
        Output::Node { inner, .. } => 1 + max_depth(inner),
        Output::Seq(items) => items.iter().map(max_depth).max().unwrap_or(0),
        _ => 0,
    }
}
