//! A toy reader for regular-expression syntax.
//!
//! Reads literal characters, backslash escapes, the `\w \s \d` classes,
//! parenthesised groups and the `?` and `*` suffixes. Capitalised words
//! (under [`spec`]) are read as whole identifiers, and `--` and `{- -}`
//! comments are skipped.

use parsec_framework::{
    all, any, attempt, between, collect, identifier, lazy, many, multi_line_comment,
    one_line_comment, satisfy, skip, string, Output, Parser, Spec,
};

/// The input the `regex-reader` binary parses when given none.
pub const SAMPLE: &str = "a 日本語 \\[\\]\\({- test -} ( b)?ccc*-- comment
l*{- foo {- {- test -} -}-}Bar FooFizz
Buzz\\a\\n\\t\\f";

const META: &str = "()[]?^*.+$|";
const SPECIAL: &str = "abfnrtv\\wsd";

pub fn is_meta(c: char) -> bool {
    META.contains(c)
}

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(c)
}

/// Nested `{- -}` and `--` comments, identifiers `[A-Z][a-z]*`, `Foo`
/// reserved.
pub fn spec() -> Spec {
    Spec::haskell_style()
        .with_ident(satisfy(char::is_uppercase), satisfy(char::is_lowercase))
        .with_reserved_names(["Foo"])
}

/// A literal character node.
pub fn char_node(c: char) -> Output {
    Output::node("char", Output::Char(c))
}

/// What the escape `\c` stands for.
///
/// Escaped meta characters that are not special read as `Nil`, which
/// [`regexp`] drops from its sequence.
pub fn escape(c: char) -> Output {
    match c {
        'a' => char_node('\u{7}'),
        'b' => char_node('\u{8}'),
        'f' => char_node('\u{c}'),
        'n' => char_node('\n'),
        'r' => char_node('\r'),
        't' => char_node('\t'),
        'v' => char_node('\u{b}'),
        'w' | 's' | 'd' => Output::node("class", Output::Char(c)),
        '\\' => char_node('\\'),
        _ => Output::Nil,
    }
}

/// One literal or escaped character.
///
/// A backslash followed by anything but a meta or special character fails
/// with the backslash consumed.
pub fn character() -> Parser {
    let plain = satisfy(|c| !is_meta(c));
    let escaped = satisfy(|c| is_meta(c) || is_special(c));
    Parser::new(move |v| {
        let Output::Char(c) = plain.parse(v)? else {
            return None;
        };
        if c != '\\' {
            return Some(char_node(c));
        }
        let Output::Char(e) = escaped.parse(v)? else {
            return None;
        };
        Some(escape(e))
    })
    .label("character")
}

/// `( body )` as a `group` node.
pub fn grouped(body: Parser) -> Parser {
    between(string("("), string(")"), body).map(|out| Output::node("group", out))
}

/// `item*` as a `star` node.
pub fn star(item: Parser) -> Parser {
    suffixed(item, "*", "star")
}

/// `item?` as an `optional` node.
pub fn question(item: Parser) -> Parser {
    suffixed(item, "?", "optional")
}

fn suffixed(item: Parser, suffix: &str, tag: &'static str) -> Parser {
    collect(vec![item, string(suffix)]).map(move |out| {
        let first = out.into_items().into_iter().next().unwrap_or_default();
        Output::node(tag, first)
    })
}

/// The whole expression grammar: a sequence of identifiers, suffixed
/// items, comments, characters and groups.
pub fn regexp() -> Parser {
    let group = grouped(lazy(regexp));
    let item = any(vec![character(), group.clone()]);
    many(any(vec![
        identifier(),
        attempt(star(item.clone())),
        attempt(question(item)),
        skip(all(vec![one_line_comment(), string("\n")])),
        multi_line_comment(),
        attempt(character()),
        group,
    ]))
}
