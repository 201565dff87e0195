//! Configuration file example.
//! Builds a small `section name { key = value; }` language from the lexical
//! combinators and prints the tree it produces.

use parsec_framework::{
    any, between, braces, brackets, collect, comma_sep, identifier, lexeme, many, many1, none_of,
    parse_str, reserved, reserved_op, satisfy, string, symbol, whitespace, Output, Parser, Spec,
};

const SOURCE: &str = r#"
// server settings
section server {
    host = "localhost";
    port = 8080;
    /* kept for old clients */ tags = [primary, eu_west];
}

section logging {
    level = "debug";
}
"#;

fn quoted() -> Parser {
    let body = many(none_of("\"")).map(|out| Output::Str(out.text()));
    lexeme(between(string("\""), string("\""), body))
}

fn number() -> Parser {
    lexeme(many1(satisfy(|c| c.is_ascii_digit())))
        .map(|out| Output::node("number", Output::Str(out.text())))
}

fn value() -> Parser {
    any(vec![
        quoted().map(|out| Output::node("string", out)),
        number(),
        brackets(comma_sep(identifier())).map(|out| Output::node("list", out)),
    ])
}

fn entry() -> Parser {
    collect(vec![identifier(), reserved_op("="), value(), symbol(";")])
        .map(|out| match out.into_items().as_slice() {
            [key, _, value, _] => {
                Output::node("entry", Output::Seq(vec![key.clone(), value.clone()]))
            }
            _ => Output::Nil,
        })
}

fn section() -> Parser {
    collect(vec![reserved("section"), identifier(), braces(many(entry()))])
        .map(|out| match out.into_items().as_slice() {
            [_, name, entries] => {
                Output::node("section", Output::Seq(vec![name.clone(), entries.clone()]))
            }
            _ => Output::Nil,
        })
}

fn config() -> Parser {
    collect(vec![whitespace(), many(section())]).map(|out| {
        out.into_items()
            .into_iter()
            .find(|item| !item.is_nil())
            .unwrap_or_default()
    })
}

fn print(out: &Output, depth: usize) {
    let indent = "  ".repeat(depth);
    match out {
        Output::Node { tag, inner } => {
            println!("{indent}{tag}");
            print(inner, depth + 1);
        }
        Output::Seq(items) => items.iter().for_each(|item| print(item, depth)),
        Output::Nil => {}
        other => println!("{indent}{}", other.text()),
    }
}

fn main() {
    let spec = Spec::java_style().with_reserved_names(["section"]);
    match parse_str(&config(), spec, SOURCE) {
        Ok(tree) => print(&tree, 0),
        Err(err) => eprintln!("error: {err}"),
    }
}
