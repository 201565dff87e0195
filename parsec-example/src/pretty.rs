//! Indented rendering of parse trees.

use parsec_framework::Output;

const INDENT: &str = "    ";

/// Renders `out` as indented text.
///
/// Sequences put one item per line, nodes print as `tag(inner)`, and
/// characters and strings use Rust escape syntax, so the result is the
/// same for equal trees.
pub fn pretty(out: &Output) -> String {
    let mut buf = String::new();
    write_value(&mut buf, out, 0);
    buf
}

fn write_value(buf: &mut String, out: &Output, depth: usize) {
    match out {
        Output::Nil => buf.push_str("nil"),
        Output::Char(c) => buf.push_str(&format!("{c:?}")),
        Output::Str(s) => buf.push_str(&format!("{s:?}")),
        Output::Seq(items) if items.is_empty() => buf.push_str("[]"),
        Output::Seq(items) => {
            buf.push_str("[\n");
            for item in items {
                buf.push_str(&INDENT.repeat(depth + 1));
                write_value(buf, item, depth + 1);
                buf.push_str(",\n");
            }
            buf.push_str(&INDENT.repeat(depth));
            buf.push(']');
        }
        Output::Node { tag, inner } => {
            buf.push_str(tag);
            buf.push('(');
            write_value(buf, inner, depth);
            buf.push(')');
        }
    }
}
