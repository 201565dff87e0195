//! A parser-combinator toolkit over code-point streams.
//!
//! Grammars are built bottom-up from [`Parser`] values and run against a
//! [`Vessel`], the cursor that owns the input, the current [`Position`], the
//! lexical [`Spec`] and an opaque user state. [`attempt`] is the only
//! combinator that rolls the vessel back on failure.

pub mod combinators;
pub mod diagnostic;
pub mod driver;
pub mod error;
pub mod lexical;
pub mod output;
pub mod parser;
pub mod primitive;
pub mod spec;
pub mod string_vessel;
pub mod vessel;

pub use combinators::{
    all, any, attempt, between, collect, hidden, lexeme, many, many1, not_followed_by, optional,
    sep_by, skip,
};
pub use diagnostic::Failure;
pub use driver::{parse_str, run};
pub use error::{GrammarError, ParseError};
pub use lexical::{
    angles, braces, brackets, comma_sep, ident, identifier, in_comment, multi_line_comment,
    one_line_comment, operator, parens, reserved, reserved_op, semi_sep, symbol, whitespace,
};
pub use output::Output;
pub use parser::{lazy, Deferred, Parser};
pub use parsec_common::{Checkpoint, Position};
pub use primitive::{eof, none_of, one_of, satisfy, string, token};
pub use spec::Spec;
pub use string_vessel::StringVessel;
pub use vessel::Vessel;
