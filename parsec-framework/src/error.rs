use crate::output::Output;
use parsec_common::Position;
use std::collections::BTreeSet;

/// Why a top-level parse did not produce a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The top-level parser did not match.
    #[error("no match at {position}{}", describe_expected(.expected))]
    Unmatched {
        position: Position,
        expected: BTreeSet<String>,
    },
    /// The parser matched but left input behind.
    #[error("incomplete parse at {position}: {rest:?} remains")]
    Incomplete {
        position: Position,
        rest: String,
        partial: Output,
    },
    /// The step budget of the vessel ran out.
    #[error("step limit exhausted at {position}")]
    FuelExhausted { position: Position },
}

impl ParseError {
    /// Where the parse stopped.
    pub fn position(&self) -> &Position {
        match self {
            ParseError::Unmatched { position, .. }
            | ParseError::Incomplete { position, .. }
            | ParseError::FuelExhausted { position } => position,
        }
    }
}

/// Mistakes made while wiring a grammar together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("deferred parser is already defined")]
    AlreadyDefined,
}

fn describe_expected(expected: &BTreeSet<String>) -> String {
    if expected.is_empty() {
        return String::new();
    }
    let items: Vec<&str> = expected.iter().map(String::as_str).collect();
    format!(", expected {}", items.join(" or "))
}
