use parsec_common::Position;
use std::collections::BTreeSet;
use std::fmt;

/// The furthest point a parse reached before a primitive gave up, and what
/// would have been accepted there.
///
/// Failures are recorded alongside the boolean results and never change
/// whether a combinator succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub position: Position,
    pub expected: BTreeSet<String>,
}

impl Failure {
    pub fn new(position: Position, what: impl Into<String>) -> Self {
        let mut expected = BTreeSet::new();
        expected.insert(what.into());
        Self { position, expected }
    }

    /// Folds a new expectation into this record.
    ///
    /// A later offset replaces what was recorded, the same offset adds to
    /// it, an earlier offset is ignored.
    pub fn merge(&mut self, position: &Position, what: &str) {
        if position.offset > self.position.offset {
            *self = Failure::new(position.clone(), what);
        } else if position.offset == self.position.offset {
            self.expected.insert(what.to_string());
        }
    }

    /// Replaces whatever was expected at `offset` with `what`.
    pub fn relabel(&mut self, offset: usize, what: &str) {
        if self.position.offset == offset {
            self.expected.clear();
            self.expected.insert(what.to_string());
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected ", self.position)?;
        let mut first = true;
        for what in &self.expected {
            if !first {
                f.write_str(" or ")?;
            }
            f.write_str(what)?;
            first = false;
        }
        Ok(())
    }
}
