use std::fmt;
use std::sync::Arc;

/// A location in the input of a parse.
///
/// `offset` counts code points from the start of the input and is the only
/// field the cursor relies on. `line` and `column` are kept up to date for
/// reporting but carry no meaning for the combinators themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Name of the input (usually a file name); may be empty.
    pub name: Arc<str>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Code-point offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of an unnamed input.
    pub fn new() -> Self {
        Self::named("")
    }

    /// Creates a position at the start of the input called `name`.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates an unnamed position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            name: Arc::from(""),
            line,
            column,
            offset,
        }
    }

    /// Moves the position over `ch`.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }

    /// Returns the same position with the start of the input reset.
    pub fn rewound(&self) -> Self {
        Self::named(Arc::clone(&self.name))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.name, self.line, self.column)
        }
    }
}
