use crate::parser::Parser;
use crate::primitive::{one_of, satisfy};
use std::collections::BTreeSet;

const OPERATOR_CHARS: &str = ":!#$%&*+./<=>?@\\^|-~";

/// Lexical configuration of a language.
///
/// Read by the lexical combinators on every use, so swapping the `Spec` of a
/// vessel between parses changes how comments, identifiers and operators
/// are recognised. An empty comment marker disables that kind of comment.
#[derive(Debug, Clone)]
pub struct Spec<S = ()> {
    pub comment_start: String,
    pub comment_end: String,
    pub comment_line: String,
    pub nested_comments: bool,
    /// Matches the first code point of an identifier.
    pub ident_start: Parser<S>,
    /// Matches every following code point of an identifier.
    pub ident_letter: Parser<S>,
    pub op_start: Parser<S>,
    pub op_letter: Parser<S>,
    pub reserved_names: BTreeSet<String>,
    pub reserved_op_names: BTreeSet<String>,
    pub case_sensitive: bool,
}

impl<S: 'static> Default for Spec<S> {
    /// No comments, identifiers `[letter_][alnum_']*`, the usual operator
    /// alphabet, nothing reserved, case-sensitive.
    fn default() -> Self {
        Spec {
            comment_start: String::new(),
            comment_end: String::new(),
            comment_line: String::new(),
            nested_comments: false,
            ident_start: satisfy(|c| c.is_alphabetic() || c == '_'),
            ident_letter: satisfy(|c| c.is_alphanumeric() || c == '_' || c == '\''),
            op_start: one_of(OPERATOR_CHARS),
            op_letter: one_of(OPERATOR_CHARS),
            reserved_names: BTreeSet::new(),
            reserved_op_names: BTreeSet::new(),
            case_sensitive: true,
        }
    }
}

impl<S: 'static> Spec<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{- -}` nested block comments and `--` line comments.
    pub fn haskell_style() -> Self {
        Self::default()
            .with_block_comments("{-", "-}")
            .with_line_comment("--")
            .with_nested_comments(true)
    }

    /// `/* */` flat block comments and `//` line comments.
    pub fn java_style() -> Self {
        Self::default()
            .with_block_comments("/*", "*/")
            .with_line_comment("//")
    }

    pub fn with_block_comments(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.comment_start = start.into();
        self.comment_end = end.into();
        self
    }

    pub fn with_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.comment_line = marker.into();
        self
    }

    pub fn with_nested_comments(mut self, nested: bool) -> Self {
        self.nested_comments = nested;
        self
    }

    pub fn with_ident(mut self, start: Parser<S>, letter: Parser<S>) -> Self {
        self.ident_start = start;
        self.ident_letter = letter;
        self
    }

    pub fn with_op(mut self, start: Parser<S>, letter: Parser<S>) -> Self {
        self.op_start = start;
        self.op_letter = letter;
        self
    }

    pub fn with_reserved_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reserved_op_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.reserved_op_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Returns true if `name` is a reserved word under this spec.
    pub fn is_reserved_name(&self, name: &str) -> bool {
        self.contains(&self.reserved_names, name)
    }

    /// Returns true if `name` is a reserved operator under this spec.
    pub fn is_reserved_op(&self, name: &str) -> bool {
        self.contains(&self.reserved_op_names, name)
    }

    /// Compares two names the way this spec compares reserved words.
    pub fn names_equal(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.to_lowercase() == b.to_lowercase()
        }
    }

    fn contains(&self, set: &BTreeSet<String>, name: &str) -> bool {
        if self.case_sensitive {
            set.contains(name)
        } else {
            set.iter().any(|entry| self.names_equal(entry, name))
        }
    }
}
