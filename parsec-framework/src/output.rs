/// The result of a successful parse step.
///
/// The engine itself only produces `Nil`, `Char`, `Str` and `Seq`; grammars
/// built on top wrap those in tagged `Node`s of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Output {
    /// Nothing worth keeping (skipped trivia, comments).
    #[default]
    Nil,
    /// A single code point.
    Char(char),
    /// A string or assembled token.
    Str(String),
    /// Ordered results of a sequence or repetition.
    Seq(Vec<Output>),
    /// A grammar-specific tagged node.
    Node {
        tag: &'static str,
        inner: Box<Output>,
    },
}

impl Output {
    /// Wraps `inner` in a node tagged `tag`.
    pub fn node(tag: &'static str, inner: Output) -> Self {
        Output::Node {
            tag,
            inner: Box::new(inner),
        }
    }

    pub fn str(text: impl Into<String>) -> Self {
        Output::Str(text.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Output::Nil)
    }

    /// Returns the children if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Output]> {
        match self {
            Output::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the tag if this is a node.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Output::Node { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Turns a sequence into its children; any other value becomes a
    /// one-element list (`Nil` becomes an empty one).
    pub fn into_items(self) -> Vec<Output> {
        match self {
            Output::Seq(items) => items,
            Output::Nil => Vec::new(),
            other => vec![other],
        }
    }

    /// Concatenates every code point and string in this value, depth first.
    pub fn text(&self) -> String {
        let mut buf = String::new();
        self.push_text(&mut buf);
        buf
    }

    fn push_text(&self, buf: &mut String) {
        match self {
            Output::Nil => {}
            Output::Char(ch) => buf.push(*ch),
            Output::Str(s) => buf.push_str(s),
            Output::Seq(items) => items.iter().for_each(|item| item.push_text(buf)),
            Output::Node { inner, .. } => inner.push_text(buf),
        }
    }
}

impl From<char> for Output {
    fn from(ch: char) -> Self {
        Output::Char(ch)
    }
}

impl From<&str> for Output {
    fn from(s: &str) -> Self {
        Output::Str(s.to_string())
    }
}

impl From<String> for Output {
    fn from(s: String) -> Self {
        Output::Str(s)
    }
}

impl From<Vec<Output>> for Output {
    fn from(items: Vec<Output>) -> Self {
        Output::Seq(items)
    }
}
