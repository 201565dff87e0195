use crate::error::GrammarError;
use crate::output::Output;
use crate::vessel::Vessel;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::Rc;

type ParseFn<S> = Rc<dyn Fn(&mut dyn Vessel<S>) -> Option<Output>>;

/// A parser: a function from a vessel to an optional [`Output`].
///
/// `None` means the parser did not match. Whatever it consumed before
/// failing stays consumed unless it runs under [`attempt`](crate::attempt).
/// Parsers hold no state of their own, so cloning one is cheap and the clone
/// can be run against any number of vessels.
pub struct Parser<S = ()> {
    run: ParseFn<S>,
}

impl<S> Clone for Parser<S> {
    fn clone(&self) -> Self {
        Parser {
            run: Rc::clone(&self.run),
        }
    }
}

impl<S> fmt::Debug for Parser<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser")
    }
}

impl<S: 'static> Parser<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Vessel<S>) -> Option<Output> + 'static,
    {
        Parser { run: Rc::new(f) }
    }

    /// Runs the parser against `vessel`.
    pub fn parse(&self, vessel: &mut dyn Vessel<S>) -> Option<Output> {
        (self.run)(vessel)
    }

    /// Map: transform the result of a successful match.
    pub fn map<F>(self, f: F) -> Parser<S>
    where
        F: Fn(Output) -> Output + 'static,
    {
        Parser::new(move |v| self.parse(v).map(&f))
    }

    /// Names what this parser accepts for diagnostics.
    ///
    /// When the parser fails without consuming anything, the expectations
    /// recorded at its starting offset are replaced by `name`.
    pub fn label(self, name: impl Into<String>) -> Parser<S> {
        let name = name.into();
        Parser::new(move |v| {
            let start = v.offset();
            let out = self.parse(v);
            if out.is_none() && v.offset() == start {
                v.expect(&name);
                v.relabel(start, &name);
            }
            out
        })
    }
}

/// Builds the parser returned by `build` anew on every invocation.
///
/// Lets a rule refer to itself (or to a rule defined later) without a
/// [`Deferred`] cell, at the price of rebuilding on each use.
pub fn lazy<S, F>(build: F) -> Parser<S>
where
    S: 'static,
    F: Fn() -> Parser<S> + 'static,
{
    Parser::new(move |v| build().parse(v))
}

/// A forward-declared parser, resolved exactly once.
///
/// Hand out [`Deferred::parser`] while building a recursive grammar, then
/// close the loop with [`Deferred::define`]. A grammar that refers to itself
/// this way is a reference cycle and stays alive until the program ends.
pub struct Deferred<S = ()> {
    cell: Rc<OnceCell<Parser<S>>>,
}

impl<S> Clone for Deferred<S> {
    fn clone(&self) -> Self {
        Deferred {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<S> fmt::Debug for Deferred<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("defined", &self.cell.get().is_some())
            .finish()
    }
}

impl<S: 'static> Default for Deferred<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static> Deferred<S> {
    pub fn new() -> Self {
        Deferred {
            cell: Rc::new(OnceCell::new()),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns a parser that delegates to the eventual definition.
    ///
    /// Running it before [`Deferred::define`] fails the match.
    pub fn parser(&self) -> Parser<S> {
        let cell = Rc::clone(&self.cell);
        Parser::new(move |v| match cell.get() {
            Some(parser) => parser.parse(v),
            None => {
                log::error!("deferred parser invoked before it was defined");
                None
            }
        })
    }

    /// Resolves the cell to `parser` and returns the delegating handle.
    pub fn define(&self, parser: Parser<S>) -> Result<Parser<S>, GrammarError> {
        self.cell
            .set(parser)
            .map_err(|_| GrammarError::AlreadyDefined)?;
        log::trace!("deferred parser defined");
        Ok(self.parser())
    }
}
