use crate::diagnostic::Failure;
use crate::spec::Spec;
use parsec_common::{Checkpoint, Position};
use std::rc::Rc;

/// The cursor every parser runs against.
///
/// A vessel bundles the input, the current position, the lexical [`Spec`]
/// and an opaque user state `S`. Parsers only ever see a vessel through this
/// trait, so any input representation can be plugged in by implementing the
/// required accessors; the provided methods build checkpointing, diagnostics
/// and the step limit on top of them.
pub trait Vessel<S> {
    /// Returns the code point at the current offset without consuming it.
    fn next(&self) -> Option<char>;

    /// Returns the next `n` code points without consuming them, or `None` if
    /// fewer remain.
    fn get(&self, n: usize) -> Option<String>;

    /// Advances the offset by `n` code points.
    fn pop(&mut self, n: usize);

    /// Moves the offset back by `n` code points.
    fn push(&mut self, n: usize);

    /// Returns the current position.
    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    /// Returns a copy of the user state.
    fn state(&self) -> S;

    fn set_state(&mut self, state: S);

    /// Returns the lexical configuration in effect.
    fn spec(&self) -> Rc<Spec<S>>;

    fn set_spec(&mut self, spec: Spec<S>);

    /// Returns the input that has not been consumed yet.
    fn input(&self) -> &str;

    /// Replaces the whole input.
    fn set_input(&mut self, input: &str);

    /// Returns the current code-point offset.
    fn offset(&self) -> usize {
        self.position().offset
    }

    /// Returns true if at end of input.
    fn is_eof(&self) -> bool {
        self.next().is_none()
    }

    /// Creates a checkpoint of the current position and state.
    fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint::new(self.position(), self.state())
    }

    /// Restores the vessel to a checkpoint.
    fn restore(&mut self, checkpoint: Checkpoint<S>) {
        let (position, state) = checkpoint.into_parts();
        self.set_position(position);
        self.set_state(state);
    }

    /// Records that `what` would have been accepted at the current offset.
    fn expect(&mut self, what: &str) {
        let _ = what;
    }

    /// Replaces the expectations recorded at `offset` with `what`.
    fn relabel(&mut self, offset: usize, what: &str) {
        let _ = (offset, what);
    }

    /// Returns the furthest failure recorded so far.
    fn failure(&self) -> Option<Failure> {
        None
    }

    /// Overwrites the failure record, e.g. to undo what hidden trivia
    /// recorded.
    fn set_failure(&mut self, failure: Option<Failure>) {
        let _ = failure;
    }

    /// Spends one step of the repetition budget.
    ///
    /// Returns `false` once the budget is used up. Vessels without a budget
    /// always return `true`.
    fn tick(&mut self) -> bool {
        true
    }

    /// Returns true if a step budget ran out during this parse.
    fn fuel_exhausted(&self) -> bool {
        false
    }
}
