use crate::Position;

/// A checkpoint for saving and restoring a parse.
///
/// Bundles the cursor position with the user state so that backtracking
/// undoes both together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint<S> {
    position: Position,
    state: S,
}

impl<S> Checkpoint<S> {
    /// Creates a new checkpoint with the given position and state.
    pub fn new(position: Position, state: S) -> Self {
        Self { position, state }
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the state stored in this checkpoint.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Code-point offset of the saved position.
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Splits the checkpoint back into its parts.
    pub fn into_parts(self) -> (Position, S) {
        (self.position, self.state)
    }
}
