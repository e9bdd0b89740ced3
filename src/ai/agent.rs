use crate::game::{Board, Side};

/// Universal interface for anything that picks moves.
pub trait Agent {
    /// Select a column for `side` on the live board.
    ///
    /// Implementations may explore the board in place but must leave it as
    /// they found it. Calling this on a board with no open column is a
    /// contract violation and panics.
    fn select_column(&mut self, board: &mut Board, side: Side) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
