use super::terminal::{has_four_in_a_row, GameOutcome};
use super::{Board, Side};
use crate::error::MoveError;

/// A committed move: the column played and the row it landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub column: usize,
    pub row: usize,
    pub side: Side,
}

/// The live game: board, side to move, outcome and move history.
///
/// This is the driver's record of a game. The engine is handed the live
/// board through [`GameState::board_mut`] and searches it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Side,
    outcome: Option<GameOutcome>,
    history: Vec<PlayedMove>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Side::Red, // Red starts
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the live board for the search engine. Anything the
    /// caller applies must be undone before the borrow ends.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Moves committed so far, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Commit a move for the side to move and pass the turn.
    pub fn play(&mut self, column: usize) -> Result<PlayedMove, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let side = self.current_player;
        let row = self.board.apply_move(column, side)?;
        let played = PlayedMove { column, row, side };
        self.history.push(played);

        if has_four_in_a_row(&self.board, side) {
            self.outcome = Some(GameOutcome::Winner(side));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = side.other();
        Ok(played)
    }

    /// Take back the most recent move. Returns `None` at the start of the game.
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let last = self.history.pop()?;
        self.board.undo_move(last.column, last.row);
        self.current_player = last.side;
        // The position before any committed move was still in play.
        self.outcome = None;
        Some(last)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
