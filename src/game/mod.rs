//! Core Connect Four game logic: board under gravity with reversible moves,
//! window enumeration, terminal detection, and the driver's game record.

mod board;
mod player;
mod state;
pub mod terminal;
#[cfg(test)]
pub(crate) mod testing;
pub mod window;

pub use board::{Board, Cell, Dimensions, COLS, CONNECT, ROWS};
pub use player::Side;
pub use state::{GameState, PlayedMove};
pub use terminal::{has_four_in_a_row, is_draw, GameOutcome};
