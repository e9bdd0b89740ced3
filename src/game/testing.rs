//! Position generators shared by the unit tests.

use rand::rngs::StdRng;
use rand::Rng;

use super::terminal;
use super::{Board, Dimensions, Side};

/// Play up to `max_moves` random moves from an empty board, stopping before
/// the game ends. Returns the board and the side to move.
pub(crate) fn random_position(rng: &mut StdRng, dims: Dimensions, max_moves: usize) -> (Board, Side) {
    let mut board = Board::with_dimensions(dims);
    let mut side = Side::Red;
    let moves = rng.random_range(0..=max_moves);
    for _ in 0..moves {
        let open = board.open_columns();
        if open.is_empty() {
            break;
        }
        let col = open[rng.random_range(0..open.len())];
        let row = board.apply_move(col, side).unwrap();
        if terminal::outcome(&board).is_some() {
            board.undo_move(col, row);
            break;
        }
        side = side.other();
    }
    (board, side)
}

/// Like [`random_position`], but keeps playing into finished games, so the
/// result may contain connections for either side.
pub(crate) fn random_filled(rng: &mut StdRng, dims: Dimensions, max_moves: usize) -> Board {
    let mut board = Board::with_dimensions(dims);
    let mut side = Side::Red;
    let moves = rng.random_range(0..=max_moves);
    for _ in 0..moves {
        let open = board.open_columns();
        if open.is_empty() {
            break;
        }
        let col = open[rng.random_range(0..open.len())];
        board.apply_move(col, side).unwrap();
        side = side.other();
    }
    board
}

/// The same position with every Red piece turned Yellow and vice versa.
pub(crate) fn swap_sides(board: &Board) -> Board {
    let mut swapped = Board::with_dimensions(board.dimensions());
    for col in 0..board.cols() {
        for row in (0..board.rows()).rev() {
            match board.get(row, col).side() {
                Some(side) => {
                    swapped.apply_move(col, side.other()).unwrap();
                }
                None => break,
            }
        }
    }
    swapped
}
