use std::time::{Duration, Instant};

use log::debug;

use crate::game::{has_four_in_a_row, Board, Side};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};
use super::move_order::MoveOrder;
use super::score::{Score, DRAW_SCORE, INFINITY, LOSS_SCORE, WIN_SCORE};

/// Switches that change how the tree is walked but not what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Narrow the window and stop early once `alpha >= beta`.
    pub pruning: bool,
    pub order: MoveOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            pruning: true,
            order: MoveOrder::CenterOut,
        }
    }
}

/// Counters collected over one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Nodes where the remaining candidates were skipped.
    pub cutoffs: u64,
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best column for the side to move; `None` when the root is already
    /// decided, or when a raw [`Searcher::search`] is asked for depth zero.
    pub column: Option<usize>,
    /// Value of the root from the side to move's perspective.
    pub score: Score,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Depth-limited negamax with alpha-beta pruning.
///
/// The search runs on the caller's board: every move is applied before
/// recursing and undone right after, so the board is identical before and
/// after a search. Recursion depth is at most `min(depth, empty cells)`.
pub struct Searcher {
    options: SearchOptions,
    heuristic: Box<dyn Heuristic>,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Searcher {
            options,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(options: SearchOptions, heuristic: Box<dyn Heuristic>) -> Self {
        Searcher { options, heuristic }
    }

    /// Search `depth` plies ahead for `side` with a fully open window.
    pub fn search(&self, board: &mut Board, side: Side, depth: usize) -> SearchOutcome {
        let start = Instant::now();
        let order = self.options.order.sequence(board.cols());
        let mut stats = SearchStats::default();

        let (column, score) = self.negamax(board, side, depth, -INFINITY, INFINITY, &order, &mut stats);

        let elapsed = start.elapsed();
        debug!(
            "negamax {} depth {depth}: column {column:?} score {score} nodes {} cutoffs {} in {elapsed:?}",
            side.name(),
            stats.nodes,
            stats.cutoffs,
        );

        SearchOutcome {
            column,
            score,
            stats,
            elapsed,
        }
    }

    /// The column to play, or `None` if the position has no move to make.
    /// Always looks at least one ply ahead, so an open board yields a column.
    pub fn best_move(&self, board: &mut Board, side: Side, depth: usize) -> Option<usize> {
        self.search(board, side, depth.max(1)).column
    }

    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &self,
        board: &mut Board,
        side: Side,
        depth: usize,
        mut alpha: Score,
        beta: Score,
        order: &[usize],
        stats: &mut SearchStats,
    ) -> (Option<usize>, Score) {
        stats.nodes += 1;
        let opponent = side.other();

        if has_four_in_a_row(board, side) {
            return (None, WIN_SCORE);
        }
        if has_four_in_a_row(board, opponent) {
            return (None, LOSS_SCORE);
        }
        if board.is_full() {
            return (None, DRAW_SCORE);
        }
        if depth == 0 {
            return (None, self.heuristic.evaluate(board, side));
        }

        let mut best_column = None;
        let mut best = -INFINITY;

        for &column in order {
            // Full columns are skipped.
            let Ok(row) = board.apply_move(column, side) else {
                continue;
            };
            let (_, reply) = self.negamax(board, opponent, depth - 1, -beta, -alpha, order, stats);
            board.undo_move(column, row);

            let value = -reply;
            if value > best {
                best = value;
                best_column = Some(column);
            }

            if self.options.pruning {
                alpha = alpha.max(best);
                if alpha >= beta {
                    stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_column, best)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchOptions::default())
    }
}

/// Column `side` should play on `board`, searching `depth` plies with the
/// default options. `None` when the board is full or already decided.
pub fn best_move(board: &mut Board, side: Side, depth: usize) -> Option<usize> {
    Searcher::default().best_move(board, side, depth)
}

/// Negamax agent with alpha-beta pruning.
pub struct NegamaxAgent {
    depth: usize,
    searcher: Searcher,
    last_search: Option<SearchOutcome>,
}

impl NegamaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_options(depth, SearchOptions::default())
    }

    pub fn with_options(depth: usize, options: SearchOptions) -> Self {
        NegamaxAgent {
            depth,
            searcher: Searcher::new(options),
            last_search: None,
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        NegamaxAgent {
            depth,
            searcher: Searcher::with_heuristic(SearchOptions::default(), heuristic),
            last_search: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Outcome of the most recent search, for status display.
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.last_search.as_ref()
    }
}

impl Agent for NegamaxAgent {
    fn select_column(&mut self, board: &mut Board, side: Side) -> usize {
        assert!(
            !board.open_columns().is_empty(),
            "no valid moves: negamax asked to move on a full board"
        );
        let outcome = self.searcher.search(board, side, self.depth.max(1));
        self.last_search = Some(outcome);
        match outcome.column {
            Some(column) => column,
            None => panic!("no valid moves: negamax asked to move in a finished game"),
        }
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::testing::random_position;
    use crate::game::{terminal, Cell, Dimensions, GameOutcome, GameState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unpruned(order: MoveOrder) -> Searcher {
        Searcher::new(SearchOptions {
            pruning: false,
            order,
        })
    }

    // --- Scenarios ---

    #[test]
    fn takes_immediate_vertical_win() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "Y......",
            "Y......",
            "Y......",
        ])
        .unwrap();
        for depth in 1..=5 {
            let outcome = Searcher::default().search(&mut board, Side::Yellow, depth);
            assert_eq!(outcome.column, Some(0), "depth {depth}");
            assert_eq!(outcome.score, -LOSS_SCORE, "depth {depth}");
        }
    }

    #[test]
    fn blocks_forced_loss() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR....",
        ])
        .unwrap();
        for depth in 2..=5 {
            assert_eq!(best_move(&mut board, Side::Yellow, depth), Some(3), "depth {depth}");
        }
    }

    #[test]
    fn empty_board_opens_in_the_center() {
        let mut board = Board::new();
        for depth in 1..=6 {
            assert_eq!(best_move(&mut board, Side::Red, depth), Some(3), "depth {depth}");
        }
    }

    #[test]
    fn prefers_win_over_block() {
        // Red and Yellow both threaten column 3; Red to move takes the win.
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "YYY....",
            "RRR....",
        ])
        .unwrap();
        let outcome = Searcher::default().search(&mut board, Side::Red, 4);
        assert_eq!(outcome.column, Some(3));
        assert_eq!(outcome.score, -LOSS_SCORE);
    }

    #[test]
    fn decided_or_full_root_has_no_move() {
        let mut won = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRRR...",
        ])
        .unwrap();
        let outcome = Searcher::default().search(&mut won, Side::Yellow, 3);
        assert_eq!(outcome.column, None);
        assert_eq!(outcome.score, LOSS_SCORE);

        let outcome = Searcher::default().search(&mut won, Side::Red, 3);
        assert_eq!(outcome.score, WIN_SCORE);

        let mut full = Board::from_rows(&[
            "RYRYRYR",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ])
        .unwrap();
        assert!(terminal::is_draw(&full));
        let outcome = Searcher::default().search(&mut full, Side::Red, 4);
        assert_eq!(outcome.column, None);
        assert_eq!(outcome.score, DRAW_SCORE);
        assert_eq!(outcome.stats.nodes, 1);
    }

    #[test]
    fn depth_zero_returns_heuristic() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR....",
        ])
        .unwrap();
        let outcome = Searcher::default().search(&mut board, Side::Red, 0);
        assert_eq!(outcome.column, None);
        assert_eq!(outcome.score, 7);
    }

    #[test]
    fn best_move_searches_at_least_one_ply() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, Side::Red, 0), Some(3));

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let (mut board, side) = random_position(&mut rng, Dimensions::STANDARD, 30);
            let col = best_move(&mut board, side, 0).unwrap();
            assert!(board.is_column_open(col), "column {col} not open on\n{board}");
        }
    }

    #[test]
    fn last_open_column_is_found() {
        let mut board = Board::from_rows(&[
            "RYRYRY.",
            "RYRYRYR",
            "YRYRYRY",
            "YRYRYRY",
            "RYRYRYR",
            "RYRYRYR",
        ])
        .unwrap();
        assert_eq!(best_move(&mut board, Side::Yellow, 3), Some(6));
    }

    // --- Properties ---

    #[test]
    fn search_leaves_board_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (mut board, side) = random_position(&mut rng, Dimensions::STANDARD, 20);
            let before = board.clone();
            Searcher::default().search(&mut board, side, 4);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn pruning_does_not_change_the_result() {
        let mut rng = StdRng::seed_from_u64(42);
        let pruned = Searcher::default();
        let full = unpruned(MoveOrder::CenterOut);

        for _ in 0..40 {
            let (mut board, side) = random_position(&mut rng, Dimensions::STANDARD, 24);
            for depth in 1..=4 {
                let a = pruned.search(&mut board, side, depth);
                let b = full.search(&mut board, side, depth);
                assert_eq!(
                    (a.column, a.score),
                    (b.column, b.score),
                    "depth {depth} on\n{board}"
                );
                assert!(a.stats.nodes <= b.stats.nodes);
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let mut board = Board::new();
        let a = Searcher::default().search(&mut board, Side::Red, 5);
        let b = unpruned(MoveOrder::CenterOut).search(&mut board, Side::Red, 5);
        assert_eq!(b.stats.nodes, 1 + 7 + 49 + 343 + 2401 + 16807);
        assert_eq!(b.stats.cutoffs, 0);
        assert!(a.stats.cutoffs > 0);
        assert!(a.stats.nodes < b.stats.nodes);
    }

    #[test]
    fn ordering_does_not_change_the_value() {
        let mut rng = StdRng::seed_from_u64(1234);
        let center = unpruned(MoveOrder::CenterOut);
        let naive = unpruned(MoveOrder::LeftToRight);

        for _ in 0..30 {
            let (mut board, side) = random_position(&mut rng, Dimensions::STANDARD, 24);
            for depth in 1..=3 {
                let a = center.search(&mut board, side, depth);
                let b = naive.search(&mut board, side, depth);
                assert_eq!(a.score, b.score, "depth {depth} on\n{board}");

                // The reported column may differ only among tied columns.
                let tied: Vec<usize> = board
                    .open_columns()
                    .into_iter()
                    .filter(|&col| {
                        let row = board.apply_move(col, side).unwrap();
                        let reply = center.search(&mut board, side.other(), depth - 1).score;
                        board.undo_move(col, row);
                        -reply == a.score
                    })
                    .collect();
                assert!(tied.contains(&a.column.unwrap()));
                assert!(tied.contains(&b.column.unwrap()));
                if tied.len() == 1 {
                    assert_eq!(a.column, b.column);
                }
            }
        }
    }

    #[test]
    fn pruning_equivalence_on_small_board_at_depth() {
        // A 4 x 5 board with connect 3 lets the search reach real endings.
        let dims = Dimensions::new(4, 5, 3);
        let mut rng = StdRng::seed_from_u64(99);
        let pruned = Searcher::default();
        let full = unpruned(MoveOrder::LeftToRight);

        for _ in 0..25 {
            let (mut board, side) = random_position(&mut rng, dims, 10);
            let a = pruned.search(&mut board, side, 6);
            let b = full.search(&mut board, side, 6);
            assert_eq!(a.score, b.score, "on\n{board}");
        }
    }

    // --- Agent ---

    #[test]
    fn agent_selects_legal_column() {
        let mut agent = NegamaxAgent::new(4);
        let mut board = Board::new();
        let col = agent.select_column(&mut board, Side::Red);
        assert!(board.is_column_open(col));
        assert_eq!(board, Board::new());
        assert!(agent.last_search().is_some());
    }

    #[test]
    #[should_panic(expected = "no valid moves")]
    fn agent_panics_without_moves() {
        let mut board = Board::from_rows(&["RY", "YR"]).unwrap();
        NegamaxAgent::new(2).select_column(&mut board, Side::Red);
    }

    #[test]
    fn custom_heuristic_is_used_at_leaves() {
        struct PreferRightEdge;
        impl Heuristic for PreferRightEdge {
            fn evaluate(&self, board: &Board, side: Side) -> Score {
                let cols = board.cols();
                match board.get(board.rows() - 1, cols - 1) {
                    Cell::Empty => 0,
                    c if c == side.to_cell() => 10,
                    _ => -10,
                }
            }
        }

        let mut agent = NegamaxAgent::with_heuristic(1, Box::new(PreferRightEdge));
        let mut board = Board::new();
        assert_eq!(agent.select_column(&mut board, Side::Red), 6);
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut red = NegamaxAgent::new(3);
        let mut yellow = NegamaxAgent::new(4);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let side = state.current_player();
            let col = match side {
                Side::Red => red.select_column(state.board_mut(), side),
                Side::Yellow => yellow.select_column(state.board_mut(), side),
            };
            state.play(col).unwrap();
        }

        assert!(state.outcome().is_some());
        assert!(state.history().len() <= 42);
    }

    #[test]
    fn beats_random_agent() {
        let games_per_side = 10;
        let mut wins = 0;

        for game in 0..games_per_side * 2 {
            let negamax_side = if game % 2 == 0 { Side::Red } else { Side::Yellow };
            let mut negamax = NegamaxAgent::new(4);
            let mut random = RandomAgent::with_seed(game as u64);
            let mut state = GameState::initial();

            while !state.is_terminal() {
                let side = state.current_player();
                let col = if side == negamax_side {
                    negamax.select_column(state.board_mut(), side)
                } else {
                    random.select_column(state.board_mut(), side)
                };
                state.play(col).unwrap();
            }

            if state.outcome() == Some(GameOutcome::Winner(negamax_side)) {
                wins += 1;
            }
        }

        let total = games_per_side * 2;
        assert!(
            wins * 10 > total * 8,
            "Negamax should beat random >80% of the time, got {wins}/{total}"
        );
    }

    #[test]
    fn name_is_negamax() {
        let agent = NegamaxAgent::new(5);
        assert_eq!(agent.name(), "Negamax");
        assert_eq!(agent.depth(), 5);
    }
}
