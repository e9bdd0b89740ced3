//! Headless matches between agents.

use log::{debug, info};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Side};

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub columns: Vec<usize>,
}

/// Play one game to the end. Red moves first.
///
/// Panics if an agent picks a column that cannot be played.
pub fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent) -> GameRecord {
    let mut state = GameState::initial();

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        let side = state.current_player();
        let column = match side {
            Side::Red => red.select_column(state.board_mut(), side),
            Side::Yellow => yellow.select_column(state.board_mut(), side),
        };
        let name = match side {
            Side::Red => red.name(),
            Side::Yellow => yellow.name(),
        };
        if let Err(err) = state.play(column) {
            panic!("{name} ({}) selected illegal column {column}: {err}", side.name());
        }
        debug!("{name} ({}) played column {column}", side.name());
    };

    GameRecord {
        outcome,
        columns: state.history().iter().map(|m| m.column).collect(),
    }
}

/// Win/draw/loss counts from the first agent's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn record(&mut self, outcome: GameOutcome, side: Side) {
        match outcome {
            GameOutcome::Winner(winner) if winner == side => self.wins += 1,
            GameOutcome::Winner(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Points per game, a draw counting half.
    pub fn score_rate(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / self.games() as f64
    }
}

/// Play `games` games, alternating colours; `first` takes Red in even games.
pub fn run_match(first: &mut dyn Agent, second: &mut dyn Agent, games: u32) -> Tally {
    let mut tally = Tally::default();

    for game in 0..games {
        let first_side = if game % 2 == 0 { Side::Red } else { Side::Yellow };
        let record = match first_side {
            Side::Red => play_game(first, second),
            Side::Yellow => play_game(second, first),
        };
        tally.record(record.outcome, first_side);
        info!(
            "game {}/{games}: {} as {} -> {:?} in {} moves",
            game + 1,
            first.name(),
            first_side.name(),
            record.outcome,
            record.columns.len()
        );
    }

    tally
}
