use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Side};

use super::agent::Agent;

/// An agent that selects uniformly at random from open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for matches and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &mut Board, _side: Side) -> usize {
        let columns = board.open_columns();
        assert!(!columns.is_empty(), "no valid moves: board is full");
        columns[self.rng.random_range(0..columns.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
