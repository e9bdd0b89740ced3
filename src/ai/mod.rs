//! The search engine: score bands, heuristic evaluator, move ordering,
//! negamax with alpha-beta pruning, and the agents built on top of it.

mod agent;
pub mod heuristic;
pub mod move_order;
pub mod negamax;
mod random;
pub mod score;

pub use agent::Agent;
pub use heuristic::{score_position, Heuristic, WindowHeuristic};
pub use move_order::MoveOrder;
pub use negamax::{best_move, NegamaxAgent, SearchOptions, SearchOutcome, SearchStats, Searcher};
pub use random::RandomAgent;
pub use score::{Score, LOSS_SCORE, WIN_SCORE};
