//! # Negamax Connect Four
//!
//! Connect Four played by a depth-limited negamax search with alpha-beta
//! pruning. The engine explores the live board in place, applying and undoing
//! moves, and scores non-terminal leaves with a window-based heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Board under gravity, win/draw detection, game record
//! - [`ai`]: Heuristic, move ordering, negamax search, agents
//! - [`arena`]: Headless matches between agents
//! - [`ui`]: Terminal UI for human vs engine
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
