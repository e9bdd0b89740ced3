//! Terminal UI: a human plays Connect Four against the negamax engine.

mod app;
mod game_view;

pub use app::App;
