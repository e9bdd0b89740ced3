use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, NegamaxAgent};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Side};

/// Human against the negamax engine in the terminal.
pub struct App {
    game_state: GameState,
    human: Side,
    engine: NegamaxAgent,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game_state = GameState::initial();
        let selected_column = game_state.board().dimensions().center();
        App {
            game_state,
            human: config.game.human_side,
            engine: NegamaxAgent::with_options(config.search.depth, config.search.options()),
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_engine_turn() {
                self.engine_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn is_engine_turn(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() != self.human
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let cols = self.game_state.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Columns are shown 1-based.
                match c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    Some(col) if col < cols => {
                        self.selected_column = col;
                        self.human_move();
                    }
                    _ => {
                        self.message = Some(format!("Columns are numbered 1 to {cols}"));
                    }
                }
            }
            KeyCode::Char('u') => {
                self.take_back();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = self.game_state.board().dimensions().center();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn human_move(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.play(self.selected_column) {
            Ok(_) => {
                self.message = Some(
                    self.outcome_message()
                        .unwrap_or_else(|| "Engine is thinking...".to_string()),
                );
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Let the engine search the live board and commit its choice.
    fn engine_move(&mut self) {
        let side = self.game_state.current_player();
        let column = self.engine.select_column(self.game_state.board_mut(), side);

        match self.game_state.play(column) {
            Ok(_) => {
                let detail = self
                    .engine
                    .last_search()
                    .map(|s| format!(" ({} nodes in {:.1?})", s.stats.nodes, s.elapsed))
                    .unwrap_or_default();
                info!("engine ({}) played column {}{detail}", side.name(), column + 1);
                self.message = Some(
                    self.outcome_message()
                        .unwrap_or_else(|| format!("Engine played column {}{detail}", column + 1)),
                );
            }
            Err(err) => {
                self.message = Some(format!("Engine move rejected: {err}"));
            }
        }
    }

    /// Undo back to the human's previous turn.
    fn take_back(&mut self) {
        let mut undone = 0;
        while let Some(played) = self.game_state.undo() {
            undone += 1;
            if played.side == self.human {
                break;
            }
        }
        self.message = Some(if undone == 0 {
            "Nothing to take back.".to_string()
        } else {
            format!("Took back {undone} move(s).")
        });
    }

    fn outcome_message(&self) -> Option<String> {
        self.game_state.outcome().map(|outcome| match outcome {
            GameOutcome::Winner(side) if side == self.human => "You win!".to_string(),
            GameOutcome::Winner(side) => format!("{} (engine) wins!", side.name()),
            GameOutcome::Draw => "It's a draw!".to_string(),
        })
    }

    fn mode_line(&self) -> String {
        format!(
            "You: {}  |  Engine: {} depth {}",
            self.human.name(),
            self.engine.name(),
            self.engine.depth()
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_line(),
        );
    }
}
