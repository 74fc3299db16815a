use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::debug;

use crate::animation::FallTimer;
use crate::config::AppConfig;
use crate::game::{GameState, COLS};

/// Poll interval while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct App {
    game_state: GameState,
    selected_column: usize,
    initial_column: usize,
    timer: FallTimer,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: config.ui.initial_column,
            initial_column: config.ui.initial_column,
            timer: FallTimer::new(config.animation.tick_interval(), Instant::now()),
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Show `message` until the next key press.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.game_state = self.timer.advance(&self.game_state, Instant::now());
        }
        Ok(())
    }

    /// Wait for input no longer than the next animation step.
    fn poll_timeout(&self) -> Duration {
        if self.game_state.is_piece_falling() {
            self.timer.time_until_next(Instant::now())
        } else {
            IDLE_POLL
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout())? {
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

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = self.game_state.reset();
                self.selected_column = self.initial_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece into the selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_game_over() {
            self.message = Some("Game over! Press 'r' to play again.".to_string());
            return;
        }

        let next = self.game_state.select_column(self.selected_column);
        if next == self.game_state {
            debug!(column = self.selected_column, "selection ignored");
            return;
        }
        self.timer.mark(Instant::now());
        self.game_state = next;
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
