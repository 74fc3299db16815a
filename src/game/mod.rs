//! Core Connect Four game logic: board, players, and the piece-drop state
//! machine with immutable transitions.

mod action;
mod board;
mod player;
mod state;

pub use action::{reduce, GameAction};
pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{ActiveCell, BoardStatus, GameState};
