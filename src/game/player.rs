use std::fmt;

use super::board::Cell;
use super::state::BoardStatus;

/// One of the two piece colors. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The cell value a piece of this color occupies
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Terminal status reached when this player completes a run.
    pub fn winning_status(self) -> BoardStatus {
        match self {
            Player::Red => BoardStatus::RedWins,
            Player::Yellow => BoardStatus::YellowWins,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        })
    }
}
