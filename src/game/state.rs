use tracing::{debug, info};

use super::{Board, Cell, Player, ROWS};

/// Where the game is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardStatus {
    Idle,
    PieceFalling,
    RedWins,
    YellowWins,
    Tie,
}

impl BoardStatus {
    /// Check if this status ends the game
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            BoardStatus::RedWins | BoardStatus::YellowWins | BoardStatus::Tie
        )
    }
}

/// Position of the piece currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveCell {
    pub row: usize,
    pub column: usize,
}

/// Immutable game snapshot. Every transition returns a new value and leaves
/// `self` untouched; rejected transitions return an equal copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    status: BoardStatus,
    active_player: Player,
    active_cell: Option<ActiveCell>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            status: BoardStatus::Idle,
            active_player: Player::Red, // Red starts
            active_cell: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// The color being placed or animated
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// The falling piece, only set while `status` is `PieceFalling`
    pub fn active_cell(&self) -> Option<ActiveCell> {
        self.active_cell
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn is_piece_falling(&self) -> bool {
        self.status == BoardStatus::PieceFalling
    }

    /// Whether `column` can still take a piece in this game. Stays true
    /// while another piece is falling; `select_column` ignores it then.
    pub fn can_select(&self, column: usize) -> bool {
        !self.is_game_over() && !self.board.is_column_full(column)
    }

    /// Place the active player's piece at the top of `column` and start it
    /// falling.
    ///
    /// Ignored unless the game is idle and the column's top cell is empty.
    pub fn select_column(&self, column: usize) -> GameState {
        if self.status != BoardStatus::Idle || self.board.is_column_full(column) {
            return *self;
        }

        debug!(player = %self.active_player, column, "piece dropped");
        GameState {
            board: self.board.with_cell(0, column, self.active_player.to_cell()),
            status: BoardStatus::PieceFalling,
            active_cell: Some(ActiveCell { row: 0, column }),
            ..*self
        }
    }

    /// Advance the falling piece by one row, or land it if the row below is
    /// occupied or it is already on the bottom row.
    ///
    /// Ignored unless a piece is falling.
    pub fn tick(&self) -> GameState {
        let active = match self.active_cell {
            Some(active) if self.status == BoardStatus::PieceFalling => active,
            _ => return *self,
        };

        let below = active.row + 1;
        if below >= ROWS || self.board.get(below, active.column) != Cell::Empty {
            return self.land(active);
        }

        GameState {
            board: self
                .board
                .with_cell(active.row, active.column, Cell::Empty)
                .with_cell(below, active.column, self.active_player.to_cell()),
            active_cell: Some(ActiveCell {
                row: below,
                ..active
            }),
            ..*self
        }
    }

    /// Settle the falling piece and score the resulting board.
    fn land(&self, active: ActiveCell) -> GameState {
        let winner = self.board.winner();
        let status = match winner {
            Some(player) => player.winning_status(),
            None if self.board.is_full() => BoardStatus::Tie,
            None => BoardStatus::Idle,
        };
        let active_player = match winner {
            Some(_) => self.active_player,
            None => self.active_player.other(),
        };

        debug!(row = active.row, column = active.column, "piece landed");
        if status.is_game_over() {
            info!(?status, "game over");
        }

        GameState {
            board: self.board,
            status,
            active_player,
            active_cell: None,
        }
    }

    /// Return the canonical initial state, whatever the current state is.
    pub fn reset(&self) -> GameState {
        info!(previous = ?self.status, "game reset");
        GameState::initial()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
