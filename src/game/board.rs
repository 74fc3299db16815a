use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-colored cells in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Row/column steps scanned for a win run, in scan order: horizontal,
/// vertical, diagonal down-right, diagonal down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// An immutable 6x7 grid snapshot. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup with signed coordinates.
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Return a copy of this board with one cell replaced.
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[row][col] = cell;
        next
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// The row a piece dropped into `col` would come to rest on.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Scan the whole board for a run of four and return its owner.
    ///
    /// Axes are scanned horizontal, vertical, diagonal down-right, then
    /// diagonal down-left; within an axis cells are visited top to bottom,
    /// left to right. The first complete run found wins.
    pub fn winner(&self) -> Option<Player> {
        AXES.iter().find_map(|&(d_row, d_col)| {
            (0..ROWS)
                .flat_map(|row| (0..COLS).map(move |col| (row, col)))
                .find_map(|(row, col)| self.run_from(row, col, d_row, d_col))
        })
    }

    /// Owner of a run of four starting at (row, col) along one axis.
    fn run_from(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Player> {
        let head = self.cells[row][col];
        let player = head.player()?;
        let complete = (1..WIN_LENGTH as isize).all(|step| {
            let r = row as isize + d_row * step;
            let c = col as isize + d_col * step;
            self.cell_at(r, c) == Some(head)
        });
        complete.then_some(player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// One line per row, top to bottom: `R` red, `Y` yellow, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Stack a piece on top of whatever is already in `col`.
    fn stack(board: Board, col: usize, cell: Cell) -> Board {
        let row = board.landing_row(col).expect("column has room");
        board.with_cell(row, col, cell)
    }

    /// Every color that owns at least one run of four, found by brute force
    /// in all eight directions.
    fn runs_by_brute_force(board: &Board) -> Vec<Player> {
        let mut found = Vec::new();
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                for d_row in -1..=1isize {
                    for d_col in -1..=1isize {
                        if d_row == 0 && d_col == 0 {
                            continue;
                        }
                        let cells: Vec<Option<Cell>> = (0..4)
                            .map(|k| board.cell_at(row + d_row * k, col + d_col * k))
                            .collect();
                        if let Some(Some(first)) = cells.first().copied() {
                            if let Some(player) = first.player() {
                                if cells.iter().all(|c| *c == Some(first)) && !found.contains(&player) {
                                    found.push(player);
                                }
                            }
                        }
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_cell(2, 4, Cell::Yellow);
        assert_eq!(board.get(2, 4), Cell::Empty);
        assert_eq!(next.get(2, 4), Cell::Yellow);
    }

    #[test]
    fn test_landing_row() {
        let mut board = Board::new();
        assert_eq!(board.landing_row(3), Some(5));
        board = stack(board, 3, Cell::Red);
        assert_eq!(board.landing_row(3), Some(4));
        assert_eq!(board.landing_row(7), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board = stack(board, 0, Cell::Red);
        }
        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert!(board.is_column_full(COLS));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board = stack(board, col, Cell::Red);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board = stack(board, col, Cell::Red);
        }
        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board = stack(board, 3, Cell::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        // / pattern rising to the right
        let mut board = Board::new();
        board = stack(board, 0, Cell::Red);

        board = stack(board, 1, Cell::Yellow);
        board = stack(board, 1, Cell::Red);

        board = stack(board, 2, Cell::Yellow);
        board = stack(board, 2, Cell::Yellow);
        board = stack(board, 2, Cell::Red);

        board = stack(board, 3, Cell::Yellow);
        board = stack(board, 3, Cell::Yellow);
        board = stack(board, 3, Cell::Yellow);
        assert_eq!(board.winner(), None);
        board = stack(board, 3, Cell::Red);

        assert_eq!(board.winner(), Some(Player::Red));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // \ pattern touching the right edge
        let mut board = Board::new();
        board = stack(board, 6, Cell::Yellow);

        board = stack(board, 5, Cell::Red);
        board = stack(board, 5, Cell::Yellow);

        board = stack(board, 4, Cell::Red);
        board = stack(board, 4, Cell::Red);
        board = stack(board, 4, Cell::Yellow);

        board = stack(board, 3, Cell::Red);
        board = stack(board, 3, Cell::Red);
        board = stack(board, 3, Cell::Red);
        board = stack(board, 3, Cell::Yellow);

        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board = stack(board, col, Cell::Red);
        }
        board = stack(board, 3, Cell::Yellow);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_horizontal_run_found_before_vertical() {
        let mut board = Board::new();
        for row in 2..ROWS {
            board = board.with_cell(row, 0, Cell::Red);
        }
        for col in 1..5 {
            board = board.with_cell(5, col, Cell::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_down_right_run_found_before_down_left() {
        let mut board = Board::new();
        for step in 0..4 {
            board = board
                .with_cell(step, step, Cell::Red)
                .with_cell(2 + step, 6 - step, Cell::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Red));

        // Mirrored: the yellow run now lies on the down-right axis
        let mut board = Board::new();
        for step in 0..4 {
            board = board
                .with_cell(step, 6 - step, Cell::Red)
                .with_cell(2 + step, step, Cell::Yellow);
        }
        assert_eq!(board.winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        let board = Board::new()
            .with_cell(2, 5, Cell::Red)
            .with_cell(2, 6, Cell::Red)
            .with_cell(3, 0, Cell::Red)
            .with_cell(3, 1, Cell::Red);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_without_run() {
        // Cell color follows (col + 2*row) mod 4 over R R Y Y, which never
        // lines up four of a kind along any axis.
        let pattern = [Cell::Red, Cell::Red, Cell::Yellow, Cell::Yellow];
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                board = board.with_cell(row, col, pattern[(col + 2 * row) % 4]);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_matches_brute_force_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(0xC4);
        for _ in 0..2_000 {
            let mut board = Board::new();
            let pieces = rng.random_range(0..=ROWS * COLS);
            for i in 0..pieces {
                let col = rng.random_range(0..COLS);
                if board.is_column_full(col) {
                    continue;
                }
                let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board = stack(board, col, cell);
            }

            let expected = runs_by_brute_force(&board);
            match board.winner() {
                Some(player) => assert!(expected.contains(&player), "board:\n{board}"),
                None => assert!(expected.is_empty(), "board:\n{board}"),
            }
        }
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .with_cell(5, 0, Cell::Red)
            .with_cell(4, 0, Cell::Yellow);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ".......");
        assert_eq!(lines[4], "Y......");
        assert_eq!(lines[5], "R......");
    }
}
