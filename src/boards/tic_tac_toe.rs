use crate::board::{GameOutcome, GridBoard, Player, Square};
use std::fmt;

/// An implementation of `GridBoard` for Tic-Tac-Toe on an N×N grid.
///
/// A line is a full row, a full column or one of the two diagonals. In the
/// reverse variant the player who completes a line loses instead of winning.
#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeBoard {
    dim: usize,
    reverse: bool,
    cells: Vec<Square>,
}

impl TicTacToeBoard {
    /// Creates an empty board of side `dim`.
    pub fn new(dim: usize, reverse: bool) -> Self {
        Self {
            dim,
            reverse,
            cells: vec![Square::Empty; dim * dim],
        }
    }

    /// Builds a board from rows of `'X'`, `'O'` and anything else for an empty cell.
    ///
    /// The side length is taken from the number of rows; short rows are padded with empty cells.
    pub fn from_rows(rows: &[&str], reverse: bool) -> Self {
        let mut board = TicTacToeBoard::new(rows.len(), reverse);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(board.dim).enumerate() {
                match ch {
                    'X' => board.perform_move(row, col, Player::X),
                    'O' => board.perform_move(row, col, Player::O),
                    _ => {}
                }
            }
        }
        board
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dim + col
    }

    fn line_owner(&self, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
        let (row, col) = cells.next()?;
        let first = match self.square(row, col) {
            Square::Taken(player) => player,
            Square::Empty => return None,
        };
        cells
            .all(|(r, c)| self.square(r, c) == Square::Taken(first))
            .then_some(first)
    }

    fn completed_line(&self) -> Option<Player> {
        let n = self.dim;
        for i in 0..n {
            if let Some(player) = self.line_owner((0..n).map(|col| (i, col))) {
                return Some(player);
            }
            if let Some(player) = self.line_owner((0..n).map(|row| (row, i))) {
                return Some(player);
            }
        }
        self.line_owner((0..n).map(|i| (i, i)))
            .or_else(|| self.line_owner((0..n).map(|i| (i, n - 1 - i))))
    }
}

impl Default for TicTacToeBoard {
    /// Creates the classic 3×3 board.
    fn default() -> Self {
        TicTacToeBoard::new(3, false)
    }
}

impl GridBoard for TicTacToeBoard {
    fn dim(&self) -> usize {
        self.dim
    }

    fn square(&self, row: usize, col: usize) -> Square {
        self.cells[self.index(row, col)]
    }

    fn empty_squares(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| (i / self.dim, i % self.dim))
            .collect()
    }

    fn perform_move(&mut self, row: usize, col: usize, player: Player) {
        let index = self.index(row, col);
        if self.cells[index].is_empty() {
            self.cells[index] = Square::Taken(player);
        }
    }

    fn check_win(&self) -> Option<GameOutcome> {
        if let Some(player) = self.completed_line() {
            let winner = if self.reverse { player.switch() } else { player };
            return Some(GameOutcome::Win(winner));
        }

        if self.cells.iter().any(|cell| cell.is_empty()) {
            None
        } else {
            Some(GameOutcome::Draw)
        }
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let ch = match self.square(row, col) {
                    Square::Empty => ' ',
                    Square::Taken(Player::X) => 'X',
                    Square::Taken(Player::O) => 'O',
                };
                write!(f, "{}", ch)?;
                if col + 1 < self.dim {
                    write!(f, " | ")?;
                }
            }
            writeln!(f)?;
            if row + 1 < self.dim {
                writeln!(f, "{}", "-".repeat(self.dim * 4 - 3))?;
            }
        }
        Ok(())
    }
}
