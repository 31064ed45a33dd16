/// The interface the Monte Carlo player needs from a square grid game.
///
/// Cells are addressed as `(row, col)` with both coordinates in `0..dim()`.
/// Implementations must be cheap to clone: the player clones the board once per playout.
pub trait GridBoard: Clone {
    /// Returns the side length of the square grid.
    fn dim(&self) -> usize;

    /// Returns the contents of a single cell.
    fn square(&self, row: usize, col: usize) -> Square;

    /// Returns the coordinates of every empty cell, in row-major order.
    fn empty_squares(&self) -> Vec<(usize, usize)>;

    /// Places `player`'s mark on the cell. Moves onto occupied cells are ignored.
    fn perform_move(&mut self, row: usize, col: usize, player: Player);

    /// Returns the result of the game, or `None` while it is still in progress.
    fn check_win(&self) -> Option<GameOutcome>;
}

/// One of the two players of a grid game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player.
    pub fn switch(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Square {
    Empty,
    Taken(Player),
}

impl Square {
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// The result of a finished game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The given player has won.
    Win(Player),
    /// The board is full and nobody has won.
    Draw,
}

impl GameOutcome {
    /// Returns the winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}
