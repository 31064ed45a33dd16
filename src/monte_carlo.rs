use crate::board::{GameOutcome, GridBoard, Player, Square};
use crate::error::PlannerError;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use log::{debug, log_enabled, trace, Level};

/// Number of playouts run per move when no other value is configured.
pub const DEFAULT_TRIALS: u32 = 500;
/// Weight for squares held by the player the search is run for.
pub const DEFAULT_SCORE_CURRENT: f64 = 1.0;
/// Weight for squares held by the opponent.
pub const DEFAULT_SCORE_OTHER: f64 = 1.0;

/// Per-square accumulator with the same shape as the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    dim: usize,
    scores: Vec<f64>,
}

impl ScoreGrid {
    /// Creates a `dim`×`dim` grid of zeros.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            scores: vec![0.0; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.scores[row * self.dim + col]
    }

    pub fn add(&mut self, row: usize, col: usize, delta: f64) {
        self.scores[row * self.dim + col] += delta;
    }
}

/// A player that picks moves by flat Monte Carlo simulation.
///
/// For every decision it plays a number of uniformly random games from the current
/// position, credits the squares held by the winner of each game, debits the squares
/// held by the loser, and finally picks the empty square with the best total.
pub struct MonteCarloPlayer<K: RandomGenerator> {
    trials: u32,
    score_current: f64,
    score_other: f64,
    random: K,
}

impl<K: RandomGenerator> Default for MonteCarloPlayer<K> {
    fn default() -> Self {
        MonteCarloPlayerBuilder::new().build()
    }
}

/// A builder for creating instances of `MonteCarloPlayer`.
pub struct MonteCarloPlayerBuilder<K: RandomGenerator> {
    trials: u32,
    score_current: f64,
    score_other: f64,
    random_generator: K,
}

impl<K: RandomGenerator> Default for MonteCarloPlayerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> MonteCarloPlayerBuilder<K> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            score_current: DEFAULT_SCORE_CURRENT,
            score_other: DEFAULT_SCORE_OTHER,
            random_generator: K::default(),
        }
    }

    /// Sets the number of playouts per move. Zero playouts means a uniform pick among empty squares.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the weight applied to the searching player's squares.
    pub fn with_score_current(mut self, score: f64) -> Self {
        self.score_current = score;
        self
    }

    /// Sets the weight applied to the opponent's squares.
    pub fn with_score_other(mut self, score: f64) -> Self {
        self.score_other = score;
        self
    }

    /// Sets the random number generator used for playouts and tie-breaking.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Builds the `MonteCarloPlayer` with the configured parameters.
    pub fn build(self) -> MonteCarloPlayer<K> {
        MonteCarloPlayer::new(
            self.trials,
            self.score_current,
            self.score_other,
            self.random_generator,
        )
    }
}

impl<K: RandomGenerator> MonteCarloPlayer<K> {
    /// Returns a new builder for `MonteCarloPlayer`.
    pub fn builder() -> MonteCarloPlayerBuilder<K> {
        MonteCarloPlayerBuilder::new()
    }

    /// Creates a new player. Prefer `MonteCarloPlayer::builder()`.
    pub fn new(trials: u32, score_current: f64, score_other: f64, rg: K) -> Self {
        Self {
            trials,
            score_current,
            score_other,
            random: rg,
        }
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Picks a square for `player` on `board`.
    ///
    /// Fails with `PlannerError::NoLegalMoves` when the board has no empty square.
    pub fn select_move<B: GridBoard>(
        &mut self,
        board: &B,
        player: Player,
    ) -> Result<(usize, usize), PlannerError> {
        if board.empty_squares().is_empty() {
            return Err(PlannerError::NoLegalMoves);
        }

        let mut scores = ScoreGrid::new(board.dim());
        for trial in 0..self.trials {
            let mut playout = board.clone();
            let outcome = self.play_out(&mut playout, player);
            trace!("trial {} finished with {:?}", trial, outcome);
            self.update_scores(&mut scores, &playout, player);
        }

        let (row, col) = self.best_move(board, &scores)?;
        debug!(
            "{:?} plays ({}, {}) with score {:.1} after {} trials",
            player,
            row,
            col,
            scores.get(row, col),
            self.trials
        );
        Ok((row, col))
    }

    /// Plays uniformly random moves on `board`, starting with `player`, until the game is over.
    ///
    /// The board is left in its final state. Returns the outcome, which is `None` only if the
    /// board ran out of empty squares without reporting a result.
    pub fn play_out<B: GridBoard>(
        &mut self,
        board: &mut B,
        mut player: Player,
    ) -> Option<GameOutcome> {
        while board.check_win().is_none() {
            let empty = board.empty_squares();
            let Some(&(row, col)) = self.random.choose(&empty) else {
                break;
            };
            board.perform_move(row, col, player);
            if board.check_win().is_none() {
                player = player.switch();
            }
        }
        board.check_win()
    }

    /// Adds the result of a finished game on `board` to `scores`, seen from `player`'s side.
    ///
    /// Draws and unfinished boards leave the grid untouched.
    pub fn update_scores<B: GridBoard>(&self, scores: &mut ScoreGrid, board: &B, player: Player) {
        let (mine, theirs) = match board.check_win().and_then(GameOutcome::winner) {
            Some(winner) if winner == player => (self.score_current, -self.score_other),
            Some(_) => (-self.score_current, self.score_other),
            None => return,
        };

        for row in 0..board.dim() {
            for col in 0..board.dim() {
                match board.square(row, col) {
                    Square::Taken(owner) if owner == player => scores.add(row, col, mine),
                    Square::Taken(_) => scores.add(row, col, theirs),
                    Square::Empty => {}
                }
            }
        }
    }

    /// Returns one of the empty squares of `board` with the highest score, chosen uniformly
    /// among ties. Occupied squares are never returned, whatever their score.
    pub fn best_move<B: GridBoard>(
        &mut self,
        board: &B,
        scores: &ScoreGrid,
    ) -> Result<(usize, usize), PlannerError> {
        let empty = board.empty_squares();
        let max = empty
            .iter()
            .map(|&(row, col)| scores.get(row, col))
            .fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<(usize, usize)> = empty
            .into_iter()
            .filter(|&(row, col)| scores.get(row, col) == max)
            .collect();

        if log_enabled!(Level::Trace) {
            trace!("best score {:.1} shared by {:?}", max, best);
        }

        self.random
            .choose(&best)
            .copied()
            .ok_or(PlannerError::NoLegalMoves)
    }
}

impl MonteCarloPlayer<StandardRandomGenerator> {
    /// Creates a player with the thread-local generator and default weights.
    pub fn with_trials(trials: u32) -> Self {
        MonteCarloPlayerBuilder::new().with_trials(trials).build()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{GameOutcome, GridBoard, Player, Square};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::error::PlannerError;
    use crate::monte_carlo::{MonteCarloPlayer, ScoreGrid, DEFAULT_TRIALS};
    use crate::random::{SeededRandomGenerator, StandardRandomGenerator};

    fn seeded_player(trials: u32, seed: u64) -> MonteCarloPlayer<SeededRandomGenerator> {
        MonteCarloPlayer::builder()
            .with_trials(trials)
            .with_random_generator(SeededRandomGenerator::new(seed))
            .build()
    }

    #[test]
    fn builder_defaults() {
        let player = MonteCarloPlayer::<StandardRandomGenerator>::default();
        assert_eq!(player.trials(), DEFAULT_TRIALS);
        assert_eq!(MonteCarloPlayer::with_trials(7).trials(), 7);
    }

    #[test]
    fn play_out_reaches_terminal_state() {
        // arrange
        let mut player = seeded_player(1, 5);

        for _ in 0..50 {
            let mut board = TicTacToeBoard::default();

            // act
            let outcome = player.play_out(&mut board, Player::X);

            // assert
            assert!(outcome.is_some());
            assert_eq!(board.check_win(), outcome);
            let count = |p: Player| {
                (0..3)
                    .flat_map(|r| (0..3).map(move |c| (r, c)))
                    .filter(|&(r, c)| board.square(r, c) == Square::Taken(p))
                    .count()
            };
            let (xs, os) = (count(Player::X), count(Player::O));
            assert!(xs == os || xs == os + 1);
        }
    }

    #[test]
    fn update_scores_credits_winner() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["XXX", "OO ", "   "], false);
        let player = seeded_player(1, 1);
        let mut scores = ScoreGrid::new(3);

        // act
        player.update_scores(&mut scores, &board, Player::X);

        // assert
        assert_eq!(scores.get(0, 0), 1.0);
        assert_eq!(scores.get(0, 2), 1.0);
        assert_eq!(scores.get(1, 0), -1.0);
        assert_eq!(scores.get(1, 1), -1.0);
        assert_eq!(scores.get(1, 2), 0.0);
        assert_eq!(scores.get(2, 2), 0.0);
    }

    #[test]
    fn update_scores_inverts_when_opponent_wins() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["XXX", "OO ", "   "], false);
        let player = MonteCarloPlayer::builder()
            .with_score_current(2.0)
            .with_score_other(0.5)
            .with_random_generator(SeededRandomGenerator::default())
            .build();
        let mut scores = ScoreGrid::new(3);

        // act
        player.update_scores(&mut scores, &board, Player::O);

        // assert
        assert_eq!(scores.get(1, 0), -2.0);
        assert_eq!(scores.get(0, 1), 0.5);
    }

    #[test]
    fn update_scores_ignores_draw() {
        let board = TicTacToeBoard::from_rows(&["XOX", "XOO", "OXX"], false);
        assert_eq!(board.check_win(), Some(GameOutcome::Draw));
        let player = seeded_player(1, 1);
        let mut scores = ScoreGrid::new(3);

        player.update_scores(&mut scores, &board, Player::X);

        assert_eq!(scores, ScoreGrid::new(3));
    }

    #[test]
    fn best_move_skips_occupied_squares() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["X  ", "   ", "   "], false);
        let mut scores = ScoreGrid::new(3);
        scores.add(0, 0, 10.0);
        scores.add(2, 1, 3.0);
        let mut player = seeded_player(0, 3);

        // act
        let best = player.best_move(&board, &scores);

        // assert
        assert_eq!(best, Ok((2, 1)));
    }

    #[test]
    fn best_move_handles_negative_maximum() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["XO", "  "], false);
        let mut scores = ScoreGrid::new(2);
        scores.add(1, 0, -3.0);
        scores.add(1, 1, -1.0);
        let mut player = seeded_player(0, 3);

        // act
        let best = player.best_move(&board, &scores);

        // assert
        assert_eq!(best, Ok((1, 1)));
    }

    #[test]
    fn best_move_breaks_ties_randomly() {
        let board = TicTacToeBoard::default();
        let scores = ScoreGrid::new(3);
        let mut player = seeded_player(0, 11);
        let mut seen = ScoreGrid::new(3);

        for _ in 0..500 {
            let (row, col) = player.best_move(&board, &scores).unwrap();
            seen.add(row, col, 1.0);
        }

        for row in 0..3 {
            for col in 0..3 {
                assert!(seen.get(row, col) > 0.0);
            }
        }
    }

    #[test]
    fn full_board_has_no_move() {
        let board = TicTacToeBoard::from_rows(&["XOX", "XOO", "OXX"], false);
        let mut player = seeded_player(10, 1);
        assert_eq!(
            player.best_move(&board, &ScoreGrid::new(3)),
            Err(PlannerError::NoLegalMoves)
        );
        assert_eq!(
            player.select_move(&board, Player::X),
            Err(PlannerError::NoLegalMoves)
        );
    }

    #[test]
    fn selected_move_is_always_empty() {
        let board = TicTacToeBoard::from_rows(&["X  ", " O ", "  X"], false);
        let mut player = seeded_player(20, 9);
        for _ in 0..20 {
            let (row, col) = player.select_move(&board, Player::O).unwrap();
            assert!(board.square(row, col).is_empty());
        }
    }

    #[test]
    fn finds_winning_move() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["XX ", "OO ", "   "], false);
        let mut player = seeded_player(300, 42);
        let runs = 100;

        // act
        let hits = (0..runs)
            .filter(|_| player.select_move(&board, Player::X) == Ok((0, 2)))
            .count();

        // assert
        assert!(hits >= 90, "winning move chosen {} of {} times", hits, runs);
    }

    #[test]
    fn blocks_opponent_line() {
        // arrange
        let board = TicTacToeBoard::from_rows(&["X O", " X ", "O  "], false);
        let mut player = seeded_player(300, 7);
        let runs = 100;

        // act
        let hits = (0..runs)
            .filter(|_| player.select_move(&board, Player::O) == Ok((2, 2)))
            .count();

        // assert
        assert!(hits >= 90, "blocking move chosen {} of {} times", hits, runs);
    }
}
