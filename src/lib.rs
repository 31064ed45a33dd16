//! Small planners for two turn-based games.
//!
//! - [`monte_carlo`] picks moves for a square grid game such as Tic-Tac-Toe by running
//!   random playouts and scoring the squares held by the winner and the loser.
//! - [`dice`] finds the dice to hold in a Yahtzee-style roll by computing the exact
//!   expected upper-section score of every possible hold.
//!
//! # Example
//!
//! ```rust
//! use mc_planner::board::{GridBoard, Player};
//! use mc_planner::boards::tic_tac_toe::TicTacToeBoard;
//! use mc_planner::dice::strategy;
//! use mc_planner::monte_carlo::MonteCarloPlayer;
//! use mc_planner::random::SeededRandomGenerator;
//!
//! // Pick a move for X on an empty board
//! let board = TicTacToeBoard::default();
//! let mut player = MonteCarloPlayer::builder()
//!     .with_trials(200)
//!     .with_random_generator(SeededRandomGenerator::new(7))
//!     .build();
//! let (row, col) = player.select_move(&board, Player::X).unwrap();
//! assert!(board.square(row, col).is_empty());
//!
//! // Pick the dice to keep from a hand of five six-sided dice
//! let best = strategy(&[1, 1, 1, 5, 6], 6).unwrap();
//! println!("hold {:?} for an expected {:.2}", best.held_dice, best.expected_score);
//! ```

/// Contains the `GridBoard` trait and the player, square and outcome types.
pub mod board;
/// Contains pre-made implementations of the `GridBoard` trait.
pub mod boards;
pub mod dice;
/// The crate's error type.
pub mod error;
/// Monte Carlo move selection for grid games.
pub mod monte_carlo;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::PlannerError;
