//! Contains pre-made implementations of the `GridBoard` trait.

/// A `GridBoard` implementation for N×N Tic-Tac-Toe, including the reverse variant.
pub mod tic_tac_toe;
