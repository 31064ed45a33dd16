extern crate mc_planner;

use mc_planner::board::{GameOutcome, GridBoard, Player};
use mc_planner::boards::tic_tac_toe::TicTacToeBoard;
use mc_planner::monte_carlo::{MonteCarloPlayer, DEFAULT_TRIALS};
use mc_planner::random::{RandomGenerator, StandardRandomGenerator};

fn main() {
    // Two Monte Carlo players play one game against each other
    let mut board = TicTacToeBoard::default();
    let mut machine = MonteCarloPlayer::builder()
        .with_trials(DEFAULT_TRIALS)
        .with_random_generator(StandardRandomGenerator)
        .build();

    let outcome = play_game(&mut board, &mut machine);

    println!("{}", board);
    match outcome {
        GameOutcome::Win(player) => println!("{:?} wins!", player),
        GameOutcome::Draw => println!("Tie!"),
    }
}

/// Lets `machine` play both sides, X first, until the game is over.
fn play_game<K: RandomGenerator>(
    board: &mut TicTacToeBoard,
    machine: &mut MonteCarloPlayer<K>,
) -> GameOutcome {
    let mut player = Player::X;
    loop {
        if let Some(outcome) = board.check_win() {
            return outcome;
        }
        let Ok((row, col)) = machine.select_move(&*board, player) else {
            return GameOutcome::Draw;
        };
        board.perform_move(row, col, player);
        player = player.switch();
    }
}
