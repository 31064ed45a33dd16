extern crate mc_planner;

use mc_planner::PlannerError;
use mc_planner::dice::{strategy, HoldStrategy};

const NUM_DIE_SIDES: u8 = 6;

fn main() {
    let hand = [1, 1, 1, 5, 6];
    match best_hold(&hand) {
        Ok(best) => println!(
            "Best strategy for hand {:?} is to hold {:?} with expected score {}",
            hand, best.held_dice, best.expected_score
        ),
        Err(e) => eprintln!("cannot plan hand {:?}: {}", hand, e),
    }
}

fn best_hold(hand: &[u8]) -> Result<HoldStrategy, PlannerError> {
    strategy(hand, NUM_DIE_SIDES)
}
