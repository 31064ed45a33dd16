//! Hold planning for the upper section of a Yahtzee score card.
//!
//! A turn is simplified to one decision: which dice of the current hand to keep before
//! the rest are rerolled once. Every possible hold is evaluated exactly by enumerating
//! all outcomes of the free dice.

use crate::error::PlannerError;
use log::{debug, log_enabled, trace, Level};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The hold chosen by [`strategy`] together with its expected score.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldStrategy {
    pub expected_score: f64,
    pub held_dice: Vec<u8>,
}

/// Enumerates every sequence of `length` values drawn from `outcomes`.
///
/// Sequences are collected into a set, so repeated values in `outcomes` do not produce
/// duplicate members. A `length` of zero yields the single empty sequence.
pub fn gen_all_sequences<T: Clone + Eq + Hash>(outcomes: &[T], length: usize) -> HashSet<Vec<T>> {
    let mut answer: HashSet<Vec<T>> = HashSet::from([Vec::new()]);
    for _ in 0..length {
        let mut next = HashSet::with_capacity(answer.len() * outcomes.len());
        for partial in &answer {
            for item in outcomes {
                let mut sequence = Vec::with_capacity(partial.len() + 1);
                sequence.extend_from_slice(partial);
                sequence.push(item.clone());
                next.insert(sequence);
            }
        }
        answer = next;
    }
    answer
}

/// Best upper-section score of a hand: the largest `count(face) * face` over its faces.
///
/// The empty hand scores zero.
pub fn score(hand: &[u8]) -> u32 {
    let mut counts: HashMap<u8, u32> = HashMap::new();
    for &die in hand {
        *counts.entry(die).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(face, count)| count * face as u32)
        .max()
        .unwrap_or(0)
}

/// Expected score of keeping `held_dice` and rolling `num_free_dice` dice with
/// `num_die_sides` sides each.
pub fn expected_value(
    held_dice: &[u8],
    num_die_sides: u8,
    num_free_dice: usize,
) -> Result<f64, PlannerError> {
    if num_die_sides == 0 && num_free_dice > 0 {
        return Err(PlannerError::NoDieSides);
    }

    let faces: Vec<u8> = (1..=num_die_sides).collect();
    let outcomes = gen_all_sequences(&faces, num_free_dice);

    let mut hand = Vec::with_capacity(held_dice.len() + num_free_dice);
    let total: u64 = outcomes
        .iter()
        .map(|outcome| {
            hand.clear();
            hand.extend_from_slice(held_dice);
            hand.extend_from_slice(outcome);
            score(&hand) as u64
        })
        .sum();

    Ok(total as f64 / outcomes.len() as f64)
}

/// Every hold that can be kept from `hand`, one per subset of dice positions.
///
/// The result has `2^hand.len()` entries ordered by position mask, so it starts with the
/// empty hold and ends with the whole hand. Dice keep their order from the hand.
pub fn gen_all_holds(hand: &[u8]) -> Vec<Vec<u8>> {
    let n = hand.len();
    (0..1usize << n)
        .map(|mask| {
            hand.iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1usize << i) != 0)
                .map(|(_, &die)| die)
                .collect()
        })
        .collect()
}

/// Finds the hold with the highest expected score when the other dice are rerolled once.
///
/// Holds are compared in [`gen_all_holds`] order and a later hold replaces the current
/// best only if it is strictly better.
pub fn strategy(hand: &[u8], num_die_sides: u8) -> Result<HoldStrategy, PlannerError> {
    if hand.is_empty() {
        return Err(PlannerError::EmptyHand);
    }
    if num_die_sides == 0 {
        return Err(PlannerError::NoDieSides);
    }
    if let Some(&face) = hand.iter().find(|&&d| d == 0 || d > num_die_sides) {
        return Err(PlannerError::FaceOutOfRange {
            face,
            sides: num_die_sides,
        });
    }

    let mut best = HoldStrategy {
        expected_score: f64::NEG_INFINITY,
        held_dice: Vec::new(),
    };
    for held_dice in gen_all_holds(hand) {
        let value = expected_value(&held_dice, num_die_sides, hand.len() - held_dice.len())?;
        if log_enabled!(Level::Trace) {
            trace!("hold {:?} -> {:.4}", held_dice, value);
        }
        if value > best.expected_score {
            best = HoldStrategy {
                expected_score: value,
                held_dice,
            };
        }
    }

    debug!(
        "best hold for {:?} with {}-sided dice is {:?} ({:.4})",
        hand, num_die_sides, best.held_dice, best.expected_score
    );
    Ok(best)
}
