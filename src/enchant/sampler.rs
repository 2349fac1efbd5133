//! Weighted random selection over a candidate pool.

use super::candidates::Candidate;
use crate::constants::UNIQUE_DRAW_ATTEMPTS;
use rand::Rng;
use std::collections::HashSet;

/// Pick one candidate with probability proportional to its weight.
///
/// Weights need not sum to 1; the draw is scaled by the pool total. The
/// trailing return covers floating-point drift where the accumulated sum
/// lands a hair short of the total. Returns `None` only for an empty
/// pool. The pool itself is never mutated, so repeated calls against the
/// same slice are independent draws.
pub fn select_weighted<'a>(candidates: &'a [Candidate], rng: &mut impl Rng) -> Option<&'a Candidate> {
    if candidates.is_empty() {
        return None;
    }

    let total_weight: f64 = candidates.iter().map(|c| c.weight).sum();
    let draw = rng.gen::<f64>() * total_weight;

    let mut running = 0.0;
    for candidate in candidates {
        running += candidate.weight;
        if draw <= running {
            return Some(candidate);
        }
    }

    candidates.last()
}

/// Weighted draw that avoids already-applied enchantments.
///
/// Re-draws up to `UNIQUE_DRAW_ATTEMPTS` times until it finds a candidate
/// whose id is not in `applied`. `None` means the budget ran out or the
/// pool was empty; callers treat that as "no more available", not as an
/// error.
pub fn draw_unique<'a>(
    candidates: &'a [Candidate],
    applied: &HashSet<String>,
    rng: &mut impl Rng,
) -> Option<&'a Candidate> {
    for _ in 0..UNIQUE_DRAW_ATTEMPTS {
        match select_weighted(candidates, rng) {
            Some(candidate) if !applied.contains(&candidate.enchantment) => {
                return Some(candidate);
            }
            Some(_) => continue,
            None => return None,
        }
    }
    None
}
