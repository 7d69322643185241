//! Tournament selection.
//!
//! Selection determines which candidates become parents for the next
//! generation. Higher round counts mean stronger selection pressure.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::candidate::Candidate;
use crate::random::RandomSource;

/// Tournament selection: best of `rounds` independent uniform draws.
///
/// The first draw seeds the incumbent; each of the remaining
/// `rounds - 1` draws replaces it only on a strictly greater score, so
/// ties keep the earlier-drawn candidate. `rounds = 1` degenerates to
/// uniform random selection with no tournament pressure.
///
/// Returns a borrow into `population`; callers that need to mutate the
/// winner must [`duplicate`](Candidate::duplicate) it first.
///
/// # Panics
/// Panics if `population` is empty or `rounds` is zero.
pub fn tournament_select<'a>(
    population: &'a [Candidate],
    rounds: usize,
    rng: &mut RandomSource,
) -> &'a Candidate {
    assert!(!population.is_empty(), "cannot select from empty population");
    assert!(rounds >= 1, "tournament needs at least one round");

    let n = population.len();
    let mut selected = &population[rng.uniform_int(n - 1)];
    for _ in 1..rounds {
        let contender = &population[rng.uniform_int(n - 1)];
        if contender.score > selected.score {
            selected = contender;
        }
    }
    selected
}
