//! Candidate solutions and the OneMax fitness function.
//!
//! A [`Candidate`] is a fixed-length bit string plus its cached fitness
//! score. Scores are only meaningful after the engine stores the result
//! of [`onemax`] into them; freshly built candidates carry 0.0.

use crate::random::RandomSource;

/// A single bit-string solution with its cached fitness score.
///
/// Each candidate owns its encoding; copies are always deep. `Clone`
/// carries the score along (used by the best-ever slot), while
/// [`duplicate`](Candidate::duplicate) resets it (used when reproducing).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// The encoding: each position holds 0 or 1.
    pub bits: Vec<u8>,

    /// Cached fitness, 0.0 until evaluated.
    pub score: f64,
}

impl Candidate {
    /// Creates a candidate with `length` uniformly random bits.
    ///
    /// Draws one bit per position from `rng`, in position order.
    ///
    /// # Panics
    /// Panics if `length` is zero.
    pub fn random(length: usize, rng: &mut RandomSource) -> Self {
        assert!(length > 0, "candidate length must be positive");
        let bits = (0..length).map(|_| rng.uniform_bit()).collect();
        Self { bits, score: 0.0 }
    }

    /// Deep-copies the encoding into a fresh, unevaluated candidate.
    ///
    /// The score is not carried over; the copy starts at 0.0 and must be
    /// re-evaluated before it can compete in selection.
    pub fn duplicate(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            score: 0.0,
        }
    }

    /// Number of positions in the encoding.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a zero-length encoding (never produced by this crate).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// OneMax fitness: the number of 1-valued positions.
///
/// Pure function of the encoding; the caller stores the result into
/// `candidate.score`.
pub fn onemax(candidate: &Candidate) -> f64 {
    candidate.bits.iter().map(|&b| f64::from(b)).sum()
}
