//! Variation operators: one-point crossover and point mutation.
//!
//! [`reproduce_pair`] combines them into the per-pair reproduction
//! policy used by the engine: one shared crossover decision and point,
//! then independent per-bit mutation of both children.
//!
//! The order of random draws (crossover decision, optional point, then
//! child A's mutation bits, then child B's) is fixed and part of the
//! seed-reproducibility contract.

use crate::candidate::Candidate;
use crate::random::RandomSource;

/// One-point crossover: prefix `[0, point)` from `parent1`, suffix
/// `[point, length)` from `parent2`.
///
/// The point must be strictly interior so both parents contribute at
/// least one bit. Swapping the parents at the same point yields the
/// complementary child. The child's score is unset.
///
/// # Panics
/// Panics if the parents' lengths differ or `point` is not interior.
pub fn one_point_crossover(parent1: &Candidate, parent2: &Candidate, point: usize) -> Candidate {
    let length = parent1.len();
    assert_eq!(length, parent2.len(), "parents must have equal length");
    assert!(
        point > 0 && point < length,
        "crossover point must be interior: 0 < {point} < {length}"
    );

    let mut child = parent1.duplicate();
    child.bits[point..].copy_from_slice(&parent2.bits[point..]);
    child
}

/// Point mutation: flip each bit independently with probability `rate`.
///
/// Mutates in place, drawing one float per position in order. `rate = 0`
/// is a no-op and `rate = 1` flips every bit.
pub fn mutate(candidate: &mut Candidate, rate: f64, rng: &mut RandomSource) {
    for bit in &mut candidate.bits {
        if rng.uniform_float() <= rate {
            *bit = 1 - *bit;
        }
    }
}

/// Produces two children from a parent pair.
///
/// With probability `crossover_rate`, one interior point is drawn and
/// shared by both children so they partition the parents' positions
/// between them; otherwise both parents are duplicated unchanged.
/// Either way both children are then mutated independently.
///
/// Encodings shorter than 2 bits have no interior point; such pairs
/// degrade to duplication even when the crossover decision fires.
pub fn reproduce_pair(
    parent1: &Candidate,
    parent2: &Candidate,
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut RandomSource,
) -> (Candidate, Candidate) {
    let length = parent1.len();
    let crossed = rng.uniform_float() <= crossover_rate;

    let (mut child_a, mut child_b) = if crossed && length >= 2 {
        let point = 1 + rng.uniform_int(length - 2);
        (
            one_point_crossover(parent1, parent2, point),
            one_point_crossover(parent2, parent1, point),
        )
    } else {
        (parent1.duplicate(), parent2.duplicate())
    };

    mutate(&mut child_a, mutation_rate, rng);
    mutate(&mut child_b, mutation_rate, rng);
    (child_a, child_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidate(bits: &[u8]) -> Candidate {
        Candidate {
            bits: bits.to_vec(),
            score: 0.0,
        }
    }

    // ---- one_point_crossover ----

    #[test]
    fn test_crossover_splices_at_point() {
        let p1 = candidate(&[1, 1, 1, 1, 1]);
        let p2 = candidate(&[0, 0, 0, 0, 0]);

        let child = one_point_crossover(&p1, &p2, 2);
        assert_eq!(child.bits, vec![1, 1, 0, 0, 0]);
        assert!((child.score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crossover_swapped_parents_complement() {
        let p1 = candidate(&[1, 0, 1, 0, 1, 0]);
        let p2 = candidate(&[0, 1, 1, 1, 0, 0]);

        for point in 1..6 {
            let a = one_point_crossover(&p1, &p2, point);
            let b = one_point_crossover(&p2, &p1, point);
            for i in 0..6 {
                if i < point {
                    assert_eq!(a.bits[i], p1.bits[i]);
                    assert_eq!(b.bits[i], p2.bits[i]);
                } else {
                    assert_eq!(a.bits[i], p2.bits[i]);
                    assert_eq!(b.bits[i], p1.bits[i]);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "must be interior")]
    fn test_crossover_point_zero_panics() {
        let p1 = candidate(&[1, 1]);
        let p2 = candidate(&[0, 0]);
        one_point_crossover(&p1, &p2, 0);
    }

    #[test]
    #[should_panic(expected = "must be interior")]
    fn test_crossover_point_at_length_panics() {
        let p1 = candidate(&[1, 1]);
        let p2 = candidate(&[0, 0]);
        one_point_crossover(&p1, &p2, 2);
    }

    proptest! {
        #[test]
        fn prop_crossover_partitions_parents(
            len in 2usize..64,
            seed in 0u64..256,
        ) {
            let mut rng = RandomSource::from_seed(seed);
            let p1 = Candidate::random(len, &mut rng);
            let p2 = Candidate::random(len, &mut rng);
            let point = 1 + rng.uniform_int(len - 2);

            let a = one_point_crossover(&p1, &p2, point);
            let b = one_point_crossover(&p2, &p1, point);
            for i in 0..len {
                if i < point {
                    prop_assert_eq!(a.bits[i], p1.bits[i]);
                    prop_assert_eq!(b.bits[i], p2.bits[i]);
                } else {
                    prop_assert_eq!(a.bits[i], p2.bits[i]);
                    prop_assert_eq!(b.bits[i], p1.bits[i]);
                }
            }
        }
    }

    // ---- mutate ----

    #[test]
    fn test_mutate_rate_zero_is_noop() {
        let mut rng = RandomSource::from_seed(42);
        let mut c = Candidate::random(50, &mut rng);
        let before = c.bits.clone();
        mutate(&mut c, 0.0, &mut rng);
        assert_eq!(c.bits, before);
    }

    #[test]
    fn test_mutate_rate_one_flips_all() {
        let mut rng = RandomSource::from_seed(42);
        let mut c = candidate(&[1, 0, 1, 0, 1]);
        mutate(&mut c, 1.0, &mut rng);
        assert_eq!(c.bits, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_mutate_keeps_bits_binary() {
        let mut rng = RandomSource::from_seed(42);
        let mut c = Candidate::random(100, &mut rng);
        for _ in 0..10 {
            mutate(&mut c, 0.3, &mut rng);
            assert!(c.bits.iter().all(|&b| b <= 1));
        }
    }

    // ---- reproduce_pair ----

    #[test]
    fn test_reproduce_without_crossover_duplicates() {
        let mut rng = RandomSource::from_seed(42);
        let p1 = candidate(&[1, 1, 1, 1]);
        let p2 = candidate(&[0, 0, 0, 0]);

        let (a, b) = reproduce_pair(&p1, &p2, 0.0, 0.0, &mut rng);
        assert_eq!(a.bits, p1.bits);
        assert_eq!(b.bits, p2.bits);
    }

    #[test]
    fn test_reproduce_with_crossover_partitions() {
        let mut rng = RandomSource::from_seed(42);
        let p1 = candidate(&[1, 1, 1, 1, 1, 1]);
        let p2 = candidate(&[0, 0, 0, 0, 0, 0]);

        let (a, b) = reproduce_pair(&p1, &p2, 1.0, 0.0, &mut rng);
        // Children share the point, so per position exactly one of them
        // carries p1's bit.
        for i in 0..6 {
            assert_eq!(a.bits[i] + b.bits[i], 1);
        }
        // Both prefixes and suffixes non-empty.
        assert_eq!(a.bits[0], 1);
        assert_eq!(b.bits[0], 0);
        assert_eq!(*a.bits.last().unwrap(), 0);
        assert_eq!(*b.bits.last().unwrap(), 1);
    }

    #[test]
    fn test_reproduce_length_one_degrades_to_duplication() {
        let mut rng = RandomSource::from_seed(42);
        let p1 = candidate(&[1]);
        let p2 = candidate(&[0]);

        for _ in 0..50 {
            let (a, b) = reproduce_pair(&p1, &p2, 1.0, 0.0, &mut rng);
            assert_eq!(a.bits, p1.bits);
            assert_eq!(b.bits, p2.bits);
        }
    }

    #[test]
    fn test_reproduce_length_two_always_point_one() {
        let mut rng = RandomSource::from_seed(42);
        let p1 = candidate(&[1, 1]);
        let p2 = candidate(&[0, 0]);

        for _ in 0..50 {
            let (a, b) = reproduce_pair(&p1, &p2, 1.0, 0.0, &mut rng);
            assert_eq!(a.bits, vec![1, 0]);
            assert_eq!(b.bits, vec![0, 1]);
        }
    }

    #[test]
    fn test_disabled_operators_copy_selected_parents_exactly() {
        // One full select-and-reproduce pass with crossover and mutation
        // off: the children must be a bit-exact multiset copy of the
        // selected parents.
        use crate::selection::tournament_select;

        let mut rng = RandomSource::from_seed(1);
        let mut population: Vec<Candidate> =
            (0..4).map(|_| Candidate::random(10, &mut rng)).collect();
        for c in &mut population {
            c.score = crate::candidate::onemax(c);
        }

        let parents: Vec<&Candidate> = (0..4)
            .map(|_| tournament_select(&population, 2, &mut rng))
            .collect();
        let mut expected: Vec<Vec<u8>> = parents.iter().map(|p| p.bits.clone()).collect();

        let mut children = Vec::new();
        for pair in parents.chunks_exact(2) {
            let (a, b) = reproduce_pair(pair[0], pair[1], 0.0, 0.0, &mut rng);
            children.push(a.bits);
            children.push(b.bits);
        }

        expected.sort();
        children.sort();
        assert_eq!(children, expected);
    }

    #[test]
    fn test_reproduce_children_are_owned() {
        let mut rng = RandomSource::from_seed(42);
        let p1 = candidate(&[1, 0, 1, 0]);
        let p2 = candidate(&[0, 1, 0, 1]);

        let (mut a, _) = reproduce_pair(&p1, &p2, 0.0, 0.0, &mut rng);
        a.bits[0] = 1 - a.bits[0];
        assert_eq!(p1.bits, vec![1, 0, 1, 0]);
    }
}
