//! Crossover and mutation operators for inclusion vectors.
//!
//! # Crossover
//!
//! - [`crossover_single`]: Half-split recombination of two parents
//! - [`crossover`]: Refill a population from a parent pool
//!
//! # Mutation
//!
//! - [`mutate_single`]: Flip `floor(len * intensity / 100)` random bits
//! - [`mutate`]: Apply [`mutate_single`] to every candidate

use super::types::{Candidate, Population};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Produces one child from two parents by joining halves.
///
/// With equal probability the child is either
/// - the first half of `parent1` followed by the second half of `parent2`, or
/// - the second half of `parent1` followed by the first half of `parent2`.
///
/// The split point is `len / 2` for each parent. For equal-length parents
/// the child has the same length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn crossover_single<R: Rng>(parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Candidate {
    let a = parent1.genes();
    let b = parent2.genes();
    let mid_a = a.len() / 2;
    let mid_b = b.len() / 2;

    let mut genes = Vec::with_capacity(a.len());
    if rng.random_bool(0.5) {
        genes.extend_from_slice(&a[..mid_a]);
        genes.extend_from_slice(&b[mid_b..]);
    } else {
        genes.extend_from_slice(&a[mid_a..]);
        genes.extend_from_slice(&b[..mid_b]);
    }
    Candidate::new(genes)
}

/// Builds `target_size` children from `parents`.
///
/// Each child draws two parents uniformly at random, with replacement, and
/// recombines them with [`crossover_single`].
///
/// # Panics
/// Panics if `parents` is empty and `target_size > 0`.
pub fn crossover<R: Rng>(parents: &[Candidate], target_size: usize, rng: &mut R) -> Population {
    if target_size == 0 {
        return Vec::new();
    }
    assert!(
        !parents.is_empty(),
        "cannot recombine from an empty parent pool"
    );

    let n = parents.len();
    (0..target_size)
        .map(|_| {
            let p1 = &parents[rng.random_range(0..n)];
            let p2 = &parents[rng.random_range(0..n)];
            crossover_single(p1, p2, rng)
        })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips `floor(len * intensity / 100)` randomly chosen bits in place.
///
/// Positions are drawn with replacement, so the same bit may be flipped
/// twice and end up unchanged. An intensity of 0 leaves the candidate
/// untouched and consumes no randomness.
///
/// # Complexity
/// O(len * intensity / 100)
pub fn mutate_single<R: Rng>(candidate: &mut Candidate, intensity: u32, rng: &mut R) {
    if intensity == 0 {
        return;
    }
    let len = candidate.len();
    let steps = len.saturating_mul(intensity as usize) / 100;
    for _ in 0..steps {
        let pos = rng.random_range(0..len);
        candidate.flip(pos);
    }
}

/// Mutates every candidate independently.
pub fn mutate<R: Rng>(population: &mut [Candidate], intensity: u32, rng: &mut R) {
    for candidate in population.iter_mut() {
        mutate_single(candidate, intensity, rng);
    }
}

// ============================================================================
// Tests
// ============================================================================
