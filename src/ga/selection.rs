//! Truncation selection.
//!
//! The population is ranked by fitness (highest first) and only the top
//! percentage survives to become the parent pool for crossover.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use super::types::{Candidate, Fitness, Population};
use std::cmp::Reverse;

/// Number of candidates kept from a population of `population_size`:
/// `floor(population_size * percentage / 100)`.
pub fn keep_count(population_size: usize, percentage: u32) -> usize {
    population_size.saturating_mul(percentage as usize) / 100
}

/// Keeps the top `percentage` percent of `population` by fitness.
///
/// The result is sorted by fitness descending, so index 0 holds a
/// candidate with the maximal fitness. Returns an empty population when
/// [`keep_count`] is 0.
///
/// # Panics
/// Panics if `population` and `fitnesses` differ in length.
pub fn select(population: Population, fitnesses: &[Fitness], percentage: u32) -> Population {
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "one fitness per candidate required"
    );

    let keep = keep_count(population.len(), percentage);

    let mut ranked: Vec<(Fitness, Candidate)> =
        fitnesses.iter().copied().zip(population).collect();
    ranked.sort_by_key(|(fitness, _)| Reverse(*fitness));
    ranked.truncate(keep);

    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
