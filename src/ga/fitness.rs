//! Fitness evaluation against a catalog and weight capacity.
//!
//! A feasible candidate (total weight within capacity) scores its total
//! price. An infeasible one scores `-(total_price * overweight)`, so the
//! penalty grows with both the carried value and the excess weight. An
//! infeasible candidate carrying no value scores exactly 0, tying with
//! the empty selection. A negative capacity makes every candidate
//! infeasible.

use super::types::{Candidate, Fitness};
use crate::catalog::Catalog;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sum of prices of included items.
pub fn total_price(candidate: &Candidate, catalog: &Catalog) -> u64 {
    debug_assert_eq!(candidate.len(), catalog.len());
    candidate
        .included()
        .map(|i| u64::from(catalog[i].price))
        .sum()
}

/// Sum of weights of included items.
pub fn total_weight(candidate: &Candidate, catalog: &Catalog) -> u64 {
    debug_assert_eq!(candidate.len(), catalog.len());
    candidate
        .included()
        .map(|i| u64::from(catalog[i].weight))
        .sum()
}

/// Scores one candidate.
pub fn evaluate_single(candidate: &Candidate, catalog: &Catalog, max_weight: i64) -> Fitness {
    let price = to_fitness(total_price(candidate, catalog));
    let weight = to_fitness(total_weight(candidate, catalog));

    if weight <= max_weight {
        return price;
    }

    let overweight = weight.saturating_sub(max_weight);
    price.saturating_mul(overweight).saturating_neg()
}

/// Scores every candidate, preserving order.
pub fn evaluate(population: &[Candidate], catalog: &Catalog, max_weight: i64) -> Vec<Fitness> {
    population
        .iter()
        .map(|c| evaluate_single(c, catalog, max_weight))
        .collect()
}

/// Same as [`evaluate`], spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn evaluate_parallel(
    population: &[Candidate],
    catalog: &Catalog,
    max_weight: i64,
) -> Vec<Fitness> {
    population
        .par_iter()
        .map(|c| evaluate_single(c, catalog, max_weight))
        .collect()
}

// Totals beyond i64::MAX clamp rather than wrap.
fn to_fitness(value: u64) -> Fitness {
    Fitness::try_from(value).unwrap_or(Fitness::MAX)
}
