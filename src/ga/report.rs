//! Per-generation and final run reports.
//!
//! Both report types render through [`Display`](std::fmt::Display) in the
//! plain-text layout written to a report sink.

use super::fitness::total_weight;
use super::types::{Candidate, Fitness};
use crate::catalog::{Catalog, Item};
use std::fmt;
use std::time::Duration;

const SEPARATOR: &str = "-------------------------------";

/// Statistics for one generation.
///
/// `max_fitness` and `average_fitness` cover the whole evaluated
/// population; `weight` is the total weight of the top selected candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    pub max_fitness: Fitness,
    pub weight: u64,
    pub max_weight: i64,
    pub average_fitness: f64,
}

impl GenerationReport {
    /// Builds the report from the pre-selection fitnesses and the best
    /// selected candidate.
    pub fn new(
        generation: usize,
        fitnesses: &[Fitness],
        top: &Candidate,
        catalog: &Catalog,
        max_weight: i64,
    ) -> Self {
        let max_fitness = fitnesses.iter().copied().max().unwrap_or_default();
        let average_fitness = if fitnesses.is_empty() {
            0.0
        } else {
            fitnesses.iter().map(|&f| f as f64).sum::<f64>() / fitnesses.len() as f64
        };

        Self {
            generation,
            max_fitness,
            weight: total_weight(top, catalog),
            max_weight,
            average_fitness,
        }
    }
}

/// Five-line record ending in a dashed separator.
///
/// The average uses Rust's shortest round-trip float form, so whole values
/// keep a trailing `.0` and large magnitudes print as e.g. `1e16`.
impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Maximal price: {}", self.max_fitness)?;
        writeln!(f, "Weight of this solution: {}/{}", self.weight, self.max_weight)?;
        writeln!(f, "Average price: {:?}", self.average_fitness)?;
        writeln!(f, "{SEPARATOR}")
    }
}

/// Best fitness observed so far in a run, with the candidate that scored it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestSolution {
    pub fitness: Fitness,
    pub candidate: Candidate,
}

impl BestSolution {
    /// The starting record: fitness 0 with every item excluded.
    pub fn initial(item_count: usize) -> Self {
        Self {
            fitness: 0,
            candidate: Candidate::excluded(item_count),
        }
    }

    /// Replaces the record if `fitness` is strictly greater.
    ///
    /// Returns `true` if the record changed. Ties keep the earlier candidate.
    pub fn offer(&mut self, fitness: Fitness, candidate: &Candidate) -> bool {
        if fitness > self.fitness {
            self.fitness = fitness;
            self.candidate = candidate.clone();
            true
        } else {
            false
        }
    }
}

/// An included item together with its 1-based catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedItem {
    /// 1-based position in the catalog.
    pub index: usize,
    pub item: Item,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalReport {
    /// The best record of the whole run.
    pub best: BestSolution,

    /// Items included by the best candidate, in catalog order.
    pub selected_items: Vec<SelectedItem>,

    /// Total weight of the best candidate.
    pub total_weight: u64,

    pub max_weight: i64,

    /// Wall-clock time of the whole run.
    pub elapsed: Duration,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One report per executed generation.
    pub history: Vec<GenerationReport>,
}

impl FinalReport {
    pub fn new(
        best: BestSolution,
        catalog: &Catalog,
        max_weight: i64,
        elapsed: Duration,
        cancelled: bool,
        history: Vec<GenerationReport>,
    ) -> Self {
        let selected_items = best
            .candidate
            .included()
            .map(|i| SelectedItem {
                index: i + 1,
                item: catalog[i],
            })
            .collect();

        Self {
            total_weight: total_weight(&best.candidate, catalog),
            selected_items,
            best,
            max_weight,
            elapsed,
            generations: history.len(),
            cancelled,
            history,
        }
    }

    /// Best fitness of the run.
    pub fn best_fitness(&self) -> Fitness {
        self.best.fitness
    }

    /// Total price of the best candidate.
    pub fn total_price(&self) -> u64 {
        self.selected_items
            .iter()
            .map(|s| u64::from(s.item.price))
            .sum()
    }
}

/// Best price, weight against capacity, the selected items as
/// `#index : (price, weight), ` and the elapsed time.
///
/// Elapsed seconds are printed with exactly four decimals, trailing zeros
/// included (`0.0100`).
impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEST SOLUTION")?;
        writeln!(f, "Price: {}", self.best.fitness)?;
        writeln!(
            f,
            "Weight of this solution: {}/{}",
            self.total_weight, self.max_weight
        )?;
        write!(f, "Selected items: ")?;
        for s in &self.selected_items {
            write!(f, "#{} : ({}, {}), ", s.index, s.item.price, s.item.weight)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(
            f,
            "Total time elapsed: {:.4} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}
