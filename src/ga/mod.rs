//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Candidates are inclusion bit vectors over a [`Catalog`](crate::catalog::Catalog).
//! Each generation evaluates the population, keeps the top fraction by
//! fitness, regrows the population by half-split crossover and flips
//! random bits.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Run parameters (capacity, population, percentages)
//! - [`EvolutionRunner`]: Executes the evolutionary loop
//! - [`FinalReport`]: Best solution of a run with per-generation history
//!
//! # Operations
//!
//! - [`initialize`]: Random starting population
//! - [`evaluate_single`] / [`evaluate`]: Price reward, overweight penalty
//! - [`select`]: Truncation selection
//! - [`crossover_single`] / [`crossover`]: Half-split recombination
//! - [`mutate_single`] / [`mutate`]: Random bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution Programs*, ch. 10

mod config;
mod fitness;
mod operators;
mod report;
mod runner;
mod selection;
mod types;

pub use config::EvolutionConfig;
#[cfg(feature = "parallel")]
pub use fitness::evaluate_parallel;
pub use fitness::{evaluate, evaluate_single, total_price, total_weight};
pub use operators::{crossover, crossover_single, mutate, mutate_single};
pub use report::{BestSolution, FinalReport, GenerationReport, SelectedItem};
pub use runner::EvolutionRunner;
pub use selection::{keep_count, select};
pub use types::{initialize, Candidate, Fitness, Population};
