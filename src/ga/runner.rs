//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → record best → crossover →
//! mutation → repeat.

use super::config::EvolutionConfig;
use super::fitness::evaluate;
use super::operators::{crossover, mutate};
use super::report::{BestSolution, FinalReport, GenerationReport};
use super::selection::select;
use super::types::{initialize, Candidate, Fitness};
use crate::catalog::Catalog;
use crate::error::{ConfigError, Error};
use crate::random::create_rng;
use rand::Rng;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Executes the knapsack evolution.
///
/// # Usage
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::ga::{EvolutionConfig, EvolutionRunner};
///
/// let catalog: Catalog = [(10, 5), (20, 10), (30, 15)].into_iter().collect();
/// let config = EvolutionConfig::default()
///     .with_max_weight(20)
///     .with_generations(50)
///     .with_seed(42);
/// let report = EvolutionRunner::run(&catalog, &config)?;
/// assert!(report.best_fitness() <= 40);
/// # Ok::<(), u_knapsack::Error>(())
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolution.
    ///
    /// Fails only if the configuration is invalid; nothing is run in that
    /// case.
    pub fn run(catalog: &Catalog, config: &EvolutionConfig) -> Result<FinalReport, Error> {
        Self::run_with_cancel(catalog, config, None)
    }

    /// Runs the evolution with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// at the next generation boundary and reports the best solution found
    /// so far.
    pub fn run_with_cancel(
        catalog: &Catalog,
        config: &EvolutionConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<FinalReport, Error> {
        let mut rng = seeded_rng(config);
        Self::run_with_rng(catalog, config, &mut rng, None, cancel.as_deref())
    }

    /// Runs the evolution, appending one report per generation and the final
    /// report to `sink`.
    pub fn run_with_sink(
        catalog: &Catalog,
        config: &EvolutionConfig,
        sink: &mut dyn Write,
    ) -> Result<FinalReport, Error> {
        let mut rng = seeded_rng(config);
        Self::run_with_rng(catalog, config, &mut rng, Some(sink), None)
    }

    /// Runs the evolution with a caller-supplied random source.
    ///
    /// `config.seed` is ignored; all randomness comes from `rng`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            items = catalog.len(),
            population = config.starting_population,
            generations = config.generations
        )
    )]
    pub fn run_with_rng<R: Rng>(
        catalog: &Catalog,
        config: &EvolutionConfig,
        rng: &mut R,
        mut sink: Option<&mut dyn Write>,
        cancel: Option<&AtomicBool>,
    ) -> Result<FinalReport, Error> {
        config.validate()?;

        info!(
            items = catalog.len(),
            max_weight = config.max_weight,
            population = config.starting_population,
            "starting evolution"
        );
        let start = Instant::now();

        // 1. Initialize population
        let mut population = initialize(catalog.len(), config.starting_population, rng);

        let mut best = BestSolution::initial(catalog.len());
        let mut history = Vec::new();
        let mut cancelled = false;

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(generation, "evolution cancelled");
                cancelled = true;
                break;
            }

            // Evaluate
            let fitnesses = evaluate_population(&population, catalog, config);

            // Select
            let selected = select(population, &fitnesses, config.selection_percentage);
            let Some(top) = selected.first() else {
                return Err(ConfigError::DegenerateSelection {
                    population: config.starting_population,
                    percentage: config.selection_percentage,
                }
                .into());
            };

            // Report
            let report =
                GenerationReport::new(generation, &fitnesses, top, catalog, config.max_weight);
            debug!(
                generation,
                best = report.max_fitness,
                average = report.average_fitness,
                "generation evaluated"
            );
            if let Some(sink) = sink.as_deref_mut() {
                write!(sink, "{report}").map_err(Error::Report)?;
            }

            // Record best
            if best.offer(report.max_fitness, top) {
                debug!(generation, fitness = best.fitness, "new best solution");
            }
            history.push(report);

            // Recombine, then mutate
            population = crossover(&selected, config.starting_population, rng);
            mutate(&mut population, config.mutation_intensity, rng);
        }

        let report = FinalReport::new(
            best,
            catalog,
            config.max_weight,
            start.elapsed(),
            cancelled,
            history,
        );

        if let Some(sink) = sink {
            write!(sink, "{report}").map_err(Error::Report)?;
            sink.flush().map_err(Error::Report)?;
        }

        info!(
            best = report.best_fitness(),
            weight = report.total_weight,
            generations = report.generations,
            elapsed_s = report.elapsed.as_secs_f64(),
            "evolution finished"
        );

        Ok(report)
    }
}

fn seeded_rng(config: &EvolutionConfig) -> rand::rngs::StdRng {
    match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Evaluate all candidates, in parallel when enabled.
fn evaluate_population(
    population: &[Candidate],
    catalog: &Catalog,
    config: &EvolutionConfig,
) -> Vec<Fitness> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return super::fitness::evaluate_parallel(population, catalog, config.max_weight);
    }
    evaluate(population, catalog, config.max_weight)
}

// ============================================================================
// Tests
// ============================================================================
