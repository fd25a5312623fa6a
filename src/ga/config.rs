//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the evolutionary loop.

use super::selection::keep_count;
use crate::error::ConfigError;

/// Configuration for a knapsack evolution run.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.starting_population, 100);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_max_weight(50)
///     .with_starting_population(200)
///     .with_selection_percentage(20)
///     .with_mutation_intensity(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Knapsack weight capacity.
    ///
    /// May be negative, in which case every selection, the empty one
    /// included, is overweight and scores `<= 0`.
    pub max_weight: i64,

    /// Number of candidates in the initial population.
    ///
    /// The population is regrown to this size after every selection.
    pub starting_population: usize,

    /// Percentage of bits flipped per candidate per generation (0–100).
    ///
    /// Each candidate receives `floor(len * intensity / 100)` flips at
    /// uniformly random positions.
    pub mutation_intensity: u32,

    /// Percentage of the population kept as parents each generation (1–100).
    pub selection_percentage: u32,

    /// Number of generations to run.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation is pure,
    /// so results do not depend on this flag.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            max_weight: 0,
            starting_population: 100,
            mutation_intensity: 10,
            selection_percentage: 50,
            generations: 100,
            seed: None,
            parallel: false,
        }
    }
}

impl EvolutionConfig {
    /// Sets the weight capacity. Negative values are accepted.
    pub fn with_max_weight(mut self, max_weight: i64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Sets the starting population size.
    pub fn with_starting_population(mut self, n: usize) -> Self {
        self.starting_population = n;
        self
    }

    /// Sets the mutation intensity (percent).
    pub fn with_mutation_intensity(mut self, intensity: u32) -> Self {
        self.mutation_intensity = intensity;
        self
    }

    /// Sets the selection percentage.
    pub fn with_selection_percentage(mut self, percentage: u32) -> Self {
        self.selection_percentage = percentage;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of parents kept by selection each generation.
    pub fn parents_per_generation(&self) -> usize {
        keep_count(self.starting_population, self.selection_percentage)
    }

    /// Validates the configuration.
    ///
    /// Rejects out-of-range percentages, an empty population, and a
    /// selection that would keep no parents.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.mutation_intensity > 100 {
            return Err(ConfigError::MutationIntensity(self.mutation_intensity));
        }
        if self.selection_percentage == 0 || self.selection_percentage > 100 {
            return Err(ConfigError::SelectionPercentage(self.selection_percentage));
        }
        if self.parents_per_generation() == 0 {
            return Err(ConfigError::DegenerateSelection {
                population: self.starting_population,
                percentage: self.selection_percentage,
            });
        }
        Ok(())
    }
}
