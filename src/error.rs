//! Error types.
//!
//! Configuration problems are detected before a run starts; catalog
//! problems are detected while loading. The evolutionary loop itself
//! has no failure modes beyond writing to the report sink.

/// Rejected [`EvolutionConfig`](crate::ga::EvolutionConfig) parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting_population must be at least 1")]
    EmptyPopulation,

    #[error("mutation_intensity must be within 0..=100, got {0}")]
    MutationIntensity(u32),

    #[error("selection_percentage must be within 1..=100, got {0}")]
    SelectionPercentage(u32),

    /// `floor(population * percentage / 100)` rounds down to zero, leaving
    /// crossover without parents.
    #[error(
        "selection keeps no parents: {percentage}% of a population of {population} rounds to 0"
    )]
    DegenerateSelection { population: usize, percentage: u32 },
}

/// Failure while reading or parsing an item file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read item file: {0}")]
    Io(#[from] std::io::Error),

    /// Line numbers are 1-based.
    #[error("line {line}: expected `price,weight` with non-negative integers, got {content:?}")]
    Parse { line: usize, content: String },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),
}
