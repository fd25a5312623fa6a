//! Evolutionary solver for the 0/1 knapsack problem.
//!
//! Chooses a subset of items, each with a price and a weight, that
//! maximizes total price under a weight cap. The search is a genetic
//! algorithm:
//!
//! - **Catalog**: The ordered `(price, weight)` items of a run, with a
//!   text loader and a random generator.
//! - **GA**: Bit-vector candidates, penalty-based fitness, truncation
//!   selection, half-split crossover and bit-flip mutation, driven
//!   generation by generation while tracking the best solution ever seen.
//!
//! # Example
//!
//! ```
//! use u_knapsack::catalog::parse_items;
//! use u_knapsack::ga::{EvolutionConfig, EvolutionRunner};
//!
//! let catalog = parse_items("10,5\n20,10\n30,15\n")?;
//! let config = EvolutionConfig::default()
//!     .with_max_weight(20)
//!     .with_starting_population(40)
//!     .with_selection_percentage(50)
//!     .with_mutation_intensity(34)
//!     .with_generations(30)
//!     .with_seed(7);
//!
//! let report = EvolutionRunner::run(&catalog, &config)?;
//! assert!(report.total_weight <= 20);
//! println!("{report}");
//! # Ok::<(), u_knapsack::Error>(())
//! ```
//!
//! The search is heuristic: it approximates the optimum and gives no
//! optimality guarantee.

pub mod catalog;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{CatalogError, ConfigError, Error};
