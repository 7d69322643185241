//! Binary-encoded genetic algorithm for fixed-length bit strings.
//!
//! Solves the OneMax benchmark — maximize the number of 1-bits in a
//! fixed-length string — with the classic generational loop:
//!
//! - **Tournament selection**: best of `k` independent uniform draws.
//! - **One-point crossover**: splice two parents at a shared interior
//!   point, producing a complementary pair of children.
//! - **Point mutation**: independent per-bit flips.
//!
//! All randomness is drawn from one seeded [`RandomSource`] in a fixed
//! order, so a run is fully reproducible from its configuration.
//!
//! # Example
//!
//! ```
//! use bitstring_ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_string_length(20)
//!     .with_population_size(50)
//!     .with_generations(200)
//!     .with_mutation_rate(1.0 / 20.0)
//!     .with_crossover_rate(0.9)
//!     .with_seed(42);
//!
//! let result = GaRunner::run_with_progress(&config, |generation, best| {
//!     println!(">{generation}, fitness={best}");
//! })
//! .unwrap();
//!
//! let best = result.best.expect("at least one generation ran");
//! assert_eq!(best.len(), 20);
//! ```
//!
//! # Key Types
//!
//! - [`Candidate`]: a bit string plus its cached fitness score
//! - [`GaConfig`]: algorithm parameters with builder-style setters
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best-ever candidate and per-generation score history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod candidate;
mod config;
mod error;
pub mod operators;
mod random;
mod runner;
mod selection;

pub use candidate::{onemax, Candidate};
pub use config::GaConfig;
pub use error::{GaError, Result};
pub use random::RandomSource;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament_select;
