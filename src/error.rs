//! Error types.
//!
//! Configuration validation is the only failure path: once a
//! [`GaConfig`](crate::GaConfig) passes [`validate`](crate::GaConfig::validate),
//! the evolutionary loop cannot fail.

use thiserror::Error;

/// Errors produced by configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Population size must be positive and even (reproduction pairs
    /// parents two at a time).
    #[error("population size must be positive and even, got {0}")]
    PopulationSize(usize),

    /// Bit-string length must be positive.
    #[error("string length must be positive, got {0}")]
    StringLength(usize),

    /// Tournament selection needs at least one round.
    #[error("tournament rounds must be at least 1, got {0}")]
    TournamentRounds(usize),

    /// A probability parameter fell outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Which parameter was out of range.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
