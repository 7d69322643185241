//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Configuration for the genetic algorithm.
///
/// Controls the bit-string length, population shape, operator rates, and
/// the random seed. All parameters are validated before the engine
/// builds any state.
///
/// # Defaults
///
/// ```
/// use bitstring_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.string_length, 64);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitstring_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_string_length(20)
///     .with_population_size(50)
///     .with_generations(200)
///     .with_mutation_rate(1.0 / 20.0)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Seed for the random stream. Same seed, same trajectory.
    pub seed: u64,

    /// Number of candidates per generation.
    ///
    /// Must be positive and even: reproduction consumes parents in
    /// consecutive pairs.
    pub population_size: usize,

    /// Number of bits in every candidate's encoding. Must be positive.
    pub string_length: usize,

    /// Number of generations to run. Zero is allowed and produces no
    /// evaluated candidate.
    pub generations: usize,

    /// Tournament rounds per parent selection (≥ 1).
    ///
    /// Higher values mean stronger selection pressure; 1 degenerates to
    /// uniform random selection.
    pub tournament_rounds: usize,

    /// Per-bit flip probability in `[0, 1]`.
    ///
    /// A common choice is `1 / string_length`: one expected flip per
    /// child.
    pub mutation_rate: f64,

    /// Probability in `[0, 1]` that a parent pair recombines instead of
    /// duplicating.
    pub crossover_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            population_size: 100,
            string_length: 64,
            generations: 500,
            tournament_rounds: 3,
            mutation_rate: 1.0 / 64.0,
            crossover_rate: 0.95,
        }
    }
}

impl GaConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the bit-string length.
    pub fn with_string_length(mut self, length: usize) -> Self {
        self.string_length = length;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the number of tournament rounds.
    pub fn with_tournament_rounds(mut self, rounds: usize) -> Self {
        self.tournament_rounds = rounds;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected rather than clamped, so a caller
    /// never runs with silently adjusted parameters.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(GaError::PopulationSize(self.population_size));
        }
        if self.string_length == 0 {
            return Err(GaError::StringLength(self.string_length));
        }
        if self.tournament_rounds == 0 {
            return Err(GaError::TournamentRounds(self.tournament_rounds));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::RateOutOfRange {
                name: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::RateOutOfRange {
                name: "crossover_rate",
                value: self.crossover_rate,
            });
        }
        Ok(())
    }
}
