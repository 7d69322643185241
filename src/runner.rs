//! Evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete generational cycle:
//! initialization → evaluation → selection → reproduction → replacement,
//! tracking the best candidate ever observed.

use crate::candidate::{onemax, Candidate};
use crate::config::GaConfig;
use crate::error::Result;
use crate::operators::reproduce_pair;
use crate::random::RandomSource;
use crate::selection::tournament_select;

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best candidate observed across all generations, with its
    /// evaluated score. `None` only when the run had zero generations
    /// and nothing was ever evaluated.
    pub best: Option<Candidate>,

    /// Score of `best`, or 0.0 for a zero-generation run.
    pub best_score: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-ever score at the end of each generation.
    pub score_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use bitstring_ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_string_length(20)
///     .with_population_size(50)
///     .with_generations(100)
///     .with_mutation_rate(1.0 / 20.0)
///     .with_crossover_rate(0.9)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.best_score > 10.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// Fails fast with a configuration error before any population
    /// state is built; the loop itself has no failure path.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        Self::run_with_progress(config, |_, _| {})
    }

    /// Runs the GA, emitting `(generation_index, best_score_so_far)` to
    /// `progress` once per completed evaluation phase.
    pub fn run_with_progress(
        config: &GaConfig,
        mut progress: impl FnMut(usize, f64),
    ) -> Result<GaResult> {
        config.validate()?;

        let mut rng = RandomSource::from_seed(config.seed);

        // 1. Initialize population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(config.string_length, &mut rng))
            .collect();

        // Best-ever is an owned copy: the population it came from is
        // replaced every generation.
        let mut best: Option<Candidate> = None;
        let mut score_history = Vec::with_capacity(config.generations);

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            // Evaluate, copy-on-improve into the best-ever slot
            for candidate in &mut population {
                candidate.score = onemax(candidate);
                if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                    best = Some(candidate.clone());
                }
            }

            // Report progress
            let best_score = best.as_ref().map_or(0.0, |b| b.score);
            log::debug!("generation {generation}: best score {best_score}");
            progress(generation, best_score);
            score_history.push(best_score);

            // Select parents: borrows into the current population, one
            // tournament per output slot
            let parents: Vec<&Candidate> = (0..config.population_size)
                .map(|_| tournament_select(&population, config.tournament_rounds, &mut rng))
                .collect();

            // Reproduce consecutive pairs
            let mut children = Vec::with_capacity(config.population_size);
            for pair in parents.chunks_exact(2) {
                let (child_a, child_b) = reproduce_pair(
                    pair[0],
                    pair[1],
                    config.crossover_rate,
                    config.mutation_rate,
                    &mut rng,
                );
                children.push(child_a);
                children.push(child_b);
            }

            // Children replace parents; the old generation is dropped
            population = children;
        }

        Ok(GaResult {
            best_score: best.as_ref().map_or(0.0, |b| b.score),
            best,
            generations: config.generations,
            score_history,
        })
    }
}
