//! GA generational loop.
//!
//! [`GaRunner`] drives a population through repeated
//! [`next_generation`](super::Population::next_generation) calls:
//! evaluate → record statistics → check the stopping threshold → advance.

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::error::GaError;
use super::fitness::SharedFitness;
use super::population::Population;
use super::types::{Alphabet, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates the seeded generator used for a run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fitness statistics of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial random population.
    pub generation: usize,

    /// Highest fitness.
    pub max: f64,

    /// Arithmetic mean fitness.
    pub average: f64,

    /// Lowest fitness.
    pub min: f64,

    /// Population variance of fitness.
    pub variance: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<S: Symbol> {
    /// The best chromosome seen in any generation.
    pub best: Chromosome<S>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generation advances performed.
    pub generations: usize,

    /// Whether the run stopped because `stop_fitness` was reached.
    pub reached_target: bool,

    /// Statistics of every evaluated generation, initial population first.
    ///
    /// Holds `generations + 1` entries.
    pub history: Vec<GenerationStats>,

    /// The last generation.
    pub population: Population<S>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use u_genetic::ga::{infallible, Alphabet, GaConfig, GaRunner};
///
/// let ones = Arc::new(infallible(|g: &[char]| g.iter().filter(|&&c| c == '1').count() as f64));
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_chromosome_length(12)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&Alphabet::binary(), ones, &config).unwrap();
/// assert_eq!(result.history.len(), result.generations + 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from a random initial population.
    ///
    /// # Errors
    /// Any [`GaError`] from configuration validation, population
    /// construction, fitness evaluation, or selection.
    pub fn run<S: Symbol>(
        alphabet: &Alphabet<S>,
        fitness_fn: SharedFitness<S>,
        config: &GaConfig,
    ) -> Result<GaResult<S>, GaError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let population = Population::random(
            config.population_size,
            config.chromosome_length,
            alphabet,
            fitness_fn,
            &mut rng,
        )?;

        Self::run_from(population, config, &mut rng)
    }

    /// Runs the GA from an existing population with a caller-owned generator.
    ///
    /// `config.population_size`, `chromosome_length`, and `seed` are not
    /// used; the population and `rng` supply them.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] from
    ///   [`GaConfig::validate_for_population`], before anything is evaluated
    /// - any [`GaError`] from fitness evaluation or selection
    pub fn run_from<S: Symbol, R: Rng>(
        initial: Population<S>,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<S>, GaError> {
        config.validate_for_population(initial.size())?;

        log::info!(
            "GA start: population {}, length {}, kill {}, mutation rate {}",
            initial.size(),
            initial.chromosome_length(),
            config.kill_count,
            config.mutation_rate
        );

        let mut population = initial;
        population.evaluate_all(config.parallel)?;
        let mut best = population.max_fitness_chromosome()?.clone();
        let mut best_fitness = best.fitness()?;

        let mut history = Vec::new();
        let mut generation = 0;
        let mut reached_target = false;

        loop {
            let stats = population.statistics(generation)?;
            log::debug!(
                "generation {}: max {:.6} avg {:.6} min {:.6} var {:.6}",
                stats.generation,
                stats.max,
                stats.average,
                stats.min,
                stats.variance
            );
            history.push(stats);

            if stats.max > best_fitness {
                best = population.max_fitness_chromosome()?.clone();
                best_fitness = stats.max;
            }

            if config.stop_fitness.is_some_and(|target| stats.max >= target) {
                reached_target = true;
                break;
            }
            if generation >= config.max_generations {
                break;
            }

            population = population.next_generation(config.kill_count, config.mutation_rate, rng)?;
            population.evaluate_all(config.parallel)?;
            generation += 1;
        }

        if let (Some(target), false) = (config.stop_fitness, reached_target) {
            log::warn!(
                "GA stopped after {generation} generations without reaching {target} (best {best_fitness})"
            );
        }
        log::info!("GA done: {generation} generations, best fitness {best_fitness}");

        Ok(GaResult {
            best,
            best_fitness,
            generations: generation,
            reached_target,
            history,
            population,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
