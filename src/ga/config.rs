//! GA configuration.
//!
//! [`GaConfig`] holds the driver-level parameters of a run: how big the
//! population is, how long chromosomes are, how many generations to run,
//! and the replacement parameters passed to
//! [`Population::next_generation`](super::Population::next_generation).

use super::error::GaError;

/// Configuration for a [`GaRunner`](super::GaRunner) run.
///
/// # Defaults
///
/// ```
/// use u_genetic::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.kill_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_chromosome_length(60)
///     .with_kill_count(20)
///     .with_mutation_rate(0.02)
///     .with_stop_fitness(0.999)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](Self::validate) rather than clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Genes per chromosome.
    pub chromosome_length: usize,

    /// Maximum number of generation advances.
    pub max_generations: usize,

    /// Lowest-ranked chromosomes replaced each generation.
    ///
    /// The remaining `population_size - kill_count` survive unchanged.
    pub kill_count: usize,

    /// Per-locus mutation probability applied to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Stop as soon as the best fitness reaches this value.
    ///
    /// `None` runs all `max_generations`.
    pub stop_fitness: Option<f64>,

    /// Evaluate each generation on the rayon pool (`parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 8,
            max_generations: 1000,
            kill_count: 10,
            mutation_rate: 0.01,
            stop_fitness: None,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of chromosomes replaced per generation.
    pub fn with_kill_count(mut self, n: usize) -> Self {
        self.kill_count = n;
        self
    }

    /// Sets the per-locus mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the stopping fitness threshold.
    pub fn with_stop_fitness(mut self, fitness: f64) -> Self {
        self.stop_fitness = Some(fitness);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::Configuration`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::Configuration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::Configuration(
                "chromosome_length must be at least 1".into(),
            ));
        }
        self.validate_for_population(self.population_size)
    }

    /// Validates the replacement and stopping parameters against a
    /// population of `size` chromosomes.
    ///
    /// This is the part of [`validate`](Self::validate) that still applies
    /// when the population is supplied by the caller, as in
    /// [`GaRunner::run_from`](super::GaRunner::run_from).
    ///
    /// # Errors
    /// [`GaError::Configuration`] describing the first invalid parameter.
    pub fn validate_for_population(&self, size: usize) -> Result<(), GaError> {
        if self.kill_count > size {
            return Err(GaError::Configuration(format!(
                "kill_count {} exceeds population size {}",
                self.kill_count, size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let Some(stop) = self.stop_fitness {
            if stop.is_nan() {
                return Err(GaError::Configuration("stop_fitness must not be NaN".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.chromosome_length, 8);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.kill_count, 10);
        assert!((config.mutation_rate - 0.01).abs() < 1e-15);
        assert!(config.stop_fitness.is_none());
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_chromosome_length(60)
            .with_max_generations(20)
            .with_kill_count(5)
            .with_mutation_rate(0.3)
            .with_stop_fitness(12.0)
            .with_parallel(false)
            .with_seed(7);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.chromosome_length, 60);
        assert_eq!(config.max_generations, 20);
        assert_eq!(config.kill_count, 5);
        assert!((config.mutation_rate - 0.3).abs() < 1e-15);
        assert_eq!(config.stop_fitness, Some(12.0));
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_builders_do_not_clamp() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert_eq!(config.mutation_rate, 1.5);
        assert!(matches!(config.validate(), Err(GaError::Configuration(_))));
    }

    #[test]
    fn test_validate_errors() {
        let invalid = [
            GaConfig::default().with_population_size(0),
            GaConfig::default().with_chromosome_length(0),
            GaConfig::default().with_population_size(10).with_kill_count(11),
            GaConfig::default().with_mutation_rate(-0.01),
            GaConfig::default().with_mutation_rate(f64::NAN),
            GaConfig::default().with_stop_fitness(f64::NAN),
        ];
        for config in invalid {
            assert!(
                matches!(config.validate(), Err(GaError::Configuration(_))),
                "expected error for {config:?}"
            );
        }
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(GaConfig::default()
            .with_population_size(10)
            .with_kill_count(10)
            .validate()
            .is_ok());
        assert!(GaConfig::default().with_kill_count(0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_for_population() {
        let config = GaConfig::default().with_population_size(100).with_kill_count(50);
        assert!(config.validate_for_population(50).is_ok());
        assert!(matches!(
            config.validate_for_population(49),
            Err(GaError::Configuration(_))
        ));

        // Size and length are not its concern.
        let config = GaConfig::default()
            .with_population_size(0)
            .with_chromosome_length(0)
            .with_kill_count(5);
        assert!(config.validate_for_population(10).is_ok());
        assert!(matches!(
            config.with_mutation_rate(2.0).validate_for_population(10),
            Err(GaError::Configuration(_))
        ));
    }
}
