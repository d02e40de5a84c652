//! Population container and generational replacement.
//!
//! A [`Population`] is an immutable generation. [`next_generation`] ranks
//! it by fitness, keeps the best `size - kill_count` chromosomes unchanged
//! (elitism), and fills the remaining slots with mutated offspring of
//! roulette-selected elite parents. The result is a new population; the
//! old one stays valid.
//!
//! [`next_generation`]: Population::next_generation

use super::chromosome::Chromosome;
use super::error::GaError;
use super::fitness::SharedFitness;
use super::runner::GenerationStats;
use super::selection::roulette_pair;
use super::types::{Alphabet, Symbol};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// An ordered collection of chromosomes sharing one length and alphabet.
#[derive(Debug, Clone)]
pub struct Population<S: Symbol> {
    chromosomes: Vec<Chromosome<S>>,
}

impl<S: Symbol> Population<S> {
    /// Creates `size` random chromosomes of `length` genes.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if `size` or `length` is zero.
    pub fn random<R: Rng>(
        size: usize,
        length: usize,
        alphabet: &Alphabet<S>,
        fitness_fn: SharedFitness<S>,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::Configuration(
                "population size must be positive".into(),
            ));
        }
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(length, alphabet, fitness_fn.clone(), rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { chromosomes })
    }

    /// Adopts an explicit chromosome list, keeping its order.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `chromosomes` is empty
    /// - [`GaError::LengthMismatch`] / [`GaError::AlphabetMismatch`] if any
    ///   chromosome disagrees with the first
    /// - [`GaError::FitnessFunctionMismatch`] if any chromosome holds a
    ///   different [`SharedFitness`] instance than the first
    pub fn from_chromosomes(chromosomes: Vec<Chromosome<S>>) -> Result<Self, GaError> {
        let first = chromosomes.first().ok_or(GaError::EmptyPopulation)?;
        for c in &chromosomes[1..] {
            if c.len() != first.len() {
                return Err(GaError::LengthMismatch {
                    expected: first.len(),
                    actual: c.len(),
                });
            }
            if c.alphabet() != first.alphabet() {
                return Err(GaError::AlphabetMismatch);
            }
            if !Arc::ptr_eq(c.fitness_fn(), first.fitness_fn()) {
                return Err(GaError::FitnessFunctionMismatch);
            }
        }
        Ok(Self { chromosomes })
    }

    /// Number of chromosomes.
    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    /// Chromosomes in population order.
    pub fn chromosomes(&self) -> &[Chromosome<S>] {
        &self.chromosomes
    }

    /// Consumes the population, returning its chromosomes.
    pub fn into_chromosomes(self) -> Vec<Chromosome<S>> {
        self.chromosomes
    }

    /// Gene count shared by every chromosome.
    pub fn chromosome_length(&self) -> usize {
        self.chromosomes[0].len()
    }

    /// Alphabet shared by every chromosome.
    pub fn alphabet(&self) -> &Alphabet<S> {
        self.chromosomes[0].alphabet()
    }

    /// Evaluates every chromosome, filling each fitness cache.
    ///
    /// With the `parallel` feature and `parallel == true`, chromosomes are
    /// evaluated on the rayon pool; each cache is written by exactly one
    /// worker. Otherwise evaluation is sequential.
    pub fn evaluate_all(&self, parallel: bool) -> Result<(), GaError> {
        if parallel {
            evaluate_parallel(&self.chromosomes)
        } else {
            evaluate_sequential(&self.chromosomes)
        }
    }

    /// Fitness of every chromosome, in population order.
    pub fn fitness_values(&self) -> Result<Vec<f64>, GaError> {
        self.chromosomes.iter().map(Chromosome::fitness).collect()
    }

    /// The chromosome with the highest fitness; ties go to the lowest index.
    pub fn max_fitness_chromosome(&self) -> Result<&Chromosome<S>, GaError> {
        self.extreme_by(|candidate, best| candidate > best)
    }

    /// The chromosome with the lowest fitness; ties go to the lowest index.
    pub fn min_fitness_chromosome(&self) -> Result<&Chromosome<S>, GaError> {
        self.extreme_by(|candidate, best| candidate < best)
    }

    fn extreme_by(&self, better: impl Fn(f64, f64) -> bool) -> Result<&Chromosome<S>, GaError> {
        let mut best = 0;
        let mut best_fitness = self.chromosomes[0].fitness()?;
        for (i, c) in self.chromosomes.iter().enumerate().skip(1) {
            let f = c.fitness()?;
            if better(f, best_fitness) {
                best = i;
                best_fitness = f;
            }
        }
        Ok(&self.chromosomes[best])
    }

    /// Arithmetic mean of all fitness values.
    pub fn average_fitness(&self) -> Result<f64, GaError> {
        Ok(mean(&self.fitness_values()?))
    }

    /// Population variance (divides by N) of the fitness values.
    pub fn variance_fitness(&self) -> Result<f64, GaError> {
        Ok(variance(&self.fitness_values()?))
    }

    /// Max / average / min / variance snapshot, tagged with `generation`.
    pub fn statistics(&self, generation: usize) -> Result<GenerationStats, GaError> {
        let values = self.fitness_values()?;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        Ok(GenerationStats {
            generation,
            max,
            average: mean(&values),
            min,
            variance: variance(&values),
        })
    }

    /// Produces the next generation.
    ///
    /// 1. Ranks a copy of the chromosome list by fitness, descending. The
    ///    sort is stable, so equal fitness keeps the current order.
    /// 2. Keeps ranks `[0, size - kill_count)` unchanged.
    /// 3. Fills each of the `kill_count` remaining slots with
    ///    `crossover(a, b).mutation(mutation_rate)`, where `a` and `b` are two
    ///    independent roulette draws from the kept slice. When
    ///    `kill_count == size` nothing is kept and parents are drawn from
    ///    the whole ranked generation instead.
    ///
    /// `self` is left untouched apart from its fitness caches.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] if `kill_count > size` or
    ///   `mutation_rate` is outside `[0, 1]`
    /// - [`GaError::Fitness`] if any chromosome fails to evaluate
    /// - [`GaError::InvalidFitness`] if a parent candidate has negative fitness
    pub fn next_generation<R: Rng>(
        &self,
        kill_count: usize,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        let size = self.size();
        if kill_count > size {
            return Err(GaError::Configuration(format!(
                "kill count {kill_count} exceeds population size {size}"
            )));
        }
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(GaError::Configuration(format!(
                "mutation rate must be in [0, 1], got {mutation_rate}"
            )));
        }

        let fitness = self.fitness_values()?;
        let mut ranking: Vec<usize> = (0..size).collect();
        ranking.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

        let keep = size - kill_count;
        let parent_pool = if keep == 0 { &ranking[..] } else { &ranking[..keep] };
        let weights: Vec<f64> = parent_pool.iter().map(|&i| fitness[i]).collect();

        let mut next = Vec::with_capacity(size);
        next.extend(ranking[..keep].iter().map(|&i| self.chromosomes[i].clone()));

        for slot in keep..size {
            let (a, b) = roulette_pair(&weights, rng)?;
            let (p1, p2) = (
                &self.chromosomes[parent_pool[a]],
                &self.chromosomes[parent_pool[b]],
            );
            let child = p1.crossover(p2, rng)?.mutation(mutation_rate, rng)?;
            log::trace!("slot {slot}: parents at ranks {a} and {b}");
            next.push(child);
        }

        Ok(Self { chromosomes: next })
    }
}

fn evaluate_sequential<S: Symbol>(chromosomes: &[Chromosome<S>]) -> Result<(), GaError> {
    chromosomes.iter().try_for_each(|c| c.fitness().map(|_| ()))
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<S: Symbol>(chromosomes: &[Chromosome<S>]) -> Result<(), GaError> {
    use rayon::prelude::*;
    chromosomes
        .par_iter()
        .try_for_each(|c| c.fitness().map(|_| ()))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<S: Symbol>(chromosomes: &[Chromosome<S>]) -> Result<(), GaError> {
    evaluate_sequential(chromosomes)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

impl<S: Symbol + fmt::Display> fmt::Display for Population<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "population[{}]:", self.chromosomes.len())?;
        for (i, c) in self.chromosomes.iter().enumerate() {
            writeln!(f, "[{i}]{c}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
