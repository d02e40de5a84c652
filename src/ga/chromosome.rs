//! Chromosome: a fixed-length gene sequence with a memoized fitness.

use super::error::{FitnessError, GaError};
use super::fitness::SharedFitness;
use super::operators::{midpoint_crossover, point_mutation};
use super::types::{Alphabet, Gene, Symbol};
use rand::Rng;
use std::fmt;
use std::sync::OnceLock;

/// One candidate solution.
///
/// A chromosome is immutable: [`mutation`](Self::mutation) and
/// [`crossover`](Self::crossover) return new chromosomes. Its fitness is
/// computed on first request and cached for the lifetime of the instance,
/// so the fitness function runs at most once per chromosome no matter how
/// often rankings and statistics ask for it.
///
/// Clones carry the cached value along with the genes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_genetic::ga::{infallible, Alphabet, Chromosome};
///
/// let ones = Arc::new(infallible(|g: &[char]| g.iter().filter(|&&c| c == '1').count() as f64));
/// let c = Chromosome::from_symbols(4, "1011".chars().collect(), &Alphabet::binary(), ones).unwrap();
/// assert_eq!(c.fitness().unwrap(), 3.0);
/// assert_eq!(c.to_string(), "chromosome[4]:1011");
/// ```
#[derive(Clone)]
pub struct Chromosome<S: Symbol> {
    genes: Vec<Gene<S>>,
    alphabet: Alphabet<S>,
    fitness_fn: SharedFitness<S>,
    fitness: OnceLock<f64>,
}

impl<S: Symbol> Chromosome<S> {
    /// Creates a chromosome of `length` genes, each drawn uniformly from
    /// `alphabet`.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if `length` is zero.
    pub fn random<R: Rng>(
        length: usize,
        alphabet: &Alphabet<S>,
        fitness_fn: SharedFitness<S>,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if length == 0 {
            return Err(GaError::Configuration(
                "chromosome length must be positive".into(),
            ));
        }
        let genes = (0..length)
            .map(|_| Gene::new(alphabet.sample(rng).clone()))
            .collect();
        Ok(Self::assemble(genes, alphabet.clone(), fitness_fn))
    }

    /// Creates a chromosome from an explicit symbol sequence.
    ///
    /// # Errors
    /// - [`GaError::LengthMismatch`] if `symbols.len() != length`
    /// - [`GaError::Configuration`] if `length` is zero
    /// - [`GaError::SymbolNotInAlphabet`] if a symbol is not in `alphabet`
    pub fn from_symbols(
        length: usize,
        symbols: Vec<S>,
        alphabet: &Alphabet<S>,
        fitness_fn: SharedFitness<S>,
    ) -> Result<Self, GaError> {
        Self::from_genes(
            length,
            symbols.into_iter().map(Gene::new).collect(),
            alphabet,
            fitness_fn,
        )
    }

    /// Creates a chromosome from explicit genes. Same checks as
    /// [`from_symbols`](Self::from_symbols).
    pub fn from_genes(
        length: usize,
        genes: Vec<Gene<S>>,
        alphabet: &Alphabet<S>,
        fitness_fn: SharedFitness<S>,
    ) -> Result<Self, GaError> {
        if length == 0 {
            return Err(GaError::Configuration(
                "chromosome length must be positive".into(),
            ));
        }
        if genes.len() != length {
            return Err(GaError::LengthMismatch {
                expected: length,
                actual: genes.len(),
            });
        }
        if let Some(index) = genes.iter().position(|g| !alphabet.contains(g.symbol())) {
            return Err(GaError::SymbolNotInAlphabet { index });
        }
        Ok(Self::assemble(genes, alphabet.clone(), fitness_fn))
    }

    fn assemble(genes: Vec<Gene<S>>, alphabet: Alphabet<S>, fitness_fn: SharedFitness<S>) -> Self {
        Self {
            genes,
            alphabet,
            fitness_fn,
            fitness: OnceLock::new(),
        }
    }

    /// Offspring sharing this chromosome's alphabet and fitness function.
    fn offspring(&self, genes: Vec<Gene<S>>) -> Self {
        Self::assemble(genes, self.alphabet.clone(), self.fitness_fn.clone())
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`; chromosomes have at least one gene.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The allowed gene types used for random draws and mutation.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// All genes in order.
    pub fn genes(&self) -> &[Gene<S>] {
        &self.genes
    }

    /// The decoded symbol sequence.
    pub fn symbols(&self) -> Vec<S> {
        self.genes.iter().map(|g| g.symbol().clone()).collect()
    }

    /// Gene at a 0-based `index`.
    ///
    /// # Errors
    /// [`GaError::IndexOutOfRange`] if `index >= len()`.
    pub fn gene_at(&self, index: usize) -> Result<&Gene<S>, GaError> {
        self.genes.get(index).ok_or(GaError::IndexOutOfRange {
            index,
            len: self.genes.len(),
        })
    }

    /// The shared fitness function.
    pub fn fitness_fn(&self) -> &SharedFitness<S> {
        &self.fitness_fn
    }

    /// Fitness if it has already been computed.
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness.get().copied()
    }

    /// Fitness of this chromosome, evaluated on first call and cached.
    ///
    /// # Errors
    /// - [`GaError::Fitness`] carrying the fitness function's own error
    /// - [`GaError::Fitness`] with [`FitnessError::NonFinite`] if the
    ///   function returned NaN or an infinity
    ///
    /// Failures are not cached; a later call evaluates again.
    pub fn fitness(&self) -> Result<f64, GaError> {
        if let Some(&f) = self.fitness.get() {
            return Ok(f);
        }
        let value = self.fitness_fn.evaluate(&self.symbols())?;
        if !value.is_finite() {
            return Err(FitnessError::NonFinite(value).into());
        }
        Ok(*self.fitness.get_or_init(|| value))
    }

    /// Returns a mutated copy.
    ///
    /// Each locus independently, with probability `rate`, is replaced by a
    /// different symbol from the alphabet. `mutation(0.0)` yields an equal
    /// but distinct chromosome.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if `rate` is outside `[0, 1]`.
    pub fn mutation<R: Rng>(&self, rate: f64, rng: &mut R) -> Result<Self, GaError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GaError::Configuration(format!(
                "mutation rate must be in [0, 1], got {rate}"
            )));
        }
        Ok(self.offspring(point_mutation(&self.genes, &self.alphabet, rate, rng)))
    }

    /// Midpoint crossover with `other`.
    ///
    /// A coin flip picks the leading parent, which contributes loci
    /// `[0, len / 2]`; the other parent contributes the remainder.
    ///
    /// # Errors
    /// - [`GaError::LengthMismatch`] if lengths differ
    /// - [`GaError::AlphabetMismatch`] if alphabets differ
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self, GaError> {
        if self.len() != other.len() {
            return Err(GaError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        if self.alphabet != other.alphabet {
            return Err(GaError::AlphabetMismatch);
        }
        Ok(self.offspring(midpoint_crossover(&self.genes, &other.genes, rng)))
    }
}

impl<S: Symbol> PartialEq for Chromosome<S> {
    /// Chromosomes are equal when their gene sequences are equal.
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl<S: Symbol> fmt::Debug for Chromosome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genes", &self.symbols())
            .field("fitness", &self.fitness.get())
            .finish()
    }
}

impl<S: Symbol + fmt::Display> fmt::Display for Chromosome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chromosome[{}]:", self.genes.len())?;
        for gene in &self.genes {
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}
