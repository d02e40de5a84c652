//! Error types for the GA engine.
//!
//! Every public operation either succeeds completely or returns one of
//! these errors; nothing is clamped or replaced by a default value.

use thiserror::Error;

/// Error raised by a user-supplied fitness function.
///
/// Fitness functions return this type so that the engine can carry their
/// failures to the caller of [`Chromosome::fitness`](super::Chromosome::fitness)
/// and every ranking or statistics operation built on it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitnessError {
    /// The chromosome length does not match what the function decodes.
    #[error("fitness function expects {expected} genes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The function produced NaN or an infinite value.
    #[error("fitness value is not finite: {0}")]
    NonFinite(f64),

    /// Any other domain failure inside the function.
    #[error("fitness evaluation failed: {0}")]
    Evaluation(String),
}

impl FitnessError {
    /// Returns `Err(LengthMismatch)` unless `actual == expected`.
    ///
    /// Convenience guard for fitness functions that decode a fixed number
    /// of genes.
    pub fn check_length(expected: usize, actual: usize) -> Result<(), FitnessError> {
        if expected == actual {
            Ok(())
        } else {
            Err(FitnessError::LengthMismatch { expected, actual })
        }
    }
}

/// Top-level error type for chromosome and population operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Invalid size, length, alphabet, probability, or kill count.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Gene index outside `[0, len)`.
    #[error("gene index {index} out of range for chromosome of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Two chromosomes (or a chromosome and its source sequence) disagree on length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Two chromosomes were built from different alphabets.
    #[error("chromosomes use incompatible alphabets")]
    AlphabetMismatch,

    /// Chromosomes of one population score with different fitness functions.
    #[error("chromosomes use different fitness functions")]
    FitnessFunctionMismatch,

    /// A gene symbol is not a member of the chromosome's alphabet.
    #[error("symbol at index {index} is not in the alphabet")]
    SymbolNotInAlphabet { index: usize },

    /// Propagated unchanged from the fitness function.
    #[error(transparent)]
    Fitness(#[from] FitnessError),

    /// Roulette-wheel weights must be non-negative.
    #[error("chromosome at rank {index} has negative fitness {value}; roulette selection needs non-negative weights")]
    InvalidFitness { index: usize, value: f64 },

    /// A population was adopted from an empty chromosome list.
    #[error("population must contain at least one chromosome")]
    EmptyPopulation,
}
