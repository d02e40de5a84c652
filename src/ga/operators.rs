//! Gene-sequence crossover and mutation operators.
//!
//! These operate on plain gene slices and never touch their inputs; the
//! [`Chromosome`](super::Chromosome) methods wrap them with argument checks
//! and rebuild a chromosome around the result.
//!
//! # Crossover
//!
//! - [`midpoint_crossover`]: fixed midpoint splice with a random parent order
//!
//! # Mutation
//!
//! - [`point_mutation`]: per-locus forced change to a different symbol
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Alphabet, Gene, Symbol};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Index of the last locus taken from the leading parent.
///
/// For a sequence of length `n` the leading parent contributes
/// `[0, n / 2]` inclusive and the trailing parent `(n / 2, n)`.
pub fn midpoint(len: usize) -> usize {
    len / 2
}

/// Midpoint crossover.
///
/// A fair coin decides which parent leads. The leading parent contributes
/// loci `[0, midpoint(n)]`, the other parent the rest. Every locus of the
/// child therefore equals the same locus of one of the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn midpoint_crossover<S: Symbol, R: Rng>(
    parent1: &[Gene<S>],
    parent2: &[Gene<S>],
    rng: &mut R,
) -> Vec<Gene<S>> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let (lead, trail) = if rng.random_bool(0.5) {
        (parent1, parent2)
    } else {
        (parent2, parent1)
    };
    splice(lead, trail, midpoint(n))
}

/// Child made of `lead[..=cut]` followed by `trail[cut + 1..]`.
fn splice<S: Clone>(lead: &[Gene<S>], trail: &[Gene<S>], cut: usize) -> Vec<Gene<S>> {
    let n = lead.len();
    let head = (cut + 1).min(n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&lead[..head]);
    child.extend_from_slice(&trail[head..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Point mutation with forced change.
///
/// Each locus independently, with probability `rate`, is replaced by a
/// symbol drawn uniformly from `alphabet` minus the current symbol;
/// otherwise it is copied unchanged. A single-symbol alphabet has nothing to
/// change to, so such loci stay as they are.
///
/// # Complexity
/// O(n · |alphabet|)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn point_mutation<S: Symbol, R: Rng>(
    genes: &[Gene<S>],
    alphabet: &Alphabet<S>,
    rate: f64,
    rng: &mut R,
) -> Vec<Gene<S>> {
    genes
        .iter()
        .map(|gene| {
            if rng.random_bool(rate) {
                if let Some(s) = alphabet.sample_excluding(gene.symbol(), rng) {
                    return Gene::new(s.clone());
                }
            }
            gene.clone()
        })
        .collect()
}
