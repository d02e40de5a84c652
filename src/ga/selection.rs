//! Fitness-proportionate parent selection.
//!
//! Parents are drawn from the ranked elite slice with a roulette wheel:
//! each candidate owns a half-open interval of the wheel whose width is its
//! fitness, and a point drawn uniformly in `[0, total)` picks the first
//! candidate, in rank order, whose interval contains it.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::error::GaError;
use rand::Rng;

/// Roulette-wheel selection over `weights` (maximization).
///
/// Returns the index of the selected candidate. Candidates with zero weight
/// own an empty interval and are never selected, unless every weight is
/// zero: then the wheel is degenerate and the draw falls back to a uniform
/// choice over the whole slice.
///
/// Weights are normalized by the largest weight before summing, so large
/// fitness values cannot overflow the running total.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] if `weights` is empty
/// - [`GaError::InvalidFitness`] if a weight is negative or NaN
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> Result<usize, GaError> {
    if weights.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| w.is_nan() || **w < 0.0)
    {
        return Err(GaError::InvalidFitness { index, value });
    }

    let n = weights.len();
    let max = weights.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        log::debug!("roulette: total fitness of {n} candidates is zero, selecting uniformly");
        return Ok(rng.random_range(0..n));
    }

    let total: f64 = weights.iter().map(|w| w / max).sum();
    let point = rng.random_range(0.0..total);

    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        let w = w / max;
        if w > 0.0 {
            if point < cumulative + w {
                return Ok(i);
            }
            last_positive = i;
        }
        cumulative += w;
    }

    // Rounding can leave `point` just past the last boundary.
    Ok(last_positive)
}

/// Two independent roulette draws from the same wheel.
pub fn roulette_pair<R: Rng>(weights: &[f64], rng: &mut R) -> Result<(usize, usize), GaError> {
    let first = roulette(weights, rng)?;
    let second = roulette(weights, rng)?;
    Ok((first, second))
}
