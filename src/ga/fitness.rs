//! Fitness function abstraction.
//!
//! The engine maximizes a user-supplied [`FitnessFunction`]: a deterministic,
//! pure mapping from a gene sequence to a real score. Higher is better.
//!
//! Any closure `Fn(&[S]) -> Result<f64, FitnessError>` is a fitness
//! function. Infallible closures are adapted with [`infallible`].
//!
//! ```
//! use u_genetic::ga::{infallible, FitnessFunction};
//!
//! let ones = infallible(|genes: &[char]| genes.iter().filter(|&&g| g == '1').count() as f64);
//! assert_eq!(ones.evaluate(&['1', '0', '1']).unwrap(), 2.0);
//! ```

use super::error::FitnessError;
use super::types::Symbol;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A pure function scoring a gene sequence.
///
/// # Thread Safety
///
/// `Send + Sync` because chromosomes share one fitness function and may be
/// evaluated in parallel.
pub trait FitnessFunction<S>: Send + Sync {
    /// Scores `genes`. Higher fitness is better (maximization).
    ///
    /// Must be deterministic: the engine evaluates each chromosome at most
    /// once and caches the result.
    fn evaluate(&self, genes: &[S]) -> Result<f64, FitnessError>;
}

/// A fitness function shared by every chromosome of a run.
pub type SharedFitness<S> = Arc<dyn FitnessFunction<S>>;

impl<S, F> FitnessFunction<S> for F
where
    F: Fn(&[S]) -> Result<f64, FitnessError> + Send + Sync,
{
    fn evaluate(&self, genes: &[S]) -> Result<f64, FitnessError> {
        self(genes)
    }
}

/// Adapter for closures that cannot fail. See [`infallible`].
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(pub F);

impl<S, F> FitnessFunction<S> for Infallible<F>
where
    F: Fn(&[S]) -> f64 + Send + Sync,
{
    fn evaluate(&self, genes: &[S]) -> Result<f64, FitnessError> {
        Ok((self.0)(genes))
    }
}

/// Wraps an infallible scoring closure as a [`FitnessFunction`].
pub fn infallible<S, F>(f: F) -> Infallible<F>
where
    F: Fn(&[S]) -> f64 + Send + Sync,
{
    Infallible(f)
}

/// Sequence-keyed cache in front of another fitness function.
///
/// Chromosomes cache their own fitness, but offspring often reproduce a
/// sequence that was already scored in an earlier generation. This wrapper
/// remembers every successful evaluation by gene sequence so the inner
/// function is called once per distinct sequence for the whole run.
///
/// Failed evaluations are not cached.
pub struct MemoizedFitness<S, F> {
    inner: F,
    cache: Mutex<HashMap<Vec<S>, f64>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<S, F> MemoizedFitness<S, F>
where
    S: Symbol + Eq + Hash,
    F: FitnessFunction<S>,
{
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that reached the inner function.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Fraction of lookups answered from the cache; `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Number of distinct sequences cached.
    pub fn cached_len(&self) -> usize {
        self.cache().len()
    }

    // Entries are inserted whole; a poisoned map is still consistent.
    fn cache(&self) -> MutexGuard<'_, HashMap<Vec<S>, f64>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S, F> FitnessFunction<S> for MemoizedFitness<S, F>
where
    S: Symbol + Eq + Hash,
    F: FitnessFunction<S>,
{
    fn evaluate(&self, genes: &[S]) -> Result<f64, FitnessError> {
        if let Some(&v) = self.cache().get(genes) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(v);
        }

        // Evaluate outside the lock so parallel workers do not serialize.
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = self.inner.evaluate(genes)?;
        self.cache().insert(genes.to_vec(), value);
        Ok(value)
    }
}
