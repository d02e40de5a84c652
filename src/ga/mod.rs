//! Genetic Algorithm engine over fixed-length symbol sequences.
//!
//! Candidate solutions are [`Chromosome`]s: fixed-length sequences of
//! [`Gene`]s drawn from a finite [`Alphabet`] (e.g. `{'0', '1'}` or
//! `{'G', 'T', 'A', 'C'}`). A user-supplied [`FitnessFunction`] scores each
//! sequence; higher is better. Each chromosome evaluates it at most once.
//!
//! A [`Population`] advances one generation at a time with
//! [`Population::next_generation`]: rank by fitness, keep the elite prefix,
//! and replace the rest with mutated midpoint-crossover offspring of
//! roulette-selected elites. Generations are immutable values.
//!
//! # Key Types
//!
//! - [`Chromosome`]: gene sequence with cached fitness, mutation, crossover
//! - [`Population`]: ranking, statistics, generational replacement
//! - [`GaConfig`]: driver parameters (sizes, kill count, rates, stopping)
//! - [`GaRunner`]: runs the generational loop, recording [`GenerationStats`]
//! - [`GaError`] / [`FitnessError`]: error taxonomy
//!
//! # Submodules
//!
//! - [`operators`]: slice-level midpoint crossover and point mutation
//! - [`selection`]: roulette-wheel selection with a zero-fitness fallback
//!
//! # Randomness
//!
//! Every random operation takes an explicit `&mut impl Rng`. Seeded runs
//! (see [`create_rng`]) are reproducible.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use chromosome::Chromosome;
pub use config::GaConfig;
pub use error::{FitnessError, GaError};
pub use fitness::{infallible, FitnessFunction, Infallible, MemoizedFitness, SharedFitness};
pub use population::Population;
pub use runner::{create_rng, GaResult, GaRunner, GenerationStats};
pub use types::{Alphabet, Gene, Symbol};
