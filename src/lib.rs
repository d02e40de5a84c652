//! Symbol-sequence genetic algorithm engine.
//!
//! Evolves a population of fixed-length symbol sequences toward maximizing
//! a user-supplied fitness function, using fitness-ranked elitism,
//! roulette-wheel parent selection, midpoint crossover, and point mutation
//! across discrete generations.
//!
//! The engine is inspectable by construction: every generation is an
//! immutable [`ga::Population`] value, every chromosome caches its own
//! fitness, and all randomness flows through a caller-supplied generator.
//!
//! ```
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use u_genetic::ga::{infallible, Alphabet, Population};
//!
//! // Maximized when the 8-bit sequence decodes to 2.
//! let fitness = Arc::new(infallible(|g: &[char]| {
//!     let x = g.iter().fold(0i64, |acc, &c| acc * 2 + i64::from(c == '1'));
//!     1.0 / (((2 - x) * (2 - x)) as f64 + 1.0)
//! }));
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut pop = Population::random(100, 8, &Alphabet::binary(), fitness, &mut rng).unwrap();
//! for _ in 0..200 {
//!     pop = pop.next_generation(10, 0.01, &mut rng).unwrap();
//! }
//! let best = pop.max_fitness_chromosome().unwrap();
//! assert!(best.fitness().unwrap() > 0.4);
//! ```

pub mod ga;
