//! Property-based tests for u-genetic.
//!
//! Uses proptest to verify the engine's invariants over random alphabets,
//! lengths, rates, and seeds.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use u_genetic::ga::selection::roulette;
use u_genetic::ga::{infallible, Alphabet, Chromosome, Population, SharedFitness};

const SYMBOLS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

fn alphabet(size: usize) -> Alphabet<char> {
    Alphabet::new(SYMBOLS[..size].to_vec()).unwrap()
}

/// Weighted symbol sum; distinct symbols score differently.
fn weighted() -> SharedFitness<char> {
    Arc::new(infallible(|g: &[char]| {
        g.iter()
            .enumerate()
            .map(|(i, &c)| ((c as u32 - 'A' as u32) as f64) * (1.0 + i as f64 * 0.1))
            .sum()
    }))
}

proptest! {
    // ==================== Chromosome Properties ====================

    #[test]
    fn random_genes_belong_to_alphabet(size in 1usize..=6, len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = alphabet(size);
        let c = Chromosome::random(len, &a, weighted(), &mut rng).unwrap();
        prop_assert_eq!(c.len(), len);
        for g in c.genes() {
            prop_assert!(a.contains(g.symbol()));
        }
    }

    #[test]
    fn fitness_is_cached(len in 1usize..32, seed in any::<u64>()) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let f: SharedFitness<char> = Arc::new(infallible(move |g: &[char]| {
            counter.fetch_add(1, Ordering::SeqCst);
            g.iter().map(|&c| c as u32 as f64).sum::<f64>().sqrt()
        }));
        let mut rng = StdRng::seed_from_u64(seed);
        let c = Chromosome::random(len, &alphabet(4), f, &mut rng).unwrap();

        let first = c.fitness().unwrap();
        let second = c.fitness().unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mutation_zero_is_identity(size in 1usize..=6, len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = Chromosome::random(len, &alphabet(size), weighted(), &mut rng).unwrap();
        let m = c.mutation(0.0, &mut rng).unwrap();
        prop_assert_eq!(m.genes(), c.genes());
    }

    #[test]
    fn mutation_one_changes_every_locus(size in 2usize..=6, len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = alphabet(size);
        let c = Chromosome::random(len, &a, weighted(), &mut rng).unwrap();
        let m = c.mutation(1.0, &mut rng).unwrap();
        prop_assert_eq!(m.len(), c.len());
        for (x, y) in m.genes().iter().zip(c.genes()) {
            prop_assert_ne!(x, y);
            prop_assert!(a.contains(x.symbol()));
        }
    }

    #[test]
    fn mutation_keeps_alphabet(rate in 0.0f64..=1.0, len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = alphabet(4);
        let c = Chromosome::random(len, &a, weighted(), &mut rng).unwrap();
        let m = c.mutation(rate, &mut rng).unwrap();
        prop_assert_eq!(m.len(), len);
        for g in m.genes() {
            prop_assert!(a.contains(g.symbol()));
        }
    }

    #[test]
    fn crossover_takes_each_locus_from_a_parent(len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = alphabet(4);
        let p1 = Chromosome::random(len, &a, weighted(), &mut rng).unwrap();
        let p2 = Chromosome::random(len, &a, weighted(), &mut rng).unwrap();
        let child = p1.crossover(&p2, &mut rng).unwrap();

        prop_assert_eq!(child.len(), len);
        for i in 0..len {
            let g = child.gene_at(i).unwrap();
            prop_assert!(g == p1.gene_at(i).unwrap() || g == p2.gene_at(i).unwrap());
        }
    }

    #[test]
    fn crossover_is_a_single_midpoint_splice(len in 1usize..64, seed in any::<u64>()) {
        // Parents that differ at every locus reveal which parent led.
        let a = alphabet(2);
        let p1 = Chromosome::from_symbols(len, vec!['A'; len], &a, weighted()).unwrap();
        let p2 = Chromosome::from_symbols(len, vec!['B'; len], &a, weighted()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let child = p1.crossover(&p2, &mut rng).unwrap().symbols();

        let lead = child[0];
        let trail = if lead == 'A' { 'B' } else { 'A' };
        for (i, &s) in child.iter().enumerate() {
            prop_assert_eq!(s, if i <= len / 2 { lead } else { trail });
        }
    }

    // ==================== Population Properties ====================

    #[test]
    fn kill_zero_only_reorders(size in 1usize..40, len in 1usize..16, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pop = Population::random(size, len, &alphabet(3), weighted(), &mut rng).unwrap();
        let next = pop.next_generation(0, 0.5, &mut rng).unwrap();

        prop_assert_eq!(next.size(), size);
        let fitness = next.fitness_values().unwrap();
        for w in fitness.windows(2) {
            prop_assert!(w[0] >= w[1]);
        }

        let mut before: Vec<Vec<char>> = pop.chromosomes().iter().map(|c| c.symbols()).collect();
        let mut after: Vec<Vec<char>> = next.chromosomes().iter().map(|c| c.symbols()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn top_survivor_dominates(size in 2usize..40, kill_frac in 0.0f64..1.0, seed in any::<u64>()) {
        let kill = ((size as f64) * kill_frac) as usize;
        prop_assume!(kill < size);
        let mut rng = StdRng::seed_from_u64(seed);
        let pop = Population::random(size, 8, &alphabet(4), weighted(), &mut rng).unwrap();
        let best_before = pop.max_fitness_chromosome().unwrap().fitness().unwrap();

        let next = pop.next_generation(kill, 0.05, &mut rng).unwrap();
        let top = next.chromosomes()[0].fitness().unwrap();
        prop_assert_eq!(top, best_before);
        for c in &next.chromosomes()[..size - kill] {
            prop_assert!(top >= c.fitness().unwrap());
        }
        prop_assert!(next.max_fitness_chromosome().unwrap().fitness().unwrap() >= best_before);
    }

    #[test]
    fn kill_all_keeps_size(size in 1usize..40, rate in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pop = Population::random(size, 6, &alphabet(4), weighted(), &mut rng).unwrap();
        let next = pop.next_generation(size, rate, &mut rng).unwrap();
        prop_assert_eq!(next.size(), size);
        prop_assert_eq!(next.chromosome_length(), 6);
        prop_assert_eq!(next.alphabet(), pop.alphabet());
    }

    #[test]
    fn variance_is_non_negative(size in 1usize..60, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pop = Population::random(size, 10, &alphabet(5), weighted(), &mut rng).unwrap();
        prop_assert!(pop.variance_fitness().unwrap() >= 0.0);

        let min = pop.min_fitness_chromosome().unwrap().fitness().unwrap();
        let max = pop.max_fitness_chromosome().unwrap().fitness().unwrap();
        let avg = pop.average_fitness().unwrap();
        prop_assert!(min <= avg + 1e-9 && avg <= max + 1e-9);
    }

    // ==================== Selection Properties ====================

    #[test]
    fn roulette_zero_total_selects_valid_index(n in 1usize..50, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = vec![0.0; n];
        let idx = roulette(&weights, &mut rng).unwrap();
        prop_assert!(idx < n);
    }

    #[test]
    fn roulette_never_picks_zero_weight(
        weights in prop::collection::vec(prop_oneof![Just(0.0), 0.1f64..100.0], 1..30),
        seed in any::<u64>()
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0.0));
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 {
            let idx = roulette(&weights, &mut rng).unwrap();
            prop_assert!(weights[idx] > 0.0);
        }
    }
}
