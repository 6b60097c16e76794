//! Generational loop for the genetic strategy.
//!
//! One generation: rank by conflicts → keep best half → breed children
//! from distinct survivor pairs → reject near-clones → mutate children
//! → periodic diversity injection → harvest canonical solutions →
//! early-stop / adaptive-pressure checks.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use super::config::GeneticConfig;
use super::operators::{similarity, single_point_crossover, swap_mutation};
use crate::board::{known_solution_count, random_permutation, Board};
use crate::metrics::MetricRecord;
use crate::random::create_rng_opt;
use crate::solver::{SolveReport, Solver};

/// A child this close to either parent (position-wise) is discarded
/// and replaced by a fresh random permutation.
const CLONE_SIMILARITY: f64 = 0.8;

/// Mutation-rate ceiling for adaptive pressure.
const MUTATION_RATE_CAP: f64 = 0.1;

/// Population-based evolutionary search over complete permutations.
pub struct GeneticSolver {
    n: usize,
    config: GeneticConfig,
}

impl GeneticSolver {
    /// Creates a solver with the default configuration.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, GeneticConfig::default())
    }

    pub fn with_config(n: usize, config: GeneticConfig) -> Self {
        Self { n, config }
    }
}

impl Solver for GeneticSolver {
    fn name(&self) -> &'static str {
        "Genetic"
    }

    /// Runs the evolutionary loop.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GeneticConfig::validate`] first to get a descriptive error).
    fn solve(&mut self) -> SolveReport {
        self.config.validate().expect("invalid GeneticConfig");

        let start = Instant::now();
        let mut rng = create_rng_opt(self.config.seed);
        let pop_size = self.config.population_size;
        let mut mutation_rate = self.config.mutation_rate;
        let expected = known_solution_count(self.n);

        let mut population: Vec<Board> = (0..pop_size)
            .map(|_| random_permutation(self.n, &mut rng))
            .collect();

        let mut seen: HashSet<Board> = HashSet::new();
        let mut solutions: Vec<Board> = Vec::new();
        let mut generations_run = 0usize;

        for generation in 0..self.config.generations {
            generations_run = generation + 1;

            // Rank by conflicts, keep the best half as survivors.
            population.sort_by_cached_key(Board::conflicts);
            population.truncate(pop_size / 2);
            let survivors = population.len();

            // Breed one child per survivor from distinct parent pairs.
            let mut children = Vec::with_capacity(survivors);
            for _ in 0..survivors {
                let a = rng.random_range(0..survivors);
                let mut b = rng.random_range(0..survivors);
                while b == a {
                    b = rng.random_range(0..survivors);
                }
                let child = single_point_crossover(&population[a], &population[b], &mut rng);

                // Reject-and-resample near-clones to preserve diversity.
                let child = if similarity(&child, &population[a]) >= CLONE_SIMILARITY
                    || similarity(&child, &population[b]) >= CLONE_SIMILARITY
                {
                    random_permutation(self.n, &mut rng)
                } else {
                    child
                };
                children.push(child);
            }

            // Mutation applies to the freshly bred half only.
            for child in &mut children {
                if rng.random_range(0.0..1.0) < mutation_rate {
                    swap_mutation(child, &mut rng);
                }
            }
            population.extend(children);

            // Diversity injection: 20% extra random boards every 10th
            // generation.
            if generation % 10 == 0 {
                for _ in 0..pop_size / 5 {
                    population.push(random_permutation(self.n, &mut rng));
                }
            }

            // Harvest zero-conflict individuals, deduplicated by
            // canonical form.
            for board in &population {
                if board.conflicts() == 0 {
                    let canon = board.canonical();
                    if seen.insert(canon.clone()) {
                        debug!(
                            "genetic n={}: solution {} at generation {}",
                            self.n,
                            solutions.len(),
                            generation
                        );
                        solutions.push(canon);
                    }
                }
            }

            if let Some(expected) = expected {
                if solutions.len() >= expected {
                    info!(
                        "genetic n={}: all {} expected solutions after {} generations",
                        self.n, expected, generations_run
                    );
                    break;
                }
                // Adaptive pressure: raise the mutation rate while
                // progress lags behind half the expected count.
                if generation % 100 == 0 && solutions.len() < expected / 2 {
                    let bumped = (mutation_rate * 1.5).min(MUTATION_RATE_CAP);
                    if bumped > mutation_rate {
                        debug!(
                            "genetic n={}: mutation rate {:.4} -> {:.4} at generation {}",
                            self.n, mutation_rate, bumped, generation
                        );
                        mutation_rate = bumped;
                    }
                }
            }
        }

        let record = MetricRecord::new(
            self.name(),
            start.elapsed(),
            solutions.len(),
            Some(generations_run),
        );
        SolveReport { solutions, record }
    }
}
