//! Q-learning episode loop.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;

use super::config::RlConfig;
use crate::board::Board;
use crate::metrics::MetricRecord;
use crate::random::create_rng_opt;
use crate::solver::{SolveReport, Solver};

/// Tabular action-value learner over sentinel board states.
pub struct ReinforcementSolver {
    n: usize,
    config: RlConfig,
}

impl ReinforcementSolver {
    /// Creates a solver with the default configuration.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, RlConfig::default())
    }

    pub fn with_config(n: usize, config: RlConfig) -> Self {
        Self { n, config }
    }

    /// Greedy action for `state`: the column with the highest
    /// action-value, ties broken by the first maximum. States absent
    /// from the table read as zero vectors.
    fn best_action(table: &HashMap<Board, Vec<f64>>, state: &Board, n: usize) -> usize {
        let Some(values) = table.get(state) else {
            return 0;
        };
        let mut best = 0;
        for (action, &value) in values.iter().enumerate().take(n) {
            if value > values[best] {
                best = action;
            }
        }
        best
    }

    /// Best next action-value, zero for unseen states.
    fn best_value(table: &HashMap<Board, Vec<f64>>, state: &Board) -> f64 {
        table
            .get(state)
            .map(|values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }
}

impl Solver for ReinforcementSolver {
    fn name(&self) -> &'static str {
        "Reinforcement Learning"
    }

    /// Runs the configured episode budget.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`RlConfig::validate`] first to get a descriptive error).
    fn solve(&mut self) -> SolveReport {
        self.config.validate().expect("invalid RlConfig");

        let start = Instant::now();
        let n = self.n;
        let mut rng = create_rng_opt(self.config.seed);
        let mut table: HashMap<Board, Vec<f64>> = HashMap::new();

        if self.config.seed_full_table {
            // The full permutation state space, as the table's stated
            // domain. O(N!) entries; anything past small boards is
            // better served by lazy defaults alone.
            if n > 8 {
                warn!("rl n={n}: pre-seeding {n}! table entries, this will be slow");
            }
            for perm in (0..n).permutations(n) {
                table.insert(Board::from_permutation(&perm), vec![0.0; n]);
            }
        }

        let mut recorded: HashSet<Board> = HashSet::new();
        let mut solutions: Vec<Board> = Vec::new();

        for episode in 0..self.config.episodes {
            let mut state = Board::empty(n);

            while let Some(row) = state.first_unplaced() {
                let action = if rng.random_range(0.0..1.0) < self.config.epsilon {
                    rng.random_range(0..n)
                } else {
                    Self::best_action(&table, &state, n)
                };

                let next = state.with_placement(row, action as i32);
                let reward = -(next.conflicts() as f64);
                let best_next = Self::best_value(&table, &next);

                let values = table
                    .entry(state.clone())
                    .or_insert_with(|| vec![0.0; n]);
                values[action] += self.config.alpha
                    * (reward + self.config.gamma * best_next - values[action]);

                state = next;
            }

            if state.is_goal() && recorded.insert(state.clone()) {
                debug!("rl n={n}: solution {:?} in episode {episode}", state.columns());
                solutions.push(state);
            }
        }

        let record = MetricRecord::new(
            self.name(),
            start.elapsed(),
            solutions.len(),
            Some(self.config.episodes),
        );
        SolveReport { solutions, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_queen_immediate() {
        let config = RlConfig::default().with_episodes(1).with_seed(42);
        let report = ReinforcementSolver::with_config(1, config).solve();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].columns(), &[0]);
    }

    #[test]
    fn test_greedy_discovers_four_queens_solution() {
        // With epsilon 0 the policy is fully greedy; untried actions
        // read zero while conflicting branches turn negative after one
        // visit, so the learner sweeps the prefix tree and must reach
        // a conflict-free permutation well inside a generous budget.
        let config = RlConfig::default()
            .with_epsilon(0.0)
            .with_episodes(5000)
            .with_seed(42);
        let report = ReinforcementSolver::with_config(4, config).solve();
        assert!(
            !report.solutions.is_empty(),
            "greedy Q-learning failed to find a 4-queens solution"
        );
        for board in &report.solutions {
            assert!(board.is_goal());
            assert!(board.is_permutation());
        }
    }

    #[test]
    fn test_lazy_table_matches_seeded_table() {
        let run = |seed_full_table| {
            let config = RlConfig::default()
                .with_episodes(500)
                .with_seed(7)
                .with_seed_full_table(seed_full_table);
            ReinforcementSolver::with_config(4, config).solve()
        };
        // Pre-seeded entries are zero vectors, exactly the lazy
        // default, so both modes follow the same trajectory.
        assert_eq!(run(true).solutions, run(false).solutions);
    }

    #[test]
    fn test_solutions_deduplicated() {
        let config = RlConfig::default()
            .with_epsilon(0.0)
            .with_episodes(5000)
            .with_seed(42);
        let report = ReinforcementSolver::with_config(4, config).solve();
        let distinct: HashSet<_> = report.solutions.iter().cloned().collect();
        assert_eq!(distinct.len(), report.solutions.len());
    }

    #[test]
    fn test_budget_reported_as_iterations() {
        let config = RlConfig::default().with_episodes(25).with_seed(1);
        let report = ReinforcementSolver::with_config(4, config).solve();
        assert_eq!(report.record.iterations, Some(25));
        assert_eq!(report.record.method, "Reinforcement Learning");
    }

    #[test]
    fn test_best_action_first_max_tie_break() {
        let mut table = HashMap::new();
        let state = Board::empty(4);
        table.insert(state.clone(), vec![0.5, 1.0, 1.0, 0.2]);
        assert_eq!(ReinforcementSolver::best_action(&table, &state, 4), 1);
    }

    #[test]
    fn test_best_action_unseen_state_defaults_to_zero() {
        let table = HashMap::new();
        let state = Board::empty(4);
        assert_eq!(ReinforcementSolver::best_action(&table, &state, 4), 0);
        assert_eq!(ReinforcementSolver::best_value(&table, &state), 0.0);
    }
}
