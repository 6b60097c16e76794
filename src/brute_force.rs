//! Brute-force strategy.
//!
//! Enumerates all N! permutations of `0..N-1` in lexicographic order
//! and records the conflict-free ones. No pruning; this is the
//! factorial-time baseline the other strategies are compared against,
//! practical only up to roughly N = 10.

use std::time::Instant;

use itertools::Itertools;
use log::debug;

use crate::board::Board;
use crate::metrics::MetricRecord;
use crate::solver::{SolveReport, Solver};

/// Exhaustive permutation enumeration baseline.
pub struct BruteForceSolver {
    n: usize,
}

impl BruteForceSolver {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Solver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "Brute Force"
    }

    fn solve(&mut self) -> SolveReport {
        let start = Instant::now();
        let mut solutions = Vec::new();
        let mut examined = 0usize;

        for perm in (0..self.n).permutations(self.n) {
            examined += 1;
            let board = Board::from_permutation(&perm);
            if board.conflicts() == 0 {
                solutions.push(board);
            }
        }

        debug!(
            "brute force n={}: {} solutions out of {} permutations",
            self.n,
            solutions.len(),
            examined
        );
        let record =
            MetricRecord::new(self.name(), start.elapsed(), solutions.len(), Some(examined));
        SolveReport { solutions, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_queen_single_solution() {
        let report = BruteForceSolver::new(1).solve();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].columns(), &[0]);
        assert_eq!(report.record.iterations, Some(1));
    }

    #[test]
    fn test_four_queens_count_and_validity() {
        let report = BruteForceSolver::new(4).solve();
        assert_eq!(report.solutions.len(), 2);
        assert_eq!(report.record.iterations, Some(24));
        for board in &report.solutions {
            assert!(board.is_goal());
        }
    }

    #[test]
    fn test_eight_queens_count() {
        let report = BruteForceSolver::new(8).solve();
        assert_eq!(report.solutions.len(), 92);
        assert_eq!(report.record.iterations, Some(40_320));
    }

    #[test]
    fn test_agrees_with_backtracking_order_insensitive() {
        use std::collections::HashSet;
        let brute: HashSet<_> = BruteForceSolver::new(6)
            .solve()
            .solutions
            .into_iter()
            .collect();
        let back: HashSet<_> = crate::backtracking::BacktrackingSolver::new(6)
            .solve()
            .solutions
            .into_iter()
            .collect();
        assert_eq!(brute, back);
    }
}
