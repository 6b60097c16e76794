//! A* strategy.
//!
//! Best-first search over partial boards. The path cost `g` is the
//! number of placed rows; the heuristic `h` is the conflict count over
//! the placed prefix, so the frontier is ordered by `f = g + h` with
//! ties broken by insertion sequence for determinism. Since successors
//! are gated on row-by-row validity, `h` is zero along surviving
//! branches and the search behaves as a conflict-guided best-first
//! enumeration rather than a classically admissible A*.
//!
//! Cost-map lookups for unseen boards default to infinity; `g` entries
//! are only replaced by strictly better paths. Board equality is
//! structural over the full column sequence.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use log::debug;

use crate::board::Board;
use crate::metrics::MetricRecord;
use crate::solver::{SolveReport, Solver};

/// Priority-frontier entry: min-heap on `f`, then insertion order.
struct Entry {
    f: usize,
    seq: u64,
    board: Board,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the lowest f
        // (and among equal f, the earliest insertion) on top.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cost-priority search guided by partial conflict count.
pub struct AStarSolver {
    n: usize,
}

impl AStarSolver {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Solver for AStarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn solve(&mut self) -> SolveReport {
        let start = Instant::now();
        let mut solutions = Vec::new();
        let mut expanded = 0usize;

        let mut open = BinaryHeap::new();
        let mut g_cost: HashMap<Board, usize> = HashMap::new();
        let mut seq = 0u64;

        let root = Board::empty(self.n);
        g_cost.insert(root.clone(), 0);
        open.push(Entry {
            f: 0,
            seq,
            board: root,
        });

        while let Some(Entry { board, .. }) = open.pop() {
            if board.is_goal() {
                solutions.push(board);
                continue;
            }
            expanded += 1;

            let Some(row) = board.first_unplaced() else {
                continue;
            };
            let g_new = g_cost
                .get(&board)
                .copied()
                .unwrap_or(usize::MAX)
                .saturating_add(1);

            for col in 0..self.n as i32 {
                if !board.is_valid_placement(row, col) {
                    continue;
                }
                let successor = board.with_placement(row, col);
                let known = g_cost.get(&successor).copied().unwrap_or(usize::MAX);
                if g_new < known {
                    let f = g_new + successor.conflicts();
                    g_cost.insert(successor.clone(), g_new);
                    seq += 1;
                    open.push(Entry {
                        f,
                        seq,
                        board: successor,
                    });
                }
            }
        }

        debug!(
            "a-star n={}: {} solutions, {} states expanded",
            self.n,
            solutions.len(),
            expanded
        );
        let record =
            MetricRecord::new(self.name(), start.elapsed(), solutions.len(), Some(expanded));
        SolveReport { solutions, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_queens() {
        let report = AStarSolver::new(4).solve();
        let set: HashSet<_> = report.solutions.iter().map(|b| b.columns().to_vec()).collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&vec![1, 3, 0, 2]));
        assert!(set.contains(&vec![2, 0, 3, 1]));
    }

    #[test]
    fn test_eight_queens_count() {
        let report = AStarSolver::new(8).solve();
        assert_eq!(report.solutions.len(), 92);
        for board in &report.solutions {
            assert!(board.is_goal());
        }
    }

    #[test]
    fn test_one_queen() {
        let report = AStarSolver::new(1).solve();
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].columns(), &[0]);
    }

    #[test]
    fn test_entry_ordering_prefers_low_f_then_early_insertion() {
        let board = Board::empty(1);
        let mut heap = BinaryHeap::new();
        heap.push(Entry { f: 3, seq: 0, board: board.clone() });
        heap.push(Entry { f: 1, seq: 2, board: board.clone() });
        heap.push(Entry { f: 1, seq: 1, board: board.clone() });
        heap.push(Entry { f: 2, seq: 3, board });

        let order: Vec<(usize, u64)> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.f, e.seq))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_agrees_with_backtracking() {
        let astar: HashSet<_> = AStarSolver::new(6).solve().solutions.into_iter().collect();
        let back: HashSet<_> = crate::backtracking::BacktrackingSolver::new(6)
            .solve()
            .solutions
            .into_iter()
            .collect();
        assert_eq!(astar, back);
    }
}
