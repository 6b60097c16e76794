//! BFS and DFS strategies.
//!
//! Both share one expansion rule (from a partial board, generate one
//! successor per valid column in the first unplaced row) and differ
//! only in frontier discipline: BFS pops from the front of the deque
//! (layer by layer), DFS from the back (depth first, mirroring
//! backtracking through an explicit frontier instead of recursion).
//! Complete boards are recorded and never expanded further; the run
//! ends when the frontier empties.
//!
//! Because successors are gated on [`Board::is_valid_placement`], every
//! frontier member has a conflict-free placed prefix, and any complete
//! board popped from the frontier is already a solution.

use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

use crate::board::Board;
use crate::metrics::MetricRecord;
use crate::solver::{SolveReport, Solver};

/// Frontier pop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First-in-first-out: breadth-first expansion.
    Fifo,
    /// Last-in-first-out: depth-first expansion.
    Lifo,
}

/// Incremental search over partial boards with an explicit frontier.
pub struct FrontierSolver {
    n: usize,
    discipline: Discipline,
}

impl FrontierSolver {
    /// Breadth-first search.
    pub fn bfs(n: usize) -> Self {
        Self {
            n,
            discipline: Discipline::Fifo,
        }
    }

    /// Depth-first search.
    pub fn dfs(n: usize) -> Self {
        Self {
            n,
            discipline: Discipline::Lifo,
        }
    }

    /// Valid one-queen extensions of a partial board.
    fn successors(&self, board: &Board) -> Vec<Board> {
        let Some(row) = board.first_unplaced() else {
            return Vec::new();
        };
        (0..self.n as i32)
            .filter(|&col| board.is_valid_placement(row, col))
            .map(|col| board.with_placement(row, col))
            .collect()
    }
}

impl Solver for FrontierSolver {
    fn name(&self) -> &'static str {
        match self.discipline {
            Discipline::Fifo => "BFS",
            Discipline::Lifo => "DFS",
        }
    }

    fn solve(&mut self) -> SolveReport {
        let start = Instant::now();
        let mut solutions = Vec::new();
        let mut expanded = 0usize;

        let mut frontier: VecDeque<Board> = VecDeque::new();
        frontier.push_back(Board::empty(self.n));

        while let Some(board) = match self.discipline {
            Discipline::Fifo => frontier.pop_front(),
            Discipline::Lifo => frontier.pop_back(),
        } {
            if board.is_goal() {
                solutions.push(board);
                continue;
            }
            expanded += 1;
            for successor in self.successors(&board) {
                frontier.push_back(successor);
            }
        }

        debug!(
            "{} n={}: {} solutions, {} states expanded",
            self.name(),
            self.n,
            solutions.len(),
            expanded
        );
        let record =
            MetricRecord::new(self.name(), start.elapsed(), solutions.len(), Some(expanded));
        SolveReport { solutions, record }
    }
}
