//! Backtracking strategy.
//!
//! Recursive depth-first assignment: the board is built row by row,
//! trying columns in ascending order and recursing only past placements
//! that [`Board::is_valid_placement`] accepts. Reaching row N records a
//! complete solution. The recursion tree is exhausted, so every
//! solution is produced, in lexicographic order of column choice.

use std::time::Instant;

use log::debug;

use crate::board::Board;
use crate::metrics::MetricRecord;
use crate::solver::{SolveReport, Solver};

/// Exhaustive pruned recursion over row-by-row placements.
pub struct BacktrackingSolver {
    n: usize,
}

impl BacktrackingSolver {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    fn backtrack(&self, board: &mut Board, row: usize, out: &mut Out) {
        out.nodes += 1;
        if row == self.n {
            out.solutions.push(board.clone());
            return;
        }
        for col in 0..self.n as i32 {
            if board.is_valid_placement(row, col) {
                board.set(row, col);
                self.backtrack(board, row + 1, out);
                board.set(row, crate::board::UNPLACED);
            }
        }
    }
}

struct Out {
    solutions: Vec<Board>,
    nodes: usize,
}

impl Solver for BacktrackingSolver {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&mut self) -> SolveReport {
        let start = Instant::now();
        let mut out = Out {
            solutions: Vec::new(),
            nodes: 0,
        };
        let mut board = Board::empty(self.n);
        self.backtrack(&mut board, 0, &mut out);

        debug!(
            "backtracking n={}: {} solutions, {} nodes",
            self.n,
            out.solutions.len(),
            out.nodes
        );
        let record = MetricRecord::new(
            self.name(),
            start.elapsed(),
            out.solutions.len(),
            Some(out.nodes),
        );
        SolveReport {
            solutions: out.solutions,
            record,
        }
    }
}
