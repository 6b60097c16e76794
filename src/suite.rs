//! Orchestration boundary.
//!
//! Builds strategy instances for a board size, runs them sequentially,
//! and merges their solutions and metric records into one report. This
//! is the only place where results from different strategies meet;
//! while running, each strategy owns its state exclusively.
//!
//! Board-size validation happens here: the core strategies assume
//! N ≥ 1 and the suite rejects anything else before construction.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::astar::AStarSolver;
use crate::backtracking::BacktrackingSolver;
use crate::board::Board;
use crate::brute_force::BruteForceSolver;
use crate::frontier::FrontierSolver;
use crate::ga::GeneticSolver;
use crate::metrics::MetricRecord;
use crate::render::{render_solution, solutions_dir, RenderError};
use crate::rl::ReinforcementSolver;
use crate::solver::Solver;

/// The available strategy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Backtracking,
    Bfs,
    Dfs,
    AStar,
    BruteForce,
    Genetic,
    Reinforcement,
}

impl Strategy {
    /// Every variant, in a sensible default execution order.
    pub const ALL: [Strategy; 7] = [
        Strategy::Backtracking,
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::AStar,
        Strategy::Genetic,
        Strategy::Reinforcement,
        Strategy::BruteForce,
    ];

    /// Directory-name slug for artifact output.
    pub fn slug(&self) -> &'static str {
        match self {
            Strategy::Backtracking => "backtracking",
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::AStar => "a_star",
            Strategy::BruteForce => "brute_force",
            Strategy::Genetic => "genetic",
            Strategy::Reinforcement => "reinforcement",
        }
    }

    fn build(&self, n: usize) -> Box<dyn Solver> {
        match self {
            Strategy::Backtracking => Box::new(BacktrackingSolver::new(n)),
            Strategy::Bfs => Box::new(FrontierSolver::bfs(n)),
            Strategy::Dfs => Box::new(FrontierSolver::dfs(n)),
            Strategy::AStar => Box::new(AStarSolver::new(n)),
            Strategy::BruteForce => Box::new(BruteForceSolver::new(n)),
            Strategy::Genetic => Box::new(GeneticSolver::new(n)),
            Strategy::Reinforcement => Box::new(ReinforcementSolver::new(n)),
        }
    }
}

/// Orchestration failure.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("board size must be at least 1, got {0}")]
    InvalidBoardSize(usize),

    #[error(transparent)]
    Artifact(#[from] RenderError),

    #[error("failed to create artifact directory: {0}")]
    ArtifactDir(#[from] std::io::Error),
}

/// Merged result of running several strategies on one board size.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    /// Solutions from every strategy, in run order (duplicates across
    /// strategies are expected and preserved).
    pub solutions: Vec<Board>,

    /// One metric record per strategy run, in run order.
    pub records: Vec<MetricRecord>,
}

impl SuiteReport {
    /// First merged solution, if any strategy found one.
    pub fn first_solution(&self) -> Option<&Board> {
        self.solutions.first()
    }
}

/// Runs the given strategies sequentially and merges their output.
pub fn run_suite(n: usize, strategies: &[Strategy]) -> Result<SuiteReport, SuiteError> {
    if n < 1 {
        return Err(SuiteError::InvalidBoardSize(n));
    }

    let mut report = SuiteReport::default();
    for strategy in strategies {
        info!("running {:?} for n={n}", strategy);
        let mut solver = strategy.build(n);
        let run = solver.solve();
        report.solutions.extend(run.solutions);
        report.records.push(run.record);
    }
    Ok(report)
}

/// Like [`run_suite`], additionally writing every strategy's solutions
/// as SVG artifacts under `root/<slug>_solutions_<n>/solution_<i>.svg`.
pub fn run_suite_with_artifacts(
    n: usize,
    strategies: &[Strategy],
    root: &Path,
) -> Result<SuiteReport, SuiteError> {
    if n < 1 {
        return Err(SuiteError::InvalidBoardSize(n));
    }

    let mut report = SuiteReport::default();
    for strategy in strategies {
        info!("running {:?} for n={n}", strategy);
        let mut solver = strategy.build(n);
        let run = solver.solve();

        let dir = solutions_dir(root, strategy.slug(), n)?;
        for (i, board) in run.solutions.iter().enumerate() {
            render_solution(board, &dir.join(format!("solution_{i}.svg")))?;
        }

        report.solutions.extend(run.solutions);
        report.records.push(run.record);
    }
    Ok(report)
}
