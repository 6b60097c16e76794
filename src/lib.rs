//! Multi-strategy N-Queens solver suite.
//!
//! Enumerates or approximates solutions to the N-Queens constraint
//! satisfaction problem with interchangeable strategies, each reporting
//! a comparable [`metrics::MetricRecord`]:
//!
//! - **Backtracking**: pruned row-by-row recursion, every solution in
//!   lexicographic order.
//! - **BFS / DFS**: incremental expansion through an explicit frontier
//!   (FIFO and LIFO disciplines over the same successor rule).
//! - **A\***: priority frontier ordered by placed-row count plus a
//!   conflict-count heuristic.
//! - **Brute Force**: all N! permutations, the factorial-time baseline.
//! - **Genetic**: evolving a permutation population with crossover,
//!   repair, swap mutation, and symmetry-aware deduplication.
//! - **Reinforcement**: tabular one-step Q-learning over sentinel
//!   board states.
//!
//! All strategies share one conflict-detection contract, the
//! [`board::Board`] model, and the [`solver::Solver`] lifecycle.
//! Everything is single-threaded and synchronous; randomized
//! strategies accept an explicit seed for reproducibility.
//!
//! # Example
//!
//! ```
//! use queensolve::suite::{run_suite, Strategy};
//!
//! let report = run_suite(4, &[Strategy::Backtracking, Strategy::Bfs]).unwrap();
//! assert_eq!(report.records.len(), 2);
//! assert!(report.records.iter().all(|r| r.solutions_found == 2));
//! ```

pub mod astar;
pub mod backtracking;
pub mod board;
pub mod brute_force;
pub mod frontier;
pub mod ga;
pub mod metrics;
pub mod random;
pub mod render;
pub mod rl;
pub mod solver;
pub mod suite;
