//! Reinforcement strategy.
//!
//! Tabular one-step Q-learning over sentinel board states. Actions are
//! column choices for the first unplaced row; the reward is the
//! negative conflict count of the resulting state, so conflict-free
//! construction is the high-reward trajectory.
//!
//! The action-value table can optionally be pre-seeded over all N!
//! complete permutations, honoring the original contract for this
//! strategy. That enumeration is combinatorially explosive and only
//! feasible for very small N; lookups also lazily default to zero
//! vectors, so partial states (and large N without pre-seeding) are
//! handled uniformly.

mod config;
mod runner;

pub use config::RlConfig;
pub use runner::ReinforcementSolver;
