//! Genetic strategy.
//!
//! Evolves a population of complete permutation boards ranked by
//! conflict count. Unlike the exhaustive strategies this one is
//! stochastic: it guarantees no particular coverage or termination
//! bound beyond its generation budget, and two unseeded runs will
//! generally differ.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population size, generation budget, mutation
//!   rate (builder pattern with validation)
//! - [`GeneticSolver`]: the generational loop
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover with first-fit permutation
//!   repair, swap mutation, and position-wise similarity

mod config;
pub mod operators;
mod runner;

pub use config::GeneticConfig;
pub use runner::GeneticSolver;
