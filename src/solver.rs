//! The common solver contract.
//!
//! Each strategy is an independent value implementing [`Solver`]; it
//! owns its own frontier/population/table state and its own solution
//! buffer. Nothing is shared between strategy instances; merging
//! happens only at the orchestration boundary in [`crate::suite`].

use crate::board::Board;
use crate::metrics::MetricRecord;

/// Output of one strategy run: the solutions it found and the single
/// metric record describing the run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Complete, conflict-free boards, in discovery order.
    pub solutions: Vec<Board>,

    /// Performance record for this run.
    pub record: MetricRecord,
}

/// A strategy that enumerates or approximates N-Queens solutions.
///
/// `solve` consumes whatever internal budget the strategy carries
/// (recursion tree, frontier, generations, episodes) and returns when
/// its own termination condition is reached. Implementations are
/// synchronous and single-threaded.
pub trait Solver {
    /// Strategy name as it appears in metric records.
    fn name(&self) -> &'static str;

    /// Runs the strategy to completion.
    fn solve(&mut self) -> SolveReport;
}
