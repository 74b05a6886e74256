use std::time::Duration;

/// Statistics of a context, accumulated over every solve unless noted.
#[derive(Default)]
pub struct Counters {
    /// Conflicts found by propagation.
    pub total_conflicts: usize,

    /// Conflicts since the most recent restart.
    pub fresh_conflicts: usize,

    /// Decisions made.
    pub total_decisions: usize,

    /// Passes through the solve loop.
    pub total_iterations: usize,

    /// Literals valued by propagation.
    pub propagations: usize,

    /// Restarts made.
    pub restarts: usize,

    /// Reductions of the learned clauses.
    pub reductions: usize,

    /// Time spent in the most recent solve.
    pub time: Duration,
}
