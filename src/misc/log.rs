/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

No log implementation is provided by the library.
The CLI installs [env_logger](https://docs.rs/env_logger) when built with the `log` feature, so `RUST_LOG=reduction=info marten_cli …` shows reductions only.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to clause deletion
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to restarts
    pub const RESTART: &str = "restart";

    /// Logs related to the [resolution buffer](crate::resolution_buffer)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [reading DIMACS](crate::builder::dimacs)
    pub const PARSE: &str = "parse";

    /// Logs related to the [solve](crate::procedures::solve) procedure, e.g. limits
    pub const SOLVE: &str = "solve";
}
