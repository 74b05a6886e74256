/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, e.g. as the solve was interrupted.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Report {
    /// The report as the status line of the SAT competition output format.
    ///
    /// ```rust
    /// # use marten_sat::reports::Report;
    /// assert_eq!(Report::Unsatisfiable.status_line(), "s UNSATISFIABLE");
    /// ```
    pub fn status_line(&self) -> &'static str {
        match self {
            Self::Satisfiable => "s SATISFIABLE",
            Self::Unsatisfiable => "s UNSATISFIABLE",
            Self::Unknown => "s UNKNOWN",
        }
    }
}
