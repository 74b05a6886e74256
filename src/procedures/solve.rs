//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! The solve is a loop over [apply_consequences](crate::procedures::apply_consequences):
//!
//! - If every consequence is applied without conflict, then some decision is made.
//!   + If no decision can be made, the valuation is complete and satisfies the formula.
//! - If a conflict is found without any decision having been made, the formula is unsatisfiable.
//! - Otherwise, a clause has been learned and a backjump made, and the literal asserted by the clause is valued.
//!   After this, a restart or a reduction of learned clauses may be made.
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               | if there are no consequences to apply, and the valuation is partial
//!   |               |
//!   |               |              +-----> satisfiable, if the valuation is complete
//!   ⌄   +--------------------+     |
//! --+-->| apply_consequences |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, on a conflict without a decision
//!   |               |
//!   |               | if a clause is learned
//!   |               ⌄
//!   |   +------------------------+
//!   +---| value asserted literal |
//!       +------------------------+
//! ```
//!
//! Before each decision the solve is checked for [cancellation](crate::context::callbacks), and against the time and conflict limits of the configuration.
//! If any applies the solve returns with an [unknown](crate::reports::Report::Unknown) report, and the context remains consistent.
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//!
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![p, -q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.literal_value(p), Some(false));
//! assert_eq!(the_context.literal_value(q), Some(false));
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```

use crate::{
    context::{ContextState, GenericContext},
    db::{atom::AtomValue, ClauseKey},
    misc::log::targets::{self},
    procedures::{apply_consequences::ApplyConsequencesOk, decision::DecisionOk},
    reports::Report,
    structures::{consequence::AssignmentSource, literal::CLiteral},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// See [procedures::solve](crate::procedures::solve) for details.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            ContextState::Input | ContextState::Solving => {}
        }

        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            match self.apply_consequences()? {
                ApplyConsequencesOk::FundamentalConflict => {
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }

                ApplyConsequencesOk::Exhausted => {
                    self.counters.time = total_time.elapsed();
                    if self.should_stop() {
                        break 'solve_loop;
                    }

                    match self.make_decision() {
                        DecisionOk::Literal(_) => continue 'solve_loop,

                        DecisionOk::Exhausted => {
                            self.state = ContextState::Satisfiable;
                            break 'solve_loop;
                        }
                    }
                }

                ApplyConsequencesOk::UnitClause { literal } => {
                    let source = AssignmentSource::Unit(ClauseKey::AdditionUnit(literal));
                    self.value_asserted_literal(literal, source)?;
                }

                ApplyConsequencesOk::AssertingClause { key, literal } => {
                    self.value_asserted_literal(literal, AssignmentSource::BCP(key))?;
                }
            }

            self.restart_if_due();

            if self.reduction_is_due() {
                self.reduce()?;
            }
        }

        self.counters.time = total_time.elapsed();
        log::info!(
            target: targets::SOLVE,
            "{} after {} conflicts and {} decisions",
            self.state,
            self.counters.total_conflicts,
            self.counters.total_decisions
        );

        Ok(self.report())
    }

    /// Whether the solve should stop with an unknown result, due to a limit of the configuration or the terminate callback.
    fn should_stop(&mut self) -> bool {
        let time_limit = self.config.time_limit.value;
        if !time_limit.is_zero() && self.counters.time > time_limit {
            log::info!(target: targets::SOLVE, "Time limit reached");
            return true;
        }

        let conflict_limit = self.config.conflict_limit.value;
        if conflict_limit != 0 && self.counters.total_conflicts >= conflict_limit {
            log::info!(target: targets::SOLVE, "Conflict limit reached");
            return true;
        }

        self.check_callback_terminate()
    }

    /// Values the literal asserted by a learned clause, at the level of the backjump made by analysis.
    fn value_asserted_literal(
        &mut self,
        literal: CLiteral,
        source: AssignmentSource,
    ) -> Result<(), err::ErrorKind> {
        match self.record_assignment(literal, source) {
            AtomValue::NotSet => Ok(()),

            _ => {
                log::error!(target: targets::ANALYSIS, "Learned clause does not assert {literal}");
                Err(err::ErrorKind::from(err::AnalysisError::NoAssertion))
            }
        }
    }
}
