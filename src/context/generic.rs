use std::collections::HashSet;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::restart::RestartSchedule,
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

use super::{callbacks::CallbackTerminate, ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use marten_sat::context::GenericContext;
/// # use marten_sat::generic::random::MinimalPCG32;
/// # use marten_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// The schedule of restarts.
    pub restart_schedule: Box<dyn RestartSchedule>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A count of the atoms of the formula, excluding top.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count() - 1
    }

    /// The valuation, as a string of DIMACS literals.
    pub fn valuation_string(&self) -> String {
        self.atom_db.valuation_string()
    }

    /// A model of the formula, with one literal for each atom of the formula, if the formula is known to be satisfiable.
    pub fn model(&self) -> Option<Vec<CLiteral>> {
        if self.state != ContextState::Satisfiable {
            return None;
        }

        (1..self.atom_db.count() as Atom)
            .map(|atom| {
                self.atom_db
                    .value_of(atom)
                    .map(|value| CLiteral::new(atom, value))
            })
            .collect()
    }

    /// Whether every original clause is satisfied by the current valuation.
    pub fn satisfies_original_formula(&self) -> bool {
        let valuation = self.atom_db.valuation();
        self.clause_db
            .original_clauses()
            .all(|clause| clause.satisfied_on(valuation))
    }

    /// Whether the watched literals of every clause are consistent with the valuation and the watch lists.
    ///
    /// In detail, for every clause of two or more literals:
    /// - Both watched literals are on the watch lists of the clause.
    /// - If a watched literal is false then either the other watched literal is true, or every literal of the clause is false, or the assignment making the watched literal false is awaiting propagation.
    pub fn watch_invariant_holds(&self) -> bool {
        let pending = self.trail.literals[self.trail.q_head..]
            .iter()
            .map(|literal| literal.atom())
            .collect::<HashSet<_>>();
        let valuation = self.atom_db.valuation();

        for db_clause in self.clause_db.long_clauses() {
            let watched = db_clause.watched_literals();

            if watched[0] == watched[1] {
                return false;
            }

            for literal in watched {
                if !self.watches.watchers(literal).contains(&db_clause.key()) {
                    return false;
                }
            }

            for (this, other) in [(watched[0], watched[1]), (watched[1], watched[0])] {
                if self.literal_value(this) == Some(false)
                    && self.literal_value(other) != Some(true)
                    && !pending.contains(&this.atom())
                    && !db_clause.clause().unsatisfiable_on(valuation)
                {
                    return false;
                }
            }
        }
        true
    }
}
