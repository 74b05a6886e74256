//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a [clause key](ClauseKey). \
//!     There are two important kinds of clause:
//!     * Original clauses \
//!       Original clauses are added to the context from some external source (e.g. directly or through a DIMACS file). \
//!       The collection of original clauses is the CNF formula whose satisfiability may be determined.
//!     * Added clauses \
//!       Clauses added to the context by conflict analysis.
//!       Every added clause is a consequence of the collection of original clauses.
//!
//! - [The atom database](crate::db::atom)
//!   + The valuation, the level and source of each value, and the decision heuristic.
//!
//! - [The trail](crate::db::trail)
//!   + Every assignment in order, grouped into decision levels, and the queue of assignments awaiting propagation.
//!
//! - [Watch lists](crate::db::watches)
//!   + For each literal, the clauses watching the literal.

pub mod atom;
pub mod clause;
pub mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

use atom::AtomValue;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
};

/// The index of a decision level.
pub type LevelIndex = u32;

/// Canonical methods to record assignments in the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Values the atom of `literal` to match the polarity of the literal at the current level, and places the literal on the trail.
    ///
    /// If the atom already has some value, nothing is recorded and the relation of the value to the literal is returned.
    pub fn record_assignment(&mut self, literal: CLiteral, source: AssignmentSource) -> AtomValue {
        let level = self.trail.level();
        match self.atom_db.set_value(literal, level, source) {
            AtomValue::NotSet => {
                log::trace!(target: targets::VALUATION, "{literal} at level {level} from {source:?}");
                self.trail.store_assignment(literal);
                AtomValue::NotSet
            }

            other => other,
        }
    }

    /// The value of an atom, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The value of a literal, if the atom of the literal has some value.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.atom_db
            .value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }
}
