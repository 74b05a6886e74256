/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and derives an asserting clause, by applying resolution with the clauses used to (eventually) observe the conflict from the decisions made.

For details on resolution, see the [resolution buffer](crate::resolution_buffer).

Once derived, the clause is stored after a backjump to the level at which the clause asserts its literal, so that the watches of the clause are initialised on a valuation where the clause is asserting.
It is then for the caller to value the asserted literal.

# Example

```rust,ignore
match self.conflict_analysis(&key)? {
    AnalysisResult::FundamentalConflict => {
        // The formula is unsatisfiable.
    }

    AnalysisResult::UnitClause { literal } => {
        self.record_assignment(literal, AssignmentSource::Unit(ClauseKey::AdditionUnit(literal)));
    }

    AnalysisResult::AssertingClause { key, literal } => {
        self.record_assignment(literal, AssignmentSource::BCP(key));
    }
}
```

# Activity

- With the [MiniSAT](crate::config::vsids::VSIDS::MiniSAT) variant of VSIDS, every atom of every clause used in resolution has its activity bumped.
- With the [Chaff](crate::config::vsids::VSIDS::Chaff) variant, only the atoms of the derived clause are bumped.

In either case additions used in resolution are bumped, and after analysis activity decays.
*/

use crate::{
    config::vsids::VSIDS,
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSource},
        literal::CLiteral,
    },
    types::err::{self},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict was found without any decision, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// The result of analysis is a unit clause.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// The result of analysis is a (non-unit) asserting clause.
    AssertingClause {
        /// The key of the asserting clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For details on conflict analysis see the [analysis](crate::procedures::analysis) procedure.
    pub fn conflict_analysis(&mut self, key: &ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        if !self.trail.decision_is_made() {
            log::info!(target: targets::ANALYSIS, "Conflict on {key} without a decision");
            return Ok(AnalysisResult::FundamentalConflict);
        }

        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.trail.level());

        let clause = self.resolution_buffer.resolve_through_current_level(
            key,
            &mut self.clause_db,
            &self.atom_db,
            &self.trail,
        )?;

        match self.config.vsids_variant.value {
            VSIDS::MiniSAT => {
                for atom in self.resolution_buffer.atoms_used() {
                    self.atom_db.bump_activity(atom);
                }
            }

            VSIDS::Chaff => {
                for atom in clause.atoms() {
                    self.atom_db.bump_activity(atom);
                }
            }
        }
        self.atom_db.decay_activity();
        self.clause_db.decay_activity();

        log::trace!(target: targets::ANALYSIS, "Learned {}", clause.as_dimacs(false));

        let literal = clause[0];
        match clause.len() {
            1 => {
                self.backjump(0);
                self.clause_db.store(
                    clause,
                    ClauseSource::Resolution,
                    None,
                    &self.atom_db,
                    &mut self.watches,
                )?;
                Ok(AnalysisResult::UnitClause { literal })
            }

            _ => {
                let level = self.non_chronological_backjump_level(&clause)?;
                let lbd = clause.lbd(&self.atom_db);
                self.backjump(level);

                let key = self.clause_db.store(
                    clause,
                    ClauseSource::Resolution,
                    Some(lbd),
                    &self.atom_db,
                    &mut self.watches,
                )?;
                Ok(AnalysisResult::AssertingClause { key, literal })
            }
        }
    }
}
