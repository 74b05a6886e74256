/*!
Applies consequences of the assignments awaiting propagation.

[apply_consequences](GenericContext::apply_consequences) propagates each assignment on the trail awaiting propagation, in order, until either:
- Every assignment has been propagated, returned as [Exhausted](ApplyConsequencesOk::Exhausted).
- A conflict is found without any decision having been made, and so the formula is unsatisfiable, returned as [FundamentalConflict](ApplyConsequencesOk::FundamentalConflict).
- A conflict is found after some decision, in which case conflict analysis derives and stores a clause, backjumps to the level at which the clause asserts some literal, and the clause is returned.

The asserted literal of a returned clause is not valued, and it is for the caller to value the literal.
This allows for other actions to be taken due to a conflict having been found.

```rust,ignore
match self.apply_consequences()? {
    ApplyConsequencesOk::Exhausted => { /* make a decision */ }
    ApplyConsequencesOk::FundamentalConflict => { /* unsatisfiable */ }
    ApplyConsequencesOk::UnitClause { literal } => { /* value literal as a fact */ }
    ApplyConsequencesOk::AssertingClause { key, literal } => { /* value literal with key as the reason */ }
}
```
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    procedures::analysis::AnalysisResult,
    structures::literal::CLiteral,
    types::err::{self},
};

/// Ok results of [apply_consequences](GenericContext::apply_consequences).
#[derive(Debug, PartialEq, Eq)]
pub enum ApplyConsequencesOk {
    /// A conflict was found without any decision, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// A unit clause was derived from some conflict.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// A non-unit asserting clause was derived from some conflict.
    AssertingClause {
        /// The key to the clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },

    /// There were no (further) consequences to apply.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies consequences awaiting propagation.
    /// See [procedures::apply_consequences](crate::procedures::apply_consequences) for details.
    pub fn apply_consequences(&mut self) -> Result<ApplyConsequencesOk, err::ErrorKind> {
        match self.propagate() {
            Ok(()) => Ok(ApplyConsequencesOk::Exhausted),

            Err(err::BCPError::Conflict(key)) => {
                self.counters.total_conflicts += 1;
                self.counters.fresh_conflicts += 1;

                match self.conflict_analysis(&key)? {
                    AnalysisResult::FundamentalConflict => {
                        Ok(ApplyConsequencesOk::FundamentalConflict)
                    }

                    AnalysisResult::UnitClause { literal } => {
                        Ok(ApplyConsequencesOk::UnitClause { literal })
                    }

                    AnalysisResult::AssertingClause { key, literal } => {
                        Ok(ApplyConsequencesOk::AssertingClause { key, literal })
                    }
                }
            }

            Err(non_conflict_bcp_error) => Err(err::ErrorKind::from(non_conflict_bcp_error)),
        }
    }
}
