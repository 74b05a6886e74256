use crate::structures::{clause::CClause, literal::Literal};

/// Distinguishes tautologies from other clauses.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any other clause.
    Clause,
}

/// Sorts a clause and removes duplicate literals, noting whether the clause is a tautology.
pub(super) fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    clause.sort_unstable();
    clause.dedup();

    // After deduplication, a repeated atom must appear with both polarities.
    let mut atoms = clause.iter().map(|literal| literal.atom()).collect::<Vec<_>>();
    atoms.sort_unstable();

    match atoms.windows(2).any(|pair| pair[0] == pair[1]) {
        true => PreprocessingOk::Tautology,
        false => PreprocessingOk::Clause,
    }
}
