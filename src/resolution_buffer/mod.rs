/*!
A buffer for deriving a clause by chaining resolution on the clauses used to observe a conflict.

- The *resolution* of two clauses φ ∨ *p* and ψ ∨ -*p* is the clause φ ∨ ψ, with *p* the *pivot*.

When a conflict is found the conflict clause is false on the current valuation, and each literal of the clause was made false either by a decision or by propagation from some reason clause.
Resolving the conflict clause with the reasons of literals valued at the current level, in reverse order of valuation, eventually derives a clause with a single literal from the current level.
The literal is the first *unique implication point* (UIP), and the derived clause asserts the negation of the literal after a backjump.

The buffer tracks:
- Which atoms have been merged into the derived clause, through a flag for each atom.
- Literals of the derived clause from levels below the current level, which are settled once merged.
- A count of literals from the current level which are yet to be resolved away.

Literals valued at level zero are facts, and are dropped from the derived clause.

For the procedure using the buffer, see [conflict_analysis](crate::procedures::analysis).
*/

mod methods;

use crate::structures::{atom::Atom, clause::CClause};

/// A buffer for use when applying resolution to a sequence of clauses.
#[derive(Default)]
pub struct ResolutionBuffer {
    /// For each atom, whether the atom has been merged into the derived clause.
    merged: Vec<bool>,

    /// The atoms flagged as merged, so flags can be cleared without a full sweep.
    merged_atoms: Vec<Atom>,

    /// Literals of the derived clause valued below the current level.
    settled: CClause,

    /// A count of literals in the derived clause valued at the current level.
    pending: usize,
}
