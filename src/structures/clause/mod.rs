//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! # use marten_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false),
//!                   CLiteral::new(15, true),
//!                   CLiteral::new(4,  false)];
//!
//! assert_eq!(clause.size(), 5);
//!
//! let mut some_valuation = vec![Some(true); 42];
//!
//! some_valuation[23] = Some(false);
//! some_valuation[15] = Some(false);
//! assert_eq!(clause.asserts(&some_valuation), None);
//!
//! some_valuation[41] = None;
//! assert_eq!(clause.asserts(&some_valuation), Some(CLiteral::new(41, false)));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

mod literal;
mod v_clause;

use crate::{
    config::LBD,
    db::atom::AtomDB,
    structures::{atom::Atom, literal::CLiteral, valuation::Valuation},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and every other literal of the clause is false on the valuation.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// The Literal Block Distance of the clause.
    /// That is, the number of distinct decision levels of the (valued) atoms in the clause.
    fn lbd(&self, atom_db: &AtomDB) -> LBD;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether every literal of the clause is false on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}
