//! A literal, read as the unit clause containing that literal.

use crate::{
    config::LBD,
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => format!("{self}"),
        }
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        match valuation.value_of(self.atom()).flatten() {
            None => Some(*self),
            Some(_) => None,
        }
    }

    fn lbd(&self, _atom_db: &AtomDB) -> LBD {
        1
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        valuation
            .value_of(self.atom())
            .flatten()
            .is_some_and(|value| value != self.polarity())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        valuation
            .value_of(self.atom())
            .flatten()
            .is_some_and(|value| value == self.polarity())
    }
}
