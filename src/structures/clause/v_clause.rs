use crate::{
    config::LBD,
    db::{atom::AtomDB, LevelIndex},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;
        for literal in self.iter() {
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return None,
                Some(_) => continue,
                None if the_literal.is_none() => the_literal = Some(*literal),
                None => return None,
            }
        }
        the_literal
    }

    fn lbd(&self, atom_db: &AtomDB) -> LBD {
        let mut decision_levels = self
            .iter()
            .filter_map(|literal| atom_db.level_of(literal.atom()))
            .collect::<Vec<LevelIndex>>();

        decision_levels.sort_unstable();
        decision_levels.dedup();

        LBD::try_from(decision_levels.len()).unwrap_or(LBD::MAX)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().all(|literal| {
            valuation
                .value_of(literal.atom())
                .flatten()
                .is_some_and(|value| value != literal.polarity())
        })
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            valuation
                .value_of(literal.atom())
                .flatten()
                .is_some_and(|value| value == literal.polarity())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs_strings() {
        assert_eq!((-4 as CLiteral).as_dimacs(true), "-4 0");
        let clause: CClause = vec![1, -2, 3];
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");
        assert_eq!(CClause::new().as_dimacs(true), "0");
    }

    #[test]
    fn satisfaction() {
        let clause: CClause = vec![1, -2];
        let valuation = vec![Some(true), Some(false), Some(true)];
        assert!(clause.unsatisfiable_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));

        let valuation = vec![Some(true), None, Some(true)];
        assert!(!clause.unsatisfiable_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));
        assert_eq!(clause.asserts(&valuation), Some(1));

        let valuation = vec![Some(true), None, Some(false)];
        assert!(clause.satisfied_on(&valuation));
        assert_eq!(clause.asserts(&valuation), None);
    }

    #[test]
    fn empty_clause_is_false() {
        let clause = CClause::new();
        let valuation = vec![Some(true)];
        assert!(clause.unsatisfiable_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));
    }
}
