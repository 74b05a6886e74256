/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation) and the previous value of each atom, for phase saving.
- A record of the level on which each atom was valued, and the [source](AssignmentSource) of the value.
- A [selector](AtomSelector) to choose an atom without a value when making a decision.
*/

pub mod activity;
pub mod selector;

use crate::{
    config::{Activity, Config, DecisionHeuristic},
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::AtomDBError,
};

use activity::ActivitySelector;
use selector::{AtomSelector, FixedOrderSelector};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](crate::structures::valuation::Valuation).
    valuation: CValuation,

    /// The last value of each atom, used as a saved phase.
    previous_valuation: Vec<bool>,

    /// The level on which an atom was valued, if valued.
    levels: Vec<Option<LevelIndex>>,

    /// Why an atom has the value it has, if valued.
    sources: Vec<Option<AssignmentSource>>,

    /// The strategy used to choose an atom without a value.
    selector: Box<dyn AtomSelector>,

    /// Occurrences of each atom in added clauses, indexed by polarity, if noted.
    occurrences: Vec<[usize; 2]>,
}

#[derive(Debug, PartialEq, Eq)]
/// The status of the valuation of an atom, relative to some literal.
pub enum AtomValue {
    /// The atom had no value.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom is not the same as the polarity of the literal.
    Different,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    ///
    /// The database contains the [top atom](TOP_ATOM), valued true at level zero.
    pub fn new(config: &Config) -> Self {
        let selector: Box<dyn AtomSelector> = match config.decision_heuristic.value {
            DecisionHeuristic::Activity => Box::new(ActivitySelector::new(&config.atom_db)),
            DecisionHeuristic::FixedOrder => Box::new(FixedOrderSelector::default()),
        };

        AtomDB {
            valuation: vec![Some(true)],
            previous_valuation: vec![true],
            levels: vec![Some(0)],
            sources: vec![None],
            selector,
            occurrences: vec![[0, 0]],
        }
    }

    /// A count of atoms in the [AtomDB], including top.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// A fresh atom, with the relevant data structures updated to support access via the atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::VALUATION, "Atoms exhausted");
                return Err(AtomDBError::AtomsExhausted);
            }
        };

        self.valuation.push(None);
        self.previous_valuation.push(false);
        self.levels.push(None);
        self.sources.push(None);
        self.occurrences.push([0, 0]);
        self.selector.add_atom(atom);

        Ok(atom)
    }

    /// The value of an atom, if the atom is part of the database and has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The level on which an atom was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// Why an atom has the value it has, if valued.
    pub fn source_of(&self, atom: Atom) -> Option<AssignmentSource> {
        self.sources.get(atom as usize).copied().flatten()
    }

    /// The last value of an atom, or false if the atom has never been valued.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation
            .get(atom as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Values the atom of a literal to match the polarity of the literal, noting the level and source, if the atom has no value.
    ///
    /// If the atom has some value, the value is unchanged and the relation of the value to the literal is returned.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: AssignmentSource,
    ) -> AtomValue {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            None => {
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = Some(level);
                self.sources[atom] = Some(source);
                AtomValue::NotSet
            }

            Some(value) if value == literal.polarity() => AtomValue::Same,

            Some(_) => AtomValue::Different,
        }
    }

    /// Clears the value of an atom, saving the value as a phase and returning the atom to the selector.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.previous_valuation[index] = value;
        }
        self.levels[index] = None;
        self.sources[index] = None;
        self.selector.release(atom);
    }

    /// The atom without a value preferred by the selector, if any atom is without a value.
    pub fn select_atom(&mut self) -> Option<Atom> {
        self.selector.select(&self.valuation)
    }

    /// Bumps the activity of an atom.
    pub fn bump_activity(&mut self, atom: Atom) {
        if atom != TOP_ATOM {
            self.selector.bump(atom)
        }
    }

    /// Decays the activity of every atom, relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.selector.decay()
    }

    /// The activity of an atom.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        self.selector.activity_of(atom)
    }

    /// Notes an occurrence of a literal in an added clause.
    ///
    /// The activity of the atom is bumped, and the saved phase of the atom becomes the polarity with the most occurrences, with false on a tie.
    pub fn note_occurrence(&mut self, literal: CLiteral) {
        let atom = literal.atom();
        let Some(counts) = self.occurrences.get_mut(atom as usize) else {
            return;
        };
        counts[literal.polarity() as usize] += 1;
        self.previous_valuation[atom as usize] = counts[1] > counts[0];
        self.bump_activity(atom);
    }

    /// Noted occurrences of an atom, as a count of negative occurrences paired with a count of positive occurrences.
    pub fn occurrences_of(&self, atom: Atom) -> [usize; 2] {
        self.occurrences.get(atom as usize).copied().unwrap_or([0, 0])
    }

    /// The valuation, as a string of DIMACS literals, excluding top.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| {
                value.map(|polarity| CLiteral::new(atom as Atom, polarity).to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_and_phases() {
        let mut atom_db = AtomDB::new(&Config::default());
        assert_eq!(atom_db.value_of(TOP_ATOM), Some(true));

        let p = atom_db.fresh_atom().unwrap();
        let q = atom_db.fresh_atom().unwrap();
        assert_eq!((p, q), (1, 2));
        assert!(!atom_db.previous_value_of(p));

        assert_eq!(
            atom_db.set_value(CLiteral::new(p, true), 1, AssignmentSource::Decision),
            AtomValue::NotSet
        );
        assert_eq!(
            atom_db.set_value(CLiteral::new(p, true), 1, AssignmentSource::Decision),
            AtomValue::Same
        );
        assert_eq!(
            atom_db.set_value(CLiteral::new(p, false), 1, AssignmentSource::Decision),
            AtomValue::Different
        );
        assert_eq!(atom_db.level_of(p), Some(1));
        assert_eq!(atom_db.source_of(p), Some(AssignmentSource::Decision));
        assert_eq!(atom_db.valuation_string(), "1");

        atom_db.drop_value(p);
        assert_eq!(atom_db.value_of(p), None);
        assert_eq!(atom_db.level_of(p), None);
        assert!(atom_db.previous_value_of(p));
    }

    #[test]
    fn selection_ignores_top_and_valued_atoms() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..3 {
            atom_db.fresh_atom().unwrap();
        }
        atom_db.set_value(-1, 0, AssignmentSource::Decision);
        assert_eq!(atom_db.select_atom(), Some(2));

        atom_db.bump_activity(3);
        assert_eq!(atom_db.select_atom(), Some(3));
    }
}
