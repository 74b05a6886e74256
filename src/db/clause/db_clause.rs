//! A struct holding a [clause](Clause) and associated metadata.
//!
//! # Terminology
//! ## Watch candidate
//!   - A literal whose atom, on the current valuation, either has no value, or has a value equal to the polarity of the literal.
//!
//! ## Watched literals
//!
//! Two distinguished watch candidates, if two exist.
//! Watches are initialised for any clause containing two or more literals.
//!
//! The literals watched are the *first* literal in the clause (watch A) and the literal at the position of `watch_ptr` (watch B).
//! In order to preserve this, the order of literals in the clause is mutated as needed.
//!
//! The approach follows [Optimal implementation of watched literals and more general techniques](https://www.jair.org/index.php/jair/article/view/10839):
//! - When a watched literal becomes false watch A is swapped to be the *other* watched literal, so the literal at index zero is the literal the clause asserts, if any.
//! - Then the index of watch B makes a circular sweep forward over the clause (skipping watch A) in search of a new watch candidate.
//!   The index is updated if some candidate is found, and remains unchanged otherwise.

use std::ops::Deref;

use crate::{
    db::{atom::AtomDB, keys::ClauseKey, watches::WatchStatus, watches::Watches},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// A clause together with some metadata.
pub struct DBClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The index of watch B.
    watch_ptr: usize,
}

impl DBClause {
    /// Bundles a [ClauseKey] and [Clause] into a [DBClause], and initialises watches with respect to the current valuation.
    ///
    /// The clause must contain at least two literals.
    ///
    /// If every literal is false, the first literal is watch A and the literal at index one is watch B.
    /// Learned clauses rely on this, being stored with the asserting literal first and a literal of the backjump level second.
    pub fn new(key: ClauseKey, clause: CClause, atom_db: &AtomDB, watches: &mut Watches) -> Self {
        let mut db_clause = DBClause {
            key,
            clause,
            watch_ptr: 1,
        };

        db_clause.initialise_watches(atom_db, watches);

        db_clause
    }

    /// The key used to access the [DBClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The two watched literals, watch A first.
    pub fn watched_literals(&self) -> [CLiteral; 2] {
        [self.clause[0], self.clause[self.watch_ptr]]
    }

    fn is_candidate(literal: CLiteral, atom_db: &AtomDB) -> bool {
        match atom_db.value_of(literal.atom()) {
            None => true,
            Some(value) => value == literal.polarity(),
        }
    }

    fn initialise_watches(&mut self, atom_db: &AtomDB, watches: &mut Watches) {
        if let Some(index) = self
            .clause
            .iter()
            .position(|literal| Self::is_candidate(*literal, atom_db))
        {
            self.clause.swap(0, index);
        }

        self.watch_ptr = 1;
        if let Some(offset) = self.clause[1..]
            .iter()
            .position(|literal| Self::is_candidate(*literal, atom_db))
        {
            self.watch_ptr = offset + 1;
        }

        watches.watch(self.clause[0], self.key);
        watches.watch(self.clause[self.watch_ptr], self.key);
    }

    /// On the assumption `atom` is the atom of a watched literal which has become false, updates the watched literals.
    ///
    /// Returns the status of the fresh watch if moved, and None if no replacement watch exists.
    /// In either case, the literal at index zero is the other watched literal.
    ///
    /// If moved, the clause is no longer on the watch list of the false literal, and it is for the caller to remove it from that list.
    pub fn update_watch(
        &mut self,
        atom: Atom,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Option<WatchStatus> {
        if self.clause[0].atom() == atom {
            self.clause.swap(0, self.watch_ptr);
        }

        let watch_ptr_cache = self.watch_ptr;
        let clause_length = self.clause.len();
        loop {
            self.watch_ptr += 1;
            if self.watch_ptr == clause_length {
                self.watch_ptr = 1;
            }
            if self.watch_ptr == watch_ptr_cache {
                break None;
            }

            let literal = self.clause[self.watch_ptr];
            match atom_db.value_of(literal.atom()) {
                None => {
                    watches.watch(literal, self.key);
                    break Some(WatchStatus::Unvalued);
                }

                Some(value) if value == literal.polarity() => {
                    watches.watch(literal, self.key);
                    break Some(WatchStatus::Witness);
                }

                Some(_) => {}
            }
        }
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs(false))
    }
}

impl Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::consequence::AssignmentSource};

    fn atom_db_with(atoms: usize) -> AtomDB {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..atoms {
            atom_db.fresh_atom().unwrap();
        }
        atom_db
    }

    #[test]
    fn initial_watches_prefer_candidates() {
        let mut atom_db = atom_db_with(4);
        let mut watches = Watches::default();
        atom_db.set_value(-1, 0, AssignmentSource::Decision);
        atom_db.set_value(-2, 0, AssignmentSource::Decision);

        let key = ClauseKey::Original(0);
        let clause = DBClause::new(key, vec![1, 2, 3, 4], &atom_db, &mut watches);

        assert_eq!(clause.watched_literals(), [3, 4]);
        assert_eq!(watches.watchers(3), &[key]);
        assert_eq!(watches.watchers(4), &[key]);
        assert!(watches.watchers(1).is_empty());
    }

    #[test]
    fn all_false_watches_first_two() {
        let mut atom_db = atom_db_with(3);
        let mut watches = Watches::default();
        for literal in [-1, -2, -3] {
            atom_db.set_value(literal, 1, AssignmentSource::Decision);
        }

        let clause = DBClause::new(ClauseKey::Addition(0, 0), vec![1, 2, 3], &atom_db, &mut watches);
        assert_eq!(clause.watched_literals(), [1, 2]);
    }

    #[test]
    fn update_sweeps_for_candidates() {
        let mut atom_db = atom_db_with(4);
        let mut watches = Watches::default();
        let key = ClauseKey::Original(0);
        let mut clause = DBClause::new(key, vec![1, 2, 3, 4], &atom_db, &mut watches);
        assert_eq!(clause.watched_literals(), [1, 2]);

        atom_db.set_value(-1, 1, AssignmentSource::Decision);
        assert_eq!(
            clause.update_watch(1, &atom_db, &mut watches),
            Some(WatchStatus::Unvalued)
        );
        assert_eq!(clause.watched_literals(), [2, 3]);

        atom_db.set_value(4, 1, AssignmentSource::Decision);
        atom_db.set_value(-3, 1, AssignmentSource::Decision);
        assert_eq!(
            clause.update_watch(3, &atom_db, &mut watches),
            Some(WatchStatus::Witness)
        );
        assert_eq!(clause.watched_literals(), [2, 4]);

        atom_db.set_value(-2, 1, AssignmentSource::Decision);
        assert_eq!(clause.update_watch(2, &atom_db, &mut watches), None);
        assert_eq!(clause[0], 4);
    }
}
