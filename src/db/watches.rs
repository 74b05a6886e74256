/*!
Watch lists, recording which clauses watch which literals.

Each literal has a list of the keys of (long) clauses for which the literal is one of the two watched literals.
Lists are indexed by the [index](crate::structures::literal::Literal::index) of a literal.

When a literal becomes false the list of the literal is traversed during [BCP](crate::procedures::bcp).
To allow the clause database and other lists to be mutated during traversal, the list is [taken](Watches::take) and later [restored](Watches::restore).
No clause gains a watch on the taken list during traversal, as watches are only ever moved to literals which are not false.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// The status of a watched literal, after a watch has been moved to the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// The literal is true on the current valuation, and so witnesses the clause being satisfied.
    Witness,

    /// The atom of the literal has no value.
    Unvalued,
}

#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Ensures a list exists for either literal of `atom`.
    pub fn grow_to_include(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
        }
    }

    /// Notes the clause of `key` watches `literal`.
    ///
    /// The counterpart of [unwatch](Watches::unwatch).
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.grow_to_include(literal.atom());
        self.lists[literal.index()].push(key);
    }

    /// Removes the note that the clause of `key` watches `literal`.
    ///
    /// The counterpart of [watch](Watches::watch).
    pub fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        let list = match self.lists.get_mut(literal.index()) {
            Some(list) => list,
            None => return Err(err::ClauseDBError::MissingWatch),
        };

        match list.iter().position(|watcher| *watcher == key) {
            Some(position) => {
                list.swap_remove(position);
                Ok(())
            }

            None => {
                log::error!(target: targets::CLAUSE_DB, "No watch of {literal} by {key}");
                Err(err::ClauseDBError::MissingWatch)
            }
        }
    }

    /// The keys of clauses watching `literal`.
    pub fn watchers(&self, literal: CLiteral) -> &[ClauseKey] {
        match self.lists.get(literal.index()) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Takes the list of keys watching `literal`, leaving an empty list until the list is [restored](Watches::restore).
    pub fn take(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        match self.lists.get_mut(literal.index()) {
            Some(list) => std::mem::take(list),
            None => Vec::default(),
        }
    }

    /// Restores a list of keys watching `literal`.
    ///
    /// Any keys added to the list while taken follow the restored keys.
    pub fn restore(&mut self, literal: CLiteral, list: Vec<ClauseKey>) {
        self.grow_to_include(literal.atom());
        let added = std::mem::replace(&mut self.lists[literal.index()], list);
        self.lists[literal.index()].extend(added);
    }
}
