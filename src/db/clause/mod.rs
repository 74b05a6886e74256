/*!
A database of clause related things.

The clause database stores, for each kind of clause:
- Unit clauses, as their literals.
- Original clauses with two or more literals, in a vector indexed by their [key](ClauseKey).
- Learned (addition) clauses with two or more literals, in a vector of optional clauses indexed by their key.
  When an addition is removed its slot is emptied, and the key is retokened for the next addition stored in the slot.

Additions are also indexed on an [IndexHeap] of [activity](activity_lbd::ActivityLBD), ordered so that the least active clause is at the top of the heap, for [reduction](ClauseDB::reduce_by).
*/

mod activity_lbd;
pub mod db_clause;
mod reduction;
mod store;

use activity_lbd::ActivityLBD;
use db_clause::DBClause;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config, LBD},
    db::{atom::AtomDB, keys::ClauseKey},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The activity above which the activity of all additions is rescaled.
const ACTIVITY_LIMIT: Activity = 1e20;

/// A callback made on a clause, e.g. on each learned clause.
pub type CallbackOnClause = dyn FnMut(&CClause);

/// The clause database.
pub struct ClauseDB {
    /// A local configuration, derived from the configuration of a context.
    config: ClauseDBConfig,

    /// The bump applied to the activity of an addition, growing with each decay.
    bump: Activity,

    /// Original unit clauses.
    unit_original: Vec<CLiteral>,

    /// Learned unit clauses.
    unit_addition: Vec<CLiteral>,

    /// Original clauses of two or more literals.
    original: Vec<DBClause>,

    /// Learned clauses of two or more literals, with empty slots for removed clauses.
    addition: Vec<Option<DBClause>>,

    /// Keys of empty addition slots, available for reuse.
    empty_keys: Vec<ClauseKey>,

    /// A count of stored additions of two or more literals.
    addition_count: usize,

    /// Activity of additions.
    activity_heap: IndexHeap<ActivityLBD>,

    /// A callback made on each learned clause, as stored.
    callback_addition: Option<Box<CallbackOnClause>>,
}

impl ClauseDB {
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),
            bump: config.clause_db.bump.value,

            unit_original: Vec::default(),
            unit_addition: Vec::default(),
            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),

            addition_count: 0,
            activity_heap: IndexHeap::default(),
            callback_addition: None,
        }
    }

    /// Sets a callback made on each learned clause, as the clause is stored.
    pub fn set_callback_addition(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_addition = Some(callback);
    }

    /// The clause of two or more literals of a key.
    ///
    /// Unit clauses are not stored as [DBClause]s, and a unit key returns an error.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(_) | ClauseKey::AdditionUnit(_) => {
                Err(err::ClauseDBError::GetUnitKey)
            }

            ClauseKey::Original(index) => match self.original.get(*index as usize) {
                Some(clause) => Ok(clause),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },

            ClauseKey::Addition(index, _) => match self.addition.get(*index as usize) {
                Some(Some(clause)) if clause.key() == *key => Ok(clause),
                Some(Some(_)) => Err(err::ClauseDBError::InvalidKeyToken),
                Some(None) => Err(err::ClauseDBError::Missing),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },
        }
    }

    /// The clause of two or more literals of a key, mutably.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(_) | ClauseKey::AdditionUnit(_) => {
                Err(err::ClauseDBError::GetUnitKey)
            }

            ClauseKey::Original(index) => match self.original.get_mut(*index as usize) {
                Some(clause) => Ok(clause),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },

            ClauseKey::Addition(index, _) => match self.addition.get_mut(*index as usize) {
                Some(Some(clause)) if clause.key() == *key => Ok(clause),
                Some(Some(_)) => Err(err::ClauseDBError::InvalidKeyToken),
                Some(None) => Err(err::ClauseDBError::Missing),
                None => Err(err::ClauseDBError::InvalidKeyIndex),
            },
        }
    }

    /// A count of all stored clauses, of every kind.
    pub fn total_count(&self) -> usize {
        self.unit_original.len()
            + self.unit_addition.len()
            + self.original.len()
            + self.addition_count
    }

    /// A count of original clauses, including units.
    pub fn original_count(&self) -> usize {
        self.unit_original.len() + self.original.len()
    }

    /// A count of stored learned clauses, including units.
    pub fn addition_count(&self) -> usize {
        self.unit_addition.len() + self.addition_count
    }

    /// A count of stored learned clauses of two or more literals.
    pub fn long_addition_count(&self) -> usize {
        self.addition_count
    }

    /// Every original clause, units included, in the order stored.
    ///
    /// Literals of clauses with two or more literals may have been reordered by the watch scheme.
    pub fn original_clauses(&self) -> impl Iterator<Item = CClause> + '_ {
        self.unit_original
            .iter()
            .map(|literal| vec![*literal])
            .chain(self.original.iter().map(|clause| clause.clause().clone()))
    }

    /// Every stored learned clause, units first.
    pub fn addition_clauses(&self) -> impl Iterator<Item = CClause> + '_ {
        self.unit_addition.iter().map(|literal| vec![*literal]).chain(
            self.addition
                .iter()
                .flatten()
                .map(|clause| clause.clause().clone()),
        )
    }

    /// Every stored clause with two or more literals.
    pub fn long_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original.iter().chain(self.addition.iter().flatten())
    }

    /// Whether the clause of `key` is the reason for the value of some atom.
    ///
    /// As clauses assert the literal at index zero, only the atom of that literal is inspected.
    pub fn is_reason(&self, key: &ClauseKey, atom_db: &AtomDB) -> bool {
        match self.get(key) {
            Ok(clause) => match clause.first() {
                Some(literal) => {
                    atom_db.source_of(literal.atom()) == Some(AssignmentSource::BCP(*key))
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Bumps the activity of an addition, if the key is to an addition.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        let ClauseKey::Addition(index, _) = key else {
            return;
        };
        let index = *index as usize;

        if self.activity_heap.value_at(index).activity + self.bump > ACTIVITY_LIMIT {
            self.rescale_activity();
        }
        let bump = self.bump;
        self.activity_heap.apply_to_value_at(index, |value| ActivityLBD {
            activity: value.activity + bump,
            lbd: value.lbd,
        });
        self.activity_heap.heapify_if_active(index);
    }

    /// Decays the activity of every addition, relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.bump *= 1.0 / (1.0 - self.config.decay.value);
        if self.bump > ACTIVITY_LIMIT {
            self.rescale_activity();
        }
    }

    fn rescale_activity(&mut self) {
        let factor = 1.0 / ACTIVITY_LIMIT;
        log::trace!(target: targets::CLAUSE_DB, "Rescaling clause activity");
        self.activity_heap.apply_to_all(|value| ActivityLBD {
            activity: value.activity * factor,
            lbd: value.lbd,
        });
        self.bump *= factor;
        self.activity_heap.heapify();
    }

    /// The LBD of an addition, if stored.
    pub fn lbd_of(&self, key: &ClauseKey) -> Option<LBD> {
        match key {
            ClauseKey::Addition(index, _) if self.get(key).is_ok() => {
                Some(self.activity_heap.value_at(*index as usize).lbd)
            }
            _ => None,
        }
    }

    /// The activity of an addition, if stored.
    pub fn activity_of(&self, key: &ClauseKey) -> Option<Activity> {
        match key {
            ClauseKey::Addition(index, _) if self.get(key).is_ok() => {
                Some(self.activity_heap.value_at(*index as usize).activity)
            }
            _ => None,
        }
    }
}

impl ClauseDB {
    /// The clause of a key, as a clause, units included.
    pub fn clause_of(&self, key: &ClauseKey) -> Result<CClause, err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(literal) | ClauseKey::AdditionUnit(literal) => {
                Ok(vec![*literal])
            }
            _ => Ok(self.get(key)?.clause().clone()),
        }
    }
}
