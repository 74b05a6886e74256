use crate::{
    config::LBD,
    db::{
        atom::AtomDB,
        clause::{activity_lbd::ActivityLBD, db_clause::DBClause, ClauseDB},
        keys::{ClauseKey, FormulaIndex},
        watches::Watches,
    },
    misc::log::targets::{self},
    structures::clause::{CClause, Clause, ClauseSource},
    types::err::{self},
};

impl ClauseDB {
    /// Stores a clause with an automatically generated key.
    ///
    /// - Unit clauses are stored as literals, without watches.
    /// - Clauses of two or more literals are stored as [DBClause]s, with watches initialised on the current valuation.
    ///
    /// Learned clauses (with source [Resolution](ClauseSource::Resolution)) should be stored with the asserting literal first, followed by a literal from the backjump level.
    ///
    /// The LBD of an addition is `lbd`, if given, and otherwise the LBD of the clause on the current valuation.
    /// As learned clauses are stored after a backjump, their LBD should be taken before the backjump and given.
    ///
    /// An empty clause is never stored, and an error is returned instead.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        lbd: Option<LBD>,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if self.total_count() >= self.config.clause_limit.value {
            log::error!(target: targets::CLAUSE_DB, "Clause limit of {} reached", self.config.clause_limit.value);
            return Err(err::ClauseDBError::StorageExhausted);
        }

        let key = match clause.len() {
            0 => return Err(err::ClauseDBError::EmptyClause),

            1 => {
                let literal = clause[0];
                match source {
                    ClauseSource::Original => {
                        self.unit_original.push(literal);
                        ClauseKey::OriginalUnit(literal)
                    }

                    ClauseSource::Resolution => {
                        self.unit_addition.push(literal);
                        ClauseKey::AdditionUnit(literal)
                    }
                }
            }

            _ => match source {
                ClauseSource::Original => {
                    let Ok(index) = FormulaIndex::try_from(self.original.len()) else {
                        log::error!(target: targets::CLAUSE_DB, "Original keys exhausted");
                        return Err(err::ClauseDBError::StorageExhausted);
                    };
                    let key = ClauseKey::Original(index);
                    self.original
                        .push(DBClause::new(key, clause.clone(), atom_db, watches));
                    key
                }

                ClauseSource::Resolution => {
                    let key = self.fresh_addition_key()?;
                    let lbd = lbd.unwrap_or_else(|| clause.lbd(atom_db));
                    let index = key.index();

                    self.addition[index] = Some(DBClause::new(key, clause.clone(), atom_db, watches));
                    self.addition_count += 1;

                    self.activity_heap.add(
                        index,
                        ActivityLBD {
                            activity: self.bump,
                            lbd,
                        },
                    );
                    self.activity_heap.activate(index);
                    key
                }
            },
        };

        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));

        if matches!(source, ClauseSource::Resolution) {
            if let Some(callback) = &mut self.callback_addition {
                callback(&clause);
            }
        }

        Ok(key)
    }

    /// A key for an addition, reusing an empty slot if possible.
    fn fresh_addition_key(&mut self) -> Result<ClauseKey, err::ClauseDBError> {
        while let Some(key) = self.empty_keys.pop() {
            match key.retoken() {
                Ok(key) => return Ok(key),
                // The slot has been used as often as tokens allow, and is left empty.
                Err(_) => continue,
            }
        }

        match FormulaIndex::try_from(self.addition.len()) {
            Ok(index) => {
                self.addition.push(None);
                Ok(ClauseKey::Addition(index, 0))
            }

            Err(_) => {
                log::error!(target: targets::CLAUSE_DB, "Addition keys exhausted");
                Err(err::ClauseDBError::StorageExhausted)
            }
        }
    }

    /// Removes an addition, and any watches of the addition.
    pub fn remove_addition(
        &mut self,
        key: &ClauseKey,
        watches: &mut Watches,
    ) -> Result<(), err::ClauseDBError> {
        let ClauseKey::Addition(index, _) = key else {
            return Err(err::ClauseDBError::InvalidKeyIndex);
        };
        let index = *index as usize;

        // Checks the token.
        self.get(key)?;

        let Some(clause) = self.addition[index].take() else {
            return Err(err::ClauseDBError::Missing);
        };

        for literal in clause.watched_literals() {
            watches.unwatch(literal, *key)?;
        }

        self.activity_heap.remove(index);
        self.empty_keys.push(*key);
        self.addition_count -= 1;

        log::trace!(target: targets::CLAUSE_DB, "Removed {key}");
        Ok(())
    }
}
