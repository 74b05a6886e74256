use crate::{
    db::{atom::AtomDB, clause::ClauseDB, keys::ClauseKey, watches::Watches},
    misc::log::targets::{self},
    types::err::{self},
};

impl ClauseDB {
    /// Removes up to `count` additions, least active first, returning how many were removed.
    ///
    /// An addition is kept if:
    /// - The lbd of the addition is within the lbd bound, or
    /// - The addition is the reason for the value of some atom.
    ///
    /// Unit additions are never removed.
    pub fn reduce_by(
        &mut self,
        count: usize,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<usize, err::ClauseDBError> {
        let mut kept = Vec::default();
        let mut removed = 0;

        while removed < count {
            let Some(index) = self.activity_heap.pop_max() else {
                break;
            };

            let key = match &self.addition[index] {
                Some(clause) => clause.key(),
                None => {
                    log::error!(target: targets::REDUCTION, "Missing addition {index} on the activity heap");
                    return Err(err::ClauseDBError::Missing);
                }
            };

            if self.activity_heap.value_at(index).lbd <= self.config.lbd_bound.value
                || self.is_reason(&key, atom_db)
            {
                kept.push(index);
                continue;
            }

            self.remove_addition(&key, watches)?;
            removed += 1;
        }

        for index in kept {
            self.activity_heap.activate(index);
        }

        log::info!(target: targets::REDUCTION, "Removed {removed} additions");
        Ok(removed)
    }

    /// Keys of stored additions of two or more literals, in order of storage slot.
    pub fn addition_keys(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.addition.iter().flatten().map(|clause| clause.key())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        db::ClauseKey,
        structures::{clause::ClauseSource, consequence::AssignmentSource, literal::CLiteral},
    };

    fn learn(context: &mut Context, clause: Vec<CLiteral>) -> ClauseKey {
        context
            .clause_db
            .store(
                clause,
                ClauseSource::Resolution,
                None,
                &context.atom_db,
                &mut context.watches,
            )
            .unwrap()
    }

    #[test]
    fn reasons_and_low_lbd_are_kept() {
        let mut context = Context::from_config(Config::default());
        let _ = context.fresh_or_max_literals(6);

        for literal in [-1, -2, -3] {
            context.trail.push_level();
            context.record_assignment(literal, AssignmentSource::Decision);
        }

        let reason = learn(&mut context, vec![4, 1, 2, 3]);
        let removable = learn(&mut context, vec![5, 1, 2, 3]);
        let glue = learn(&mut context, vec![6, 1, 2]);

        context.record_assignment(4, AssignmentSource::BCP(reason));

        let removed = context
            .clause_db
            .reduce_by(3, &context.atom_db, &mut context.watches)
            .unwrap();
        assert_eq!(removed, 1);

        let keys = context.clause_db.addition_keys().collect::<Vec<_>>();
        assert_eq!(keys, vec![reason, glue]);
        assert!(context.clause_db.get(&removable).is_err());

        for atom in 1..=6 {
            for literal in [atom, -atom] {
                assert!(!context.watches.watchers(literal).contains(&removable));
            }
        }
    }
}
