/*!
Boolean constraint propagation, via watched literals.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal *l*.

Each clause watching -*l* is examined:
- If some other literal of the clause may be watched in place of -*l*, the watch is moved and the clause is dropped from the watch list of -*l*.
- Otherwise, the literal at index zero of the clause (the other watched literal) is inspected:
  + If the literal is false, the clause is false on the current valuation and a [conflict](err::BCPError::Conflict) is returned.
  + If the literal has no value, the literal is asserted by the clause and valued at the current level, with the clause as its reason.
  + If the literal is true, the clause is satisfied and nothing happens.

# Borrowing

The watch list of -*l* is [taken](crate::db::watches::Watches::take) for the duration of the traversal and [restored](crate::db::watches::Watches::restore) after.
This allows the clause database, the valuation, and other watch lists to be mutated during the traversal.
No watch is moved to -*l* during the traversal, as -*l* is false.

Moved watches are removed from the list by a swap with the last unexamined element, so the traversal is over an index and a shrinking length.

# Example

```rust,ignore
match self.bcp(literal) {
    Err(err::BCPError::Conflict(key)) => {
        if self.trail.decision_is_made() {
            let analysis_result = self.conflict_analysis(&key)?;
            ...
        }
    }
    ...
    Ok(()) => self.trail.q_head += 1,
}
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();
        let mut watch_list = self.watches.take(false_literal);

        let mut index = 0;
        let mut length = watch_list.len();
        let mut outcome = Ok(());

        'watch_loop: while index < length {
            let key = watch_list[index];

            let db_clause = match self.clause_db.get_mut(&key) {
                Ok(db_clause) => db_clause,
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch list of {false_literal} holds the dead key {key}");
                    outcome = Err(err::BCPError::CorruptWatch);
                    break 'watch_loop;
                }
            };

            if !db_clause.watched_literals().contains(&false_literal) {
                log::error!(target: targets::PROPAGATION, "{key} is not watching {false_literal}");
                outcome = Err(err::BCPError::CorruptWatch);
                break 'watch_loop;
            }

            match db_clause.update_watch(literal.atom(), &self.atom_db, &mut self.watches) {
                Some(_) => {
                    length -= 1;
                    watch_list.swap(index, length);
                    continue 'watch_loop;
                }

                None => {
                    let watch = db_clause[0];

                    match self.literal_value(watch) {
                        Some(false) => {
                            log::trace!(target: targets::PROPAGATION, "Conflict on {key} from {literal}");
                            outcome = Err(err::BCPError::Conflict(key));
                            break 'watch_loop;
                        }

                        None => {
                            log::trace!(target: targets::PROPAGATION, "{watch} from {key}");
                            self.record_assignment(watch, AssignmentSource::BCP(key));
                            self.counters.propagations += 1;
                        }

                        Some(true) => {}
                    }
                }
            }

            index += 1;
        }

        watch_list.truncate(length);
        self.watches.restore(false_literal, watch_list);
        outcome
    }

    /// Applies BCP to every literal on the trail awaiting propagation, in order, until either every literal has been propagated or a conflict is found.
    ///
    /// The literal on which a conflict is found remains at the head of the queue.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
            self.trail.q_head += 1;
        }
        Ok(())
    }
}
