/*!
Schedulers, used to interrupt a solve for some task after a conflict.

- Restarts, as scheduled by the [restart schedule](crate::generic::restart) of a context.
- Reduction of learned clauses, every [reduction_interval](crate::config::Config::reduction_interval) conflicts.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Notes a conflict with the restart schedule, and restarts if a restart is due.
    ///
    /// Returns whether a restart was made.
    pub fn restart_if_due(&mut self) -> bool {
        match self.restart_schedule.conflict() {
            true => {
                self.restart();
                true
            }
            false => false,
        }
    }

    /// Backjumps to level zero, keeping every clause.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.restarts += 1;
        self.counters.fresh_conflicts = 0;
        log::info!(target: targets::RESTART, "Restart {}", self.counters.restarts);
    }

    /// Whether a reduction is due, given the conflicts so far.
    pub fn reduction_is_due(&self) -> bool {
        let interval = self.config.reduction_interval.value as usize;
        interval != 0 && self.counters.total_conflicts % interval == 0
    }

    /// Removes the configured proportion of learned clauses of two or more literals, least active first.
    ///
    /// Reasons for the value of some atom and clauses within the lbd bound are kept, and so fewer clauses may be removed.
    pub fn reduce(&mut self) -> Result<usize, err::ErrorKind> {
        let count = (self.clause_db.long_addition_count() as f64
            * self.config.reduction_ratio.value) as usize;

        let removed = self
            .clause_db
            .reduce_by(count, &self.atom_db, &mut self.watches)?;
        self.counters.reductions += 1;
        Ok(removed)
    }
}
