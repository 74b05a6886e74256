/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.
*/

use super::GenericContext;
use crate::db::clause::CallbackOnClause;

/// A callback polled between decisions, which terminates a solve if true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback polled between decisions, with the solve stopped with an unknown result on true.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Sets a callback made on each learned clause, as the clause is stored.
    ///
    /// Learned clauses are stored with the asserting literal first.
    pub fn set_callback_addition(&mut self, callback: Box<CallbackOnClause>) {
        self.clause_db.set_callback_addition(callback);
    }

    /// Polls the terminate callback, if set.
    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
