//! Why an atom has the value it has.

use crate::db::ClauseKey;

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssignmentSource {
    /// A free choice made by the decision heuristic.
    Decision,

    /// A consequence of boolean constraint propagation, with the clause that asserted the literal.
    BCP(ClauseKey),

    /// A unit clause, original or learned, asserted at level zero.
    Unit(ClauseKey),
}
