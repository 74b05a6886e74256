//! Configuration of databases, derived from the configuration of a context.

use super::{Activity, ConfigOption, LBD};
use crate::db::keys::FormulaIndex;

/// Configuration for the atom database.
#[derive(Clone)]
pub struct AtomDBConfig {
    /// The amount by which the activity of an atom is bumped, before adjustment.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of all atoms each conflict.
    ///
    /// Implemented as growth of the bump by `1 / (1 - decay)`.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: 0.0,
                max: 1e50,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                value: 0.05,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone)]
pub struct ClauseDBConfig {
    /// The amount by which the activity of a clause is bumped, before adjustment.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of all clauses each conflict.
    pub decay: ConfigOption<Activity>,

    /// Any clauses with lbd within the lbd bound (lbd ≤ bound) will not be removed from the clause database.
    pub lbd_bound: ConfigOption<LBD>,

    /// The maximum number of clauses stored, of any kind.
    pub clause_limit: ConfigOption<usize>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: 0.0,
                max: 1e50,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 0.5,
                value: 1e-3,
            },

            lbd_bound: ConfigOption {
                name: "lbd_bound",
                min: LBD::MIN,
                max: LBD::MAX,
                value: 2,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 0,
                max: FormulaIndex::MAX as usize,
                value: FormulaIndex::MAX as usize,
            },
        }
    }
}
