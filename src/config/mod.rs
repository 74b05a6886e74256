/*!
Configuration of a context.

All configuration of a context is contained in a [Config], given when the context is created.
Databases take a copy of the parts of the configuration relevant to them.

Each option is a [ConfigOption], pairing the value of the option with a name and bounds, so options may be set by name and validated (e.g. by the CLI).

The default configuration is tuned to give quick, deterministic, results.
In particular, no randomness is used unless requested through [random_decision_bias](Config::random_decision_bias) or by disabling [phase_saving](Config::phase_saving).

```rust
# use marten_sat::config::{Config, RestartPolicy};
let mut config = Config::default();
config.restart_policy.value = RestartPolicy::Off;
assert!(config.reduction_ratio.set_bounded(0.25));
assert!(!config.reduction_ratio.set_bounded(1.5));
```
*/

mod activity;
pub use activity::Activity;

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod heuristic;
pub use heuristic::DecisionHeuristic;

mod lbd;
pub use lbd::LBD;

mod restart;
pub use restart::RestartPolicy;

mod rng;
pub use rng::{PolarityLean, RandomDecisionBias};

pub mod vsids;
use vsids::VSIDS;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Stop with an unknown result after this many conflicts, if non-zero.
    pub conflict_limit: ConfigOption<usize>,

    /// How to choose the atom of a decision.
    pub decision_heuristic: ConfigOption<DecisionHeuristic>,

    /// Seed the activity and saved phase of atoms from occurrences in added clauses.
    ///
    /// Each occurrence of an atom bumps the activity of the atom, and the saved phase of the atom is the polarity with the most occurrences (false on a tie).
    pub occurrence_seeding: ConfigOption<bool>,

    /// Default to the last value of an atom when choosing a value for the atom, otherwise decide with the polarity lean.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing a value without a saved phase.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of deciding on a uniformly random atom without a value, rather than following the decision heuristic.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Reduce the learned clauses every this many conflicts, if non-zero.
    pub reduction_interval: ConfigOption<u32>,

    /// The proportion of learned clauses to remove on a reduction.
    pub reduction_ratio: ConfigOption<f64>,

    /// When to restart.
    pub restart_policy: ConfigOption<RestartPolicy>,

    /// The seed for the source of randomness of a context.
    pub seed: ConfigOption<u64>,

    /// Stop with an unknown result once a solve has taken this long, if non-zero.
    pub time_limit: ConfigOption<Duration>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            decision_heuristic: ConfigOption {
                name: "decision_heuristic",
                min: DecisionHeuristic::MIN,
                max: DecisionHeuristic::MAX,
                value: DecisionHeuristic::Activity,
            },

            occurrence_seeding: ConfigOption {
                name: "occurrence_seeding",
                min: false,
                max: true,
                value: false,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            reduction_interval: ConfigOption {
                name: "reduction_interval",
                min: 0,
                max: u32::MAX,
                value: 2000,
            },

            reduction_ratio: ConfigOption {
                name: "reduction_ratio",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            restart_policy: ConfigOption {
                name: "restart_policy",
                min: RestartPolicy::MIN,
                max: RestartPolicy::MAX,
                value: RestartPolicy::Luby { unit: 128 },
            },

            seed: ConfigOption {
                name: "seed",
                min: 0,
                max: u64::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            vsids_variant: ConfigOption {
                name: "vsids_variant",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                value: VSIDS::MiniSAT,
            },
        }
    }
}
