use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::{random::MinimalPCG32, restart::schedule_for},
    resolution_buffer::ResolutionBuffer,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            resolution_buffer: ResolutionBuffer::default(),
            restart_schedule: schedule_for(&config.restart_policy.value),
            rng: MinimalPCG32::from_seed(config.seed.value.to_le_bytes()),

            config,

            counters: Counters::default(),
            state: ContextState::Input,
            trail: Trail::default(),
            watches: Watches::default(),

            callback_terminate: None,
        }
    }
}
