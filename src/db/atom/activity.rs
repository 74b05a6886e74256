//! Activity of atoms, as used by [VSIDS](crate::config::vsids).
//!
//! Activities live on an [IndexHeap], where any atom without a value is active on the heap.
//! Rather than decaying the activity of every atom after each conflict, the bump grows, and all activities are rescaled when the bump would exceed [ACTIVITY_LIMIT].

use crate::{
    config::{dbs::AtomDBConfig, Activity},
    generic::index_heap::IndexHeap,
    structures::{atom::Atom, valuation::CValuation},
};

use super::selector::AtomSelector;

/// The activity above which all activities are rescaled.
pub const ACTIVITY_LIMIT: Activity = 1e100;

/// Selects the atom without a value with the highest activity, with ties broken by the lowest atom.
pub struct ActivitySelector {
    heap: IndexHeap<Activity>,
    bump: Activity,
    decay_factor: Activity,
}

impl ActivitySelector {
    pub fn new(config: &AtomDBConfig) -> Self {
        ActivitySelector {
            heap: IndexHeap::default(),
            bump: config.bump.value,
            decay_factor: 1.0 / (1.0 - config.decay.value),
        }
    }

    /// Rescales the activity of all atoms, and the bump.
    fn rescale(&mut self) {
        let factor = 1.0 / ACTIVITY_LIMIT;
        self.heap.apply_to_all(|activity| activity * factor);
        self.bump *= factor;
        self.heap.heapify();
    }
}

impl AtomSelector for ActivitySelector {
    fn add_atom(&mut self, atom: Atom) {
        self.heap.add(atom as usize, 0.0);
        self.heap.activate(atom as usize);
    }

    fn release(&mut self, atom: Atom) {
        self.heap.activate(atom as usize);
    }

    fn select(&mut self, valuation: &CValuation) -> Option<Atom> {
        // Atoms with some value stay off the heap until released.
        while let Some(index) = self.heap.pop_max() {
            if let Some(None) = valuation.get(index) {
                return Some(index as Atom);
            }
        }
        None
    }

    fn bump(&mut self, atom: Atom) {
        let index = atom as usize;
        if *self.heap.value_at(index) + self.bump > ACTIVITY_LIMIT {
            self.rescale();
        }
        let bump = self.bump;
        self.heap.apply_to_value_at(index, |activity| activity + bump);
        self.heap.heapify_if_active(index);
    }

    fn decay(&mut self) {
        self.bump *= self.decay_factor;
        if self.bump > ACTIVITY_LIMIT {
            self.rescale();
        }
    }

    fn activity_of(&self, atom: Atom) -> Activity {
        *self.heap.value_at(atom as usize)
    }
}
