//! Strategies for choosing the atom of a decision.
//!
//! A selector is told of each fresh atom and of each atom whose value is cleared, and is asked for an atom without a value when a decision is to be made.
//! Selectors which do not track activity ignore bumps.

use crate::{
    config::Activity,
    structures::{atom::Atom, valuation::CValuation},
};

/// A strategy for choosing an atom without a value.
pub trait AtomSelector {
    /// Notes a fresh atom, without a value.
    fn add_atom(&mut self, atom: Atom);

    /// Notes the value of an atom has been cleared, and so the atom is again a candidate.
    fn release(&mut self, atom: Atom);

    /// The preferred atom without a value on the valuation, if any.
    fn select(&mut self, valuation: &CValuation) -> Option<Atom>;

    /// Bumps the activity of an atom.
    fn bump(&mut self, atom: Atom);

    /// Decays the activity of all atoms, relative to future bumps.
    fn decay(&mut self);

    /// The activity of an atom.
    fn activity_of(&self, atom: Atom) -> Activity;
}

/// Selects the lowest atom without a value.
///
/// Every atom below the cursor has some value.
#[derive(Default)]
pub struct FixedOrderSelector {
    cursor: usize,
}

impl AtomSelector for FixedOrderSelector {
    fn add_atom(&mut self, atom: Atom) {
        self.cursor = std::cmp::min(self.cursor, atom as usize);
    }

    fn release(&mut self, atom: Atom) {
        self.cursor = std::cmp::min(self.cursor, atom as usize);
    }

    fn select(&mut self, valuation: &CValuation) -> Option<Atom> {
        // The top atom at index 0 is always valued, so is never selected.
        while let Some(value) = valuation.get(self.cursor) {
            match value {
                None => return Some(self.cursor as Atom),
                Some(_) => self.cursor += 1,
            }
        }
        None
    }

    fn bump(&mut self, _atom: Atom) {}

    fn decay(&mut self) {}

    fn activity_of(&self, _atom: Atom) -> Activity {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order() {
        let mut selector = FixedOrderSelector::default();
        let mut valuation = vec![Some(true), None, None, None];
        for atom in 1..4 {
            selector.add_atom(atom);
        }

        assert_eq!(selector.select(&valuation), Some(1));
        valuation[1] = Some(false);
        valuation[2] = Some(true);
        assert_eq!(selector.select(&valuation), Some(3));
        valuation[3] = Some(true);
        assert_eq!(selector.select(&valuation), None);

        valuation[2] = None;
        selector.release(2);
        assert_eq!(selector.select(&valuation), Some(2));
    }
}
