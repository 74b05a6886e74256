use std::ops::Deref;

use crate::structures::{atom::Atom, valuation::Valuation};

impl<T: Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().skip(1).copied()
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
