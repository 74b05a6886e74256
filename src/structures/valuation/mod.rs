/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index element is true, interpreted as the [top atom](crate::structures::atom::TOP_ATOM).
- Each non-zero index of the vector is interpreted as an atom.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use marten_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
```
*/

mod slice_impl;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    ///
    /// The outer option is `None` if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator over the values of atoms in the valuation, in strict, contiguous, atom order, excluding top.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through all (Atom, Value) pairs such that the atom has some value (excluding top).
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation (including top).
    fn atom_count(&self) -> usize;
}
