//! Atoms, the variables of a formula.
//!
//! Atoms are unsigned integers, used directly as indices into the structures of a context.
//!
//! Atom `0` is reserved as [TOP_ATOM], valued true at level zero when a context is created.
//! It never appears in a clause, is never decided on, and is omitted from models.
//! So, the atoms of a formula over `n` variables are `1..=n`, matching the DIMACS convention.

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom which stands for the true constant.
pub const TOP_ATOM: Atom = 0;

/// The largest atom which may be represented by an integer literal.
pub const ATOM_MAX: Atom = i32::MAX as Atom;
