//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is a signed integer, [CLiteral], with the sign giving the polarity.
//!
//! ```rust
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().negate(), literal);
//! ```

mod int_literal;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// A dense index of the literal, distinct for each atom-polarity pair.
    ///
    /// Used to index watch lists: `2 * atom + polarity`.
    fn index(&self) -> usize {
        (2 * self.atom() as usize) + self.polarity() as usize
    }
}

/// A literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;
