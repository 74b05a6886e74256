//! Abstract structures of a solve, and their canonical representations.
//!
//! - [Atoms](atom) are the variables of a formula.
//! - [Literals](literal) pair an atom with a polarity.
//! - [Clauses](clause) are disjunctions of literals.
//! - [Valuations](valuation) map atoms to (optional) values.
//! - [Consequences](consequence) record why an atom has the value it has.

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
pub mod valuation;
