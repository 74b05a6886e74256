/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

Alternatively, a formula in DIMACS form may be [read](crate::context::GenericContext::read_dimacs) into a context.

# Adding clauses

Clauses may be added before a solve, or after a solve to extend the formula.
In the latter case any decisions from the solve are cleared, though clauses learned during the solve are kept.

When added, a clause is:
- Deduplicated, and skipped if the clause is a tautology.
- Checked to contain only atoms of the context.
- Stripped of any literal false at level zero, as such literals can never be true.

If this leaves the empty clause, the formula is unsatisfiable and the context is marked as such.
If this leaves a unit clause, the literal of the clause is valued at level zero.

# Examples

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable)
```

Tautologies are noted, and skipped.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::builder::ClauseOk;
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();

assert_eq!(the_context.add_clause(vec![p, q, -p]), Ok(ClauseOk::Tautology));
assert_eq!(the_context.add_clause(vec![p, q, p]), Ok(ClauseOk::Added));
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

mod preprocess;
mod structures;

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}
