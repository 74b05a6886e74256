/*!
The context, to which formulas are added and within which solves take place.

A [GenericContext] is parameterised by its source of randomness, and [Context] fixes that source to [MinimalPCG32](crate::generic::random::MinimalPCG32), seeded from the configuration.

All state of a solve lives in the context, and there is no global state, so independent contexts may be used on separate threads.

# Example
```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a context.
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress, or was interrupted, and the consistency of the formula is unknown.
    Solving,

    /// The formula is known to be consistent, with a complete valuation satisfying every clause.
    Satisfiable,

    /// The formula is known to be inconsistent.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
