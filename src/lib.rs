//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! marten_sat is a conflict-driven clause-learning (CDCL) solver.
//! Given a formula, the solver either finds a valuation satisfying every clause of the formula, or derives a conflict without any decision and so establishes the formula is unsatisfiable.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programmatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is viewed in terms of manipulation of, and relationships between, a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation is stored in an [atom database](crate::db::atom).
//! - The order in which atoms were valued is stored on the [trail](crate::db::trail).
//! - Which clauses watch which literals is stored in [watch lists](crate::db::watches).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms.
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//! let characters = "model".chars().collect::<Vec<_>>();
//! for _ in &characters {
//!     assert!(the_context.fresh_atom().is_ok())
//! }
//!
//! let mut count = 0;
//!
//! while let Ok(Report::Satisfiable) = the_context.solve() {
//!     count += 1;
//!
//!     let Some(model) = the_context.model() else { break };
//!     let blocking_clause = model.iter().map(|literal| literal.negate()).collect::<Vec<_>>();
//!
//!     if the_context.add_clause(blocking_clause).is_err() {
//!         break;
//!     }
//! }
//!
//! assert_eq!(count, 2_usize.pow(characters.len() as u32));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! The library never installs a logger.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of reduction count without information about the clauses removed can be found with `RUST_LOG=reduction=info …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod resolution_buffer;

pub mod misc;
