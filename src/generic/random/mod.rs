//! Sources of randomness.
//!
//! A context is generic over its source of randomness, though the [Context](crate::context::Context) type fixes [MinimalPCG32].
//!
//! Randomness is only drawn when configured: a non-zero random decision bias, or a decision on polarity without phase saving.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
