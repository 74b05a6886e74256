/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;
