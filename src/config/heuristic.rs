use crate::types::err::ConfigError;

/// How to choose the atom of a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum DecisionHeuristic {
    /// The atom without a value with the highest activity, with ties broken by the lowest atom.
    Activity,

    /// The lowest atom without a value.
    FixedOrder,
}

impl DecisionHeuristic {
    pub const MIN: DecisionHeuristic = DecisionHeuristic::Activity;
    pub const MAX: DecisionHeuristic = DecisionHeuristic::FixedOrder;
}

impl std::fmt::Display for DecisionHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Activity => write!(f, "activity"),
            Self::FixedOrder => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DecisionHeuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activity" | "vsids" => Ok(Self::Activity),
            "fixed" | "fixed_order" => Ok(Self::FixedOrder),
            _ => Err(ConfigError::Value("decision_heuristic")),
        }
    }
}
