/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* without a value with some value *v*, represented as the literal with atom *a* and polarity *v*.
Each decision opens a fresh level on the trail.

# Choosing an atom

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom without a value is chosen uniformly at random.
Otherwise, the [selector](crate::db::atom::selector::AtomSelector) of the atom database chooses, either:
- The most active atom without a value, with ties broken by the lowest atom, or
- The lowest atom without a value.

# Choosing a value

If [phase saving](crate::config::Config::phase_saving) is enabled, the last value of the atom is used (with false for an atom never valued).
Otherwise, the value is true with probability [polarity_lean](crate::config::Config::polarity_lean).

With a random decision bias of zero and phase saving enabled, no randomness is used.
*/

use rand::seq::IteratorRandom;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom, as the literal.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an atom without a value and a value for the atom, and records the choice as a decision on a fresh level.
    pub fn make_decision(&mut self) -> DecisionOk {
        let Some(atom) = self.atom_without_value() else {
            return DecisionOk::Exhausted;
        };

        let polarity = match self.config.phase_saving.value {
            true => self.atom_db.previous_value_of(atom),
            false => self.rng.random_bool(self.config.polarity_lean.value),
        };
        let literal = CLiteral::new(atom, polarity);

        self.counters.total_decisions += 1;
        self.trail.push_level();
        log::trace!(target: targets::DECISION, "Decision {literal} at level {}", self.trail.level());
        self.record_assignment(literal, AssignmentSource::Decision);

        DecisionOk::Literal(literal)
    }

    /// An atom without a value, by random choice or by the selector of the atom database.
    fn atom_without_value(&mut self) -> Option<Atom> {
        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 && self.rng.random_bool(bias) {
            return self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .choose(&mut self.rng);
        }
        self.atom_db.select_atom()
    }

    /// Resets all decisions and consequences of those choices.
    ///
    /// In other words, backjumps to before any decision was made.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, DecisionHeuristic},
        context::Context,
    };

    #[test]
    fn fixed_order_decisions() {
        let mut config = Config::default();
        config.decision_heuristic.value = DecisionHeuristic::FixedOrder;
        let mut context = Context::from_config(config);
        for _ in 0..3 {
            context.fresh_atom().unwrap();
        }

        assert_eq!(context.make_decision(), DecisionOk::Literal(-1));
        assert_eq!(context.make_decision(), DecisionOk::Literal(-2));
        assert_eq!(context.trail.level(), 2);

        context.backjump(1);
        assert_eq!(context.make_decision(), DecisionOk::Literal(-2));
        assert_eq!(context.make_decision(), DecisionOk::Literal(-3));
        assert_eq!(context.make_decision(), DecisionOk::Exhausted);
    }

    #[test]
    fn saved_phases_are_reused() {
        let mut config = Config::default();
        config.decision_heuristic.value = DecisionHeuristic::FixedOrder;
        let mut context = Context::from_config(config);
        for _ in 0..2 {
            context.fresh_atom().unwrap();
        }

        context.trail.push_level();
        context.record_assignment(1, AssignmentSource::Decision);
        context.clear_decisions();

        assert_eq!(context.make_decision(), DecisionOk::Literal(1));
        assert_eq!(context.make_decision(), DecisionOk::Literal(-2));
    }

    #[test]
    fn polarity_lean_without_phase_saving() {
        let mut config = Config::default();
        config.phase_saving.value = false;
        config.polarity_lean.value = 1.0;
        let mut context = Context::from_config(config);
        for _ in 0..3 {
            context.fresh_atom().unwrap();
        }

        while let DecisionOk::Literal(literal) = context.make_decision() {
            assert!(literal.polarity());
        }
        assert_eq!(context.trail.level(), 3);
    }

    #[test]
    fn random_decisions_choose_unvalued_atoms() {
        let mut config = Config::default();
        config.random_decision_bias.value = 1.0;
        let mut context = Context::from_config(config);
        for _ in 0..8 {
            context.fresh_atom().unwrap();
        }

        let mut decided = Vec::default();
        while let DecisionOk::Literal(literal) = context.make_decision() {
            decided.push(literal.atom());
        }
        decided.sort();
        assert_eq!(decided, (1..=8).collect::<Vec<_>>());
    }
}
