//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone, and nothing of those levels remains queued for propagation.
//!
//! # [backjump](GenericContext::backjump)
//!
//! Performs a backjump to some level.
//! Passing a target level at or above the current level is safe, and nothing happens.
//!
//! # [non_chronological_backjump_level](GenericContext::non_chronological_backjump_level)
//!
//! The backjump level of a clause is the second highest decision level among the literals of the clause, or zero for a unit clause.
//! On a clause unsatisfiable on the current valuation with a single literal of the highest level, this is the highest level at which the clause asserts the literal.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }

    /// The non-chronological backjump level of a unsatisfiable clause.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        if clause.size() < 2 {
            return Ok(0);
        }

        // An ordered record of the top two levels: (second_to_top, top)
        let mut top_two: (LevelIndex, LevelIndex) = (0, 0);
        for literal in clause.literals() {
            let Some(level) = self.atom_db.level_of(literal.atom()) else {
                log::error!(target: targets::BACKJUMP, "{literal} has no value");
                return Err(err::ErrorKind::Backjump);
            };

            if level > top_two.1 {
                top_two = (top_two.1, level);
            } else if level > top_two.0 {
                top_two.0 = level;
            }
        }

        Ok(top_two.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config, context::Context, structures::consequence::AssignmentSource,
        types::err::ErrorKind,
    };

    fn context_with_levels() -> Context {
        let mut context = Context::from_config(Config::default());
        for _ in 0..4 {
            context.fresh_atom().unwrap();
        }
        for literal in [1, -2, 3, 4] {
            context.trail.push_level();
            context.record_assignment(literal, AssignmentSource::Decision);
        }
        context
    }

    #[test]
    fn backjump_clears_levels() {
        let mut context = context_with_levels();
        assert_eq!(context.trail.level(), 4);

        context.backjump(2);
        assert_eq!(context.trail.level(), 2);
        assert_eq!(context.trail.literals, vec![1, -2]);
        assert_eq!(context.value_of(3), None);
        assert_eq!(context.value_of(4), None);
        assert_eq!(context.value_of(2), Some(false));

        context.backjump(3);
        assert_eq!(context.trail.level(), 2);

        context.backjump(0);
        assert!(context.trail.literals.is_empty());
        assert!((1..=4).all(|atom| context.value_of(atom).is_none()));
    }

    #[test]
    fn second_highest_level() {
        let context = context_with_levels();

        assert_eq!(context.non_chronological_backjump_level(&vec![-1, 2, -4]), Ok(2));
        assert_eq!(context.non_chronological_backjump_level(&vec![-3, -4]), Ok(3));
        assert_eq!(context.non_chronological_backjump_level(&vec![-4]), Ok(0));
        assert_eq!(context.non_chronological_backjump_level(&vec![-4, -4]), Ok(4));
    }

    #[test]
    fn unvalued_literals_have_no_level() {
        let mut context = context_with_levels();
        context.backjump(1);

        assert_eq!(
            context.non_chronological_backjump_level(&vec![-1, -4]),
            Err(ErrorKind::Backjump)
        );
    }
}
