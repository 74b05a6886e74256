//! The trail, the sequence of assignments made during a solve, in order.
//!
//! Assignments are grouped into decision levels.
//! Level zero holds the consequences of the formula alone, and each decision opens a fresh level holding the decision followed by its consequences.
//!
//! The trail also acts as the queue of assignments awaiting propagation, with `q_head` the index of the first assignment yet to be propagated.

use crate::structures::literal::CLiteral;

use super::LevelIndex;

#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order.
    pub literals: Vec<CLiteral>,

    /// The index of the first assignment of each level above zero.
    pub level_indices: Vec<usize>,

    /// The index of the first assignment yet to be propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh level, to be started by the next stored assignment.
    pub fn push_level(&mut self) {
        self.level_indices.push(self.literals.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indices.is_empty()
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indices.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// The next assignment awaiting propagation, if any.
    pub fn next_to_propagate(&self) -> Option<CLiteral> {
        self.literals.get(self.q_head).copied()
    }

    /// Removes levels above the given level index, if they exist, returning the assignments removed.
    ///
    /// The propagation head is moved back to the end of the trail if needed, as everything remaining has been propagated.
    ///
    /// # Soundness
    /// Does not clear the *valuation*.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indices[i] is the start of level i + 1.
        // So, everything from the start of level `level + 1` is cleared.
        match self.level_indices.get(level as usize) {
            Some(&level_start) => {
                self.level_indices.truncate(level as usize);
                let cleared = self.literals.split_off(level_start);
                self.q_head = std::cmp::min(self.q_head, self.literals.len());
                cleared
            }

            None => Vec::default(),
        }
    }
}
