use crate::{
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::ResolutionBuffer;

impl ResolutionBuffer {
    /// Clears the buffer, ready for a fresh derivation over `atom_count` atoms.
    pub fn refresh(&mut self, atom_count: usize) {
        for atom in self.merged_atoms.drain(..) {
            self.merged[atom as usize] = false;
        }
        if self.merged.len() < atom_count {
            self.merged.resize(atom_count, false);
        }
        self.settled.clear();
        self.pending = 0;
    }

    /// Applies resolution to the conflict clause of `key` with the reasons for literals valued at the current level, in reverse order of valuation, until a unique implication point is found.
    ///
    /// Returns the derived clause, with the asserting literal at index zero and, if the clause has two or more literals, a literal of the highest remaining level at index one.
    ///
    /// Additions used in the derivation have their activity bumped.
    pub fn resolve_through_current_level(
        &mut self,
        key: &ClauseKey,
        clause_db: &mut ClauseDB,
        atom_db: &AtomDB,
        trail: &Trail,
    ) -> Result<CClause, err::ResolutionBufferError> {
        self.refresh(atom_db.count());
        let level = trail.level();

        self.merge_clause(key, clause_db, atom_db, level)?;

        let mut uip = None;
        for literal in trail.literals.iter().rev() {
            let atom = literal.atom();
            if !self.merged[atom as usize] || atom_db.level_of(atom) != Some(level) {
                continue;
            }

            self.pending -= 1;
            if self.pending == 0 {
                uip = Some(*literal);
                break;
            }

            log::trace!(target: targets::RESOLUTION, "Resolving on {literal}");
            match atom_db.source_of(atom) {
                Some(AssignmentSource::BCP(reason)) => {
                    self.merge_clause(&reason, clause_db, atom_db, level)?;
                }

                _ => {
                    log::error!(target: targets::RESOLUTION, "No reason for {literal} with {} pending", self.pending);
                    return Err(err::ResolutionBufferError::MissingReason);
                }
            }
        }

        let Some(uip) = uip else {
            log::error!(target: targets::RESOLUTION, "Trail exhausted without assertion");
            return Err(err::ResolutionBufferError::ExhaustedTrail);
        };

        let mut clause = Vec::with_capacity(self.settled.len() + 1);
        clause.push(uip.negate());
        clause.append(&mut self.settled);

        if clause.len() > 2 {
            let mut max_index = 1;
            let mut max_level = 0;
            for (index, literal) in clause.iter().enumerate().skip(1) {
                let literal_level = atom_db.level_of(literal.atom()).unwrap_or(0);
                if literal_level > max_level {
                    max_index = index;
                    max_level = literal_level;
                }
            }
            clause.swap(1, max_index);
        }

        log::trace!(target: targets::RESOLUTION, "Derived {}", clause.as_dimacs(false));
        Ok(clause)
    }

    /// The atoms of every clause used in the most recent derivation, excluding those valued at level zero.
    pub fn atoms_used(&self) -> impl Iterator<Item = Atom> + '_ {
        self.merged_atoms.iter().copied()
    }
}

impl ResolutionBuffer {
    fn merge_clause(
        &mut self,
        key: &ClauseKey,
        clause_db: &mut ClauseDB,
        atom_db: &AtomDB,
        level: LevelIndex,
    ) -> Result<(), err::ResolutionBufferError> {
        match key {
            ClauseKey::OriginalUnit(literal) | ClauseKey::AdditionUnit(literal) => {
                self.merge_literals(&[*literal], atom_db, level)?
            }

            _ => match clause_db.get(key) {
                Ok(clause) => self.merge_literals(clause, atom_db, level)?,
                Err(_) => {
                    log::error!(target: targets::RESOLUTION, "Lost clause {key}");
                    return Err(err::ResolutionBufferError::LostClause);
                }
            },
        }

        clause_db.bump_activity(key);
        Ok(())
    }

    /// Merges literals into the derived clause, skipping atoms already merged and atoms valued at level zero.
    fn merge_literals(
        &mut self,
        literals: &[CLiteral],
        atom_db: &AtomDB,
        level: LevelIndex,
    ) -> Result<(), err::ResolutionBufferError> {
        for literal in literals {
            let atom = literal.atom();
            if self.merged[atom as usize] {
                continue;
            }

            match atom_db.level_of(atom) {
                None => {
                    log::error!(target: targets::RESOLUTION, "Unvalued literal {literal} in resolution");
                    return Err(err::ResolutionBufferError::UnvaluedLiteral);
                }

                Some(0) => continue,

                Some(literal_level) => {
                    self.merged[atom as usize] = true;
                    self.merged_atoms.push(atom);

                    if literal_level == level {
                        self.pending += 1;
                    } else {
                        self.settled.push(*literal);
                    }
                }
            }
        }
        Ok(())
    }
}
