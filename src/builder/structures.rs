use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        clause::{Clause, ClauseSource},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::{
    preprocess::{preprocess_clause, PreprocessingOk},
    ClauseOk,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        self.prepare_for_input();
        let atom = self.atom_db.fresh_atom()?;
        self.watches.grow_to_include(atom);
        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// As exhausting the atom limit is unlikely in many applications, this may be preferred.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(err::AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// Ensures `atom` is part of the context, by introducing as many atoms as required for the atoms of the context to form the contiguous block 0..=`atom`.
    pub fn ensure_atoms(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        while self.atom_db.count() <= atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Returns a fresh literal with value true.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::AtomDBError> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// Returns a fresh literal with value true, or the maximum atom with value true.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns a vector containing `count` literals with either a fresh atom or the maximum atom and valued true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count).map(|_| self.fresh_or_max_literal()).collect()
    }

    /// Clears any decisions, so the context is ready for input.
    fn prepare_for_input(&mut self) {
        self.clear_decisions();
        match self.state {
            ContextState::Unsatisfiable => {}
            _ => self.state = ContextState::Input,
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the context.
    ///
    /// See [builder](crate::builder) for details.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        let mut clause = clause.canonical();

        if preprocess_clause(&mut clause) == PreprocessingOk::Tautology {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology {}", clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        for literal in &clause {
            match literal.atom() {
                TOP_ATOM => return Err(err::ErrorKind::from(err::BuildError::TopAtom)),
                atom if atom as usize >= self.atom_db.count() => {
                    return Err(err::ErrorKind::from(err::BuildError::UnknownAtom(atom)));
                }
                _ => {}
            }
        }

        if self.config.occurrence_seeding.value {
            for literal in &clause {
                self.atom_db.note_occurrence(*literal);
            }
        }

        self.prepare_for_input();

        clause.retain(|literal| self.literal_value(*literal) != Some(false));

        match clause[..] {
            [] => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause added");
                self.state = ContextState::Unsatisfiable;
            }

            [literal] => {
                let key = self.clause_db.store(
                    clause,
                    ClauseSource::Original,
                    None,
                    &self.atom_db,
                    &mut self.watches,
                )?;

                // Literals false at level zero have been removed, so the literal is either valued here or already true.
                self.record_assignment(literal, AssignmentSource::Unit(key));
            }

            [..] => {
                self.clause_db.store(
                    clause,
                    ClauseSource::Original,
                    None,
                    &self.atom_db,
                    &mut self.watches,
                )?;
            }
        }

        Ok(ClauseOk::Added)
    }
}
