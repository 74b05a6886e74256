use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Information about a parse of DIMACS input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared by the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses declared by the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// A count of atoms added to the context.
    pub added_atoms: usize,

    /// A count of clauses read, including tautologies.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS CNF formula into the context.
    ///
    /// Atoms of the context are identified with DIMACS variables, and atoms are added to the context as needed.
    ///
    /// - Lines beginning with `c` are comments.
    /// - An optional problem specification `p cnf V C` may precede the formula, in which case variables above `V` are rejected.
    /// - Clauses are whitespace separated literals terminated by `0`, and may span lines.
    /// - A line beginning with `%` ends the formula.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An unsatisfiable formula
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_count();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;
        let mut formula_started = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(e) => return Err(err::ErrorKind::from(err::ParseError::Io(e.to_string()))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None | Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    if formula_started || info.expected_atoms.is_some() {
                        return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                            line_counter,
                        )));
                    }

                    let (atoms, clauses) = parse_problem_specification(line)?;
                    log::info!(target: targets::PARSE, "Expecting {atoms} atoms and {clauses} clauses");

                    if atoms > ATOM_MAX as usize {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }
                    self.ensure_atoms(atoms as Atom)?;

                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    formula_started = true;

                    for item in line.split_whitespace() {
                        let Ok(integer) = item.parse::<CLiteral>() else {
                            return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)));
                        };

                        if integer == 0 {
                            self.add_clause(std::mem::take(&mut clause_buffer))?;
                            info.added_clauses += 1;
                            continue;
                        }

                        let atom = integer.unsigned_abs() as Atom;
                        let in_range = match info.expected_atoms {
                            Some(expected) => (atom as usize) <= expected,
                            None => atom <= ATOM_MAX,
                        };
                        if !in_range {
                            return Err(err::ErrorKind::from(err::ParseError::AtomOutOfRange(
                                line_counter,
                                atom,
                            )));
                        }

                        self.ensure_atoms(atom)?;
                        clause_buffer.push(CLiteral::new(atom, integer.is_positive()));
                    }
                }
            }
        }

        // A final clause without a terminating zero.
        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_count() - initial_atoms;

        if info
            .expected_clauses
            .is_some_and(|expected| expected != info.added_clauses)
        {
            log::warn!(target: targets::PARSE, "Expected {:?} clauses, read {}", info.expected_clauses, info.added_clauses);
        }

        Ok(info)
    }
}

/// The atom and clause counts of a `p cnf V C` line.
fn parse_problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut details = line.split_whitespace();

    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(err::ParseError::ProblemSpecification);
    }

    let mut count = || -> Result<usize, err::ParseError> {
        match details.next().map(str::parse::<usize>) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification),
        }
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}
