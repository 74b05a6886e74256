//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use, and indicate some internal inconsistency.
//! - Some are internally expected, e.g. [BCPError::Conflict] is used to control the flow of a solve.
//! - Some are external, e.g. malformed input to the [DIMACS parser](crate::builder::dimacs) or exhausted resources.
//!
//! An unsatisfiable formula is not an error. It is reported by [Report::Unsatisfiable](crate::reports::Report::Unsatisfiable).
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::atom::Atom};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Parse(ParseError),
    ResolutionBuffer(ResolutionBufferError),

    /// An attempt to backjump to a level above the current level.
    Backjump,
}

/// Failures of conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Outcomes of propagation other than success.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// Every literal of the clause of the key is false.
    Conflict(ClauseKey),

    /// A watch list holds a key to a clause which is missing or does not watch the literal of the list.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Clauses which cannot be added to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contains an atom not part of the context.
    UnknownAtom(Atom),

    /// A clause contains the top atom.
    TopAtom,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Units are stored as literals, so have no stored clause to get.
    GetUnitKey,

    /// A clause is missing.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// An invalid key index.
    InvalidKeyIndex,

    /// An empty clause was given to store.
    EmptyClause,

    /// The limit on stored clauses has been reached, or all possible keys have been used.
    StorageExhausted,

    /// A watch expected on some watch list was not found.
    MissingWatch,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when reading a configuration value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An unreadable value for the named option.
    Value(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Malformed DIMACS input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A `p` line which is not of the form `p cnf ATOMS CLAUSES`, or declares too many atoms.
    ProblemSpecification,

    /// A token which is not an integer, at the given line.
    Line(usize),

    /// A `p` line after the first clause, or a second `p` line, at the given line.
    MisplacedProblem(usize),

    /// An atom outside the range declared by the problem specification, at a specific line.
    AtomOutOfRange(usize, Atom),

    /// A failure to read the input, as a description.
    Io(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Failures of resolution through the current level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionBufferError {
    /// A clause could not be found.
    LostClause,

    /// An atom on the path of resolution has no reason clause.
    MissingReason,

    /// The trail was exhausted before a unique implication point was found.
    ExhaustedTrail,

    /// A literal of a clause used in resolution has no value.
    UnvaluedLiteral,
}

impl From<ResolutionBufferError> for ErrorKind {
    fn from(e: ResolutionBufferError) -> Self {
        ErrorKind::ResolutionBuffer(e)
    }
}
