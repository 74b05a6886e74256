use crate::{
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// The index to a formula.
pub type FormulaIndex = u32;

/// The token of a formula index, used to distinguish re-use of the same [FormulaIndex].
pub type FormulaToken = u16;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in some indexed structure (a vector) and keys contain the index to the clause together with a token to distinguish reuse of the same index, where relevant.
///
/// The only exception to this is unit clauses, whose key is the (unit) literal itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original unit clause contains the (unit) clause.
    OriginalUnit(CLiteral),

    /// The key to a learned unit clause contains the (unit) clause.
    AdditionUnit(CLiteral),

    /// The key to an original clause.
    Original(FormulaIndex),

    /// The key to an addition, with a token distinguishing reuse of the index.
    Addition(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::OriginalUnit(l) | Self::AdditionUnit(l) => l.atom() as usize,
            Self::Original(i) => *i as usize,
            Self::Addition(i, _) => *i as usize,
        }
    }

    /// Retokens an addition key to distinguish multiple uses of the same index.
    ///
    /// Returns an error if used on any other key, or if the token limit has been reached.
    pub fn retoken(&self) -> Result<Self, err::ClauseDBError> {
        match self {
            Self::OriginalUnit(_) | Self::AdditionUnit(_) => {
                log::error!(target: targets::CLAUSE_DB, "Unit keys have a unique token");
                Err(err::ClauseDBError::InvalidKeyToken)
            }

            Self::Original(_) => {
                log::error!(target: targets::CLAUSE_DB, "Original keys have a unique token");
                Err(err::ClauseDBError::InvalidKeyToken)
            }

            Self::Addition(index, token) => match token.checked_add(1) {
                Some(fresh_token) => Ok(ClauseKey::Addition(*index, fresh_token)),
                None => Err(err::ClauseDBError::StorageExhausted),
            },
        }
    }

    /// Whether the key is to an addition (learned) clause.
    pub fn is_addition(&self) -> bool {
        matches!(self, Self::AdditionUnit(_) | Self::Addition(_, _))
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalUnit(key) => write!(f, "OriginalUnit({key})"),
            Self::AdditionUnit(key) => write!(f, "AdditionUnit({key})"),
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key, token) => write!(f, "Addition({key}, {token})"),
        }
    }
}
