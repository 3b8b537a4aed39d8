//! Error types for rule table construction.

use std::error::Error;
use std::fmt;

use tessera_core::StateId;

use crate::parse::ParseError;

/// Errors from building or editing a [`RuleTable`](crate::RuleTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The table is not `K x K`.
    DimensionMismatch {
        /// Expected row length (the number of rows, `K`).
        expected: usize,
        /// Index of the first row with the wrong length.
        row: usize,
        /// Length of that row.
        found: usize,
    },
    /// A `[from][to]` index is not in `[0, K)`.
    TransitionOutOfRange {
        /// Source state.
        from: StateId,
        /// Target state.
        to: StateId,
        /// Number of states in the table.
        num_states: u32,
    },
    /// A predicate reads `counts[state]` for a state the table does not have.
    StateOutOfRange {
        /// Source state of the offending entry.
        from: StateId,
        /// Target state of the offending entry.
        to: StateId,
        /// The referenced state.
        state: StateId,
        /// Number of states in the table.
        num_states: u32,
    },
    /// An entry's text failed to parse.
    Parse {
        /// Source state of the offending entry.
        from: StateId,
        /// Target state of the offending entry.
        to: StateId,
        /// The underlying parse error.
        source: ParseError,
    },
    /// A `B.../S...` rulestring is malformed.
    InvalidRulestring {
        /// The input text.
        rulestring: String,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                expected,
                row,
                found,
            } => write!(
                f,
                "rule table row {row} has {found} entries, expected {expected}"
            ),
            Self::TransitionOutOfRange {
                from,
                to,
                num_states,
            } => write!(
                f,
                "transition [{from}][{to}] out of range for {num_states} states"
            ),
            Self::StateOutOfRange {
                from,
                to,
                state,
                num_states,
            } => write!(
                f,
                "rule [{from}][{to}] reads state {state}, but only {num_states} states exist"
            ),
            Self::Parse { from, to, source } => {
                write!(f, "rule [{from}][{to}]: {source}")
            }
            Self::InvalidRulestring { rulestring, reason } => {
                write!(f, "invalid rulestring '{rulestring}': {reason}")
            }
        }
    }
}

impl Error for RuleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
