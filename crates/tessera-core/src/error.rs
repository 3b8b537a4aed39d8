//! Error types for single-cell access.
//!
//! Construction-time failures live with the configuration types in
//! `tessera-engine`; this module covers the recoverable errors a caller
//! can hit when reading or writing one cell of a live board.

use std::error::Error;
use std::fmt;

use crate::id::StateId;

/// Errors from reading or writing a single cell.
///
/// Returned by `Board::set()` and `Board::get()`. The board is never
/// modified when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The coordinate lies outside `[0, grid_size)` on either axis.
    OutOfBounds {
        /// Requested row (`x`).
        row: usize,
        /// Requested column (`y`).
        col: usize,
        /// Side length of the board.
        grid_size: usize,
    },
    /// The state is not in `[0, num_states)`.
    InvalidState {
        /// The offending state.
        state: StateId,
        /// Number of states the board was built with.
        num_states: u32,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                grid_size,
            } => write!(
                f,
                "cell ({row}, {col}) out of bounds: [0, {grid_size}) x [0, {grid_size})"
            ),
            Self::InvalidState { state, num_states } => {
                write!(f, "state {state} out of range: [0, {num_states})")
            }
        }
    }
}

impl Error for CellError {}
