//! Error types for lattice construction and coordinate queries.

use std::fmt;

/// Errors arising from lattice construction or bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// A dimension exceeds what signed coordinate arithmetic can address.
    DimensionTooLarge {
        /// Name of the offending dimension.
        name: &'static str,
        /// The value that was requested.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { row, col, bounds } => {
                write!(f, "coordinate ({row}, {col}) out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
