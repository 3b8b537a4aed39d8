//! Board configuration, validation, and error types.
//!
//! [`BoardConfig`] is the builder-input for a [`Board`](crate::Board).
//! [`validate()`](BoardConfig::validate) checks every structural
//! precondition up front so that a constructed board can always advance.

use std::error::Error;
use std::fmt;

use tessera_rule::{presets, RuleError, RuleTable};
use tessera_space::{Bucket, EdgeMode, SpaceError, SquareLattice};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BoardConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `grid_size` is zero.
    EmptyGrid,
    /// `num_states` is zero.
    NoStates,
    /// The initial grid does not have `grid_size` rows.
    GridRowCount {
        /// Configured side length.
        expected: usize,
        /// Number of rows supplied.
        found: usize,
    },
    /// A row of the initial grid does not have `grid_size` entries.
    GridRowLength {
        /// Index of the offending row.
        row: usize,
        /// Configured side length.
        expected: usize,
        /// Entries in that row.
        found: usize,
    },
    /// An initial cell holds a state outside `[0, num_states)`.
    InitialStateOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The offending state.
        state: u32,
        /// Configured number of states.
        num_states: u32,
    },
    /// The rule table is sized for a different number of states.
    RuleTableStates {
        /// Configured number of states.
        expected: u32,
        /// States covered by the table.
        found: u32,
    },
    /// The lattice could not be built.
    Space(SpaceError),
    /// The rule table is malformed.
    Rules(RuleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid_size must be at least 1"),
            Self::NoStates => write!(f, "num_states must be at least 1"),
            Self::GridRowCount { expected, found } => {
                write!(f, "initial grid has {found} rows, expected {expected}")
            }
            Self::GridRowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "initial grid row {row} has {found} cells, expected {expected}"
            ),
            Self::InitialStateOutOfRange {
                row,
                col,
                state,
                num_states,
            } => write!(
                f,
                "initial cell ({row}, {col}) holds state {state}, outside [0, {num_states})"
            ),
            Self::RuleTableStates { expected, found } => write!(
                f,
                "rule table covers {found} states, board has {expected}"
            ),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Rules(e) => write!(f, "rules: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Rules(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rules(e)
    }
}

// ── BoardConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Board`](crate::Board).
///
/// The default is a 10x10 all-dead Game of Life board: two states, the
/// Moore bucket, `NoCheck` edges.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Side length of the square grid. Default: 10.
    pub grid_size: usize,
    /// Starting states, `initial_grid[x][y]`. Default: all zero.
    pub initial_grid: Vec<Vec<u32>>,
    /// `[from][to]` transition predicates. Default: Conway's Life.
    pub rule_table: RuleTable,
    /// Neighbour offsets. Default: Moore.
    pub bucket: Bucket,
    /// Boundary handling. Default: `NoCheck`.
    pub edge_mode: EdgeMode,
    /// Number of states `K`. Default: 2.
    pub num_states: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::blank(10, presets::conway())
    }
}

impl BoardConfig {
    /// An all-zero `grid_size x grid_size` board for `rule_table`, with
    /// the Moore bucket and `NoCheck` edges.
    pub fn blank(grid_size: usize, rule_table: RuleTable) -> Self {
        Self {
            grid_size,
            initial_grid: vec![vec![0; grid_size]; grid_size],
            num_states: rule_table.num_states(),
            rule_table,
            bucket: Bucket::moore(),
            edge_mode: EdgeMode::NoCheck,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lattice().map(|_| ())
    }

    /// Validate and build the lattice the board will run on.
    pub(crate) fn lattice(&self) -> Result<SquareLattice, ConfigError> {
        // 1. At least one state and one cell.
        if self.num_states == 0 {
            return Err(ConfigError::NoStates);
        }
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        // 2. Side length fits the lattice's signed coordinates.
        let lattice = SquareLattice::new(self.grid_size, self.edge_mode)?;
        // 3. Rule table is K x K and only reads states in [0, K).
        let found = self.rule_table.num_states();
        if found != self.num_states {
            return Err(ConfigError::RuleTableStates {
                expected: self.num_states,
                found,
            });
        }
        self.rule_table.validate()?;
        // 4. Initial grid is n x n with every state in range.
        if self.initial_grid.len() != self.grid_size {
            return Err(ConfigError::GridRowCount {
                expected: self.grid_size,
                found: self.initial_grid.len(),
            });
        }
        for (row, cells) in self.initial_grid.iter().enumerate() {
            if cells.len() != self.grid_size {
                return Err(ConfigError::GridRowLength {
                    row,
                    expected: self.grid_size,
                    found: cells.len(),
                });
            }
            if let Some((col, &state)) = cells
                .iter()
                .enumerate()
                .find(|&(_, &s)| s >= self.num_states)
            {
                return Err(ConfigError::InitialStateOutOfRange {
                    row,
                    col,
                    state,
                    num_states: self.num_states,
                });
            }
        }
        Ok(lattice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::StateId;
    use tessera_rule::Predicate;

    fn life(grid_size: usize) -> BoardConfig {
        BoardConfig::blank(grid_size, presets::conway())
    }

    #[test]
    fn default_is_ten_by_ten_life() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.grid_size, 10);
        assert_eq!(cfg.num_states, 2);
        assert_eq!(cfg.bucket, Bucket::moore());
        assert_eq!(cfg.edge_mode, EdgeMode::NoCheck);
        assert!(cfg.initial_grid.iter().flatten().all(|&s| s == 0));
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_zero_states_fails() {
        let mut cfg = life(3);
        cfg.num_states = 0;
        match cfg.validate() {
            Err(ConfigError::NoStates) => {}
            other => panic!("expected NoStates, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_size_fails() {
        let cfg = life(0);
        match cfg.validate() {
            Err(ConfigError::EmptyGrid) => {}
            other => panic!("expected EmptyGrid, got {other:?}"),
        }
    }

    #[test]
    fn validate_table_state_mismatch_fails() {
        let mut cfg = life(3);
        cfg.rule_table = RuleTable::new(3);
        match cfg.validate() {
            Err(ConfigError::RuleTableStates {
                expected: 2,
                found: 3,
            }) => {}
            other => panic!("expected RuleTableStates, got {other:?}"),
        }
    }

    #[test]
    fn validate_missing_row_fails() {
        let mut cfg = life(3);
        cfg.initial_grid.pop();
        match cfg.validate() {
            Err(ConfigError::GridRowCount {
                expected: 3,
                found: 2,
            }) => {}
            other => panic!("expected GridRowCount, got {other:?}"),
        }
    }

    #[test]
    fn validate_short_row_fails() {
        let mut cfg = life(3);
        cfg.initial_grid[1].pop();
        match cfg.validate() {
            Err(ConfigError::GridRowLength { row: 1, .. }) => {}
            other => panic!("expected GridRowLength, got {other:?}"),
        }
    }

    #[test]
    fn validate_bad_initial_state_fails() {
        let mut cfg = life(3);
        cfg.initial_grid[2][1] = 2;
        match cfg.validate() {
            Err(ConfigError::InitialStateOutOfRange {
                row: 2,
                col: 1,
                state: 2,
                num_states: 2,
            }) => {}
            other => panic!("expected InitialStateOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn rule_errors_are_wrapped() {
        let err = ConfigError::from(RuleError::DimensionMismatch {
            expected: 2,
            row: 0,
            found: 1,
        });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("rules: "));
    }

    #[test]
    fn table_without_diagonal_rules_is_fine() {
        let mut table = RuleTable::new(2);
        table.set(StateId(0), StateId(1), Predicate::Always).unwrap();
        let cfg = BoardConfig::blank(4, table);
        cfg.validate().unwrap();
    }
}
