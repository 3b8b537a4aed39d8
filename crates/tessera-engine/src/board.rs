//! The board engine.
//!
//! [`Board`] owns a grid, a rule table, a bucket, and an edge mode, and
//! advances the grid one synchronous generation at a time.
//!
//! # Ownership model
//!
//! `Board` is [`Send`]. All mutating methods take `&mut self`, and
//! [`snapshot()`](Board::snapshot) returns a [`GridView`] that borrows
//! from the board, so a view can never observe a half-written
//! generation.

use std::time::Instant;

use tessera_core::{grid_hash, CellError, Counts, StateId, TickId};
use tessera_rule::RuleTable;
use tessera_space::{Bucket, EdgeMode, SquareLattice};

use crate::config::{BoardConfig, ConfigError};
use crate::grid::{Grid, GridView};
use crate::metrics::AdvanceMetrics;
use crate::step::advance_cells;

// Compile-time assertion: Board is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Board>();
    }
};

/// A square cellular-automaton board.
///
/// # Example
///
/// ```
/// use tessera_engine::{Board, BoardConfig};
///
/// let mut config = BoardConfig::default();
/// config.grid_size = 3;
/// config.initial_grid = vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]];
///
/// let mut board = Board::new(config).unwrap();
/// board.advance();
/// assert_eq!(
///     board.snapshot().to_rows(),
///     vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]],
/// );
/// ```
pub struct Board {
    lattice: SquareLattice,
    bucket: Bucket,
    rule_table: RuleTable,
    num_states: u32,
    grid: Grid,
    back: Grid,
    counts: Counts,
    tick: TickId,
    last_metrics: AdvanceMetrics,
}

impl Board {
    /// Create a board from a [`BoardConfig`], validating it first.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let lattice = config.lattice()?;
        let grid = Grid::from_rows(config.grid_size, &config.initial_grid);
        Ok(Self {
            lattice,
            bucket: config.bucket,
            rule_table: config.rule_table,
            num_states: config.num_states,
            back: grid.clone(),
            grid,
            counts: Counts::new(),
            tick: TickId::default(),
            last_metrics: AdvanceMetrics::default(),
        })
    }

    /// Create a board from its individual parts.
    ///
    /// Equivalent to [`Board::new`] with a hand-built [`BoardConfig`].
    pub fn from_parts(
        grid_size: usize,
        initial_grid: Vec<Vec<u32>>,
        rule_table: RuleTable,
        bucket: Bucket,
        edge_mode: EdgeMode,
        num_states: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(BoardConfig {
            grid_size,
            initial_grid,
            rule_table,
            bucket,
            edge_mode,
            num_states,
        })
    }

    fn check_cell(&self, x: usize, y: usize) -> Result<usize, CellError> {
        self.lattice
            .check_bounds(x, y)
            .map_err(|_| CellError::OutOfBounds {
                row: x,
                col: y,
                grid_size: self.grid_size(),
            })?;
        Ok(self.lattice.index(x, y))
    }

    /// Set cell `(x, y)` to `state`.
    ///
    /// Coordinates are checked before the state. On error the board is
    /// unchanged.
    pub fn set(&mut self, x: usize, y: usize, state: StateId) -> Result<(), CellError> {
        let idx = self.check_cell(x, y)?;
        if state.0 >= self.num_states {
            return Err(CellError::InvalidState {
                state,
                num_states: self.num_states,
            });
        }
        self.grid.cells_mut()[idx] = state;
        Ok(())
    }

    /// State of cell `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<StateId, CellError> {
        let idx = self.check_cell(x, y)?;
        Ok(self.grid.cells()[idx])
    }

    /// Advance one generation.
    ///
    /// Every cell's successor is computed from the current generation
    /// alone; the new generation replaces the old only once complete.
    pub fn advance(&mut self) {
        let start = Instant::now();
        let stats = advance_cells(
            &self.lattice,
            &self.bucket,
            &self.rule_table,
            self.grid.cells(),
            self.back.cells_mut(),
            &mut self.counts,
        );
        std::mem::swap(&mut self.grid, &mut self.back);
        self.tick = TickId(self.tick.0 + 1);
        self.last_metrics = AdvanceMetrics {
            total_us: start.elapsed().as_micros() as u64,
            cells_evaluated: stats.cells_evaluated,
            transitions: stats.transitions,
            neighbours_skipped: stats.neighbours_skipped,
        };
    }

    /// Advance `generations` times.
    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> GridView<'_> {
        self.grid.view()
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.lattice.size()
    }

    /// Number of states `K`.
    pub fn num_states(&self) -> u32 {
        self.num_states
    }

    /// Neighbour offsets.
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    /// Boundary handling.
    pub fn edge_mode(&self) -> EdgeMode {
        self.lattice.edge_mode()
    }

    /// Transition predicates.
    pub fn rule_table(&self) -> &RuleTable {
        &self.rule_table
    }

    /// Generations advanced since construction.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent advance.
    pub fn last_metrics(&self) -> &AdvanceMetrics {
        &self.last_metrics
    }

    /// Number of cells currently in `state`.
    pub fn population(&self, state: StateId) -> usize {
        self.snapshot().population(state)
    }

    /// FNV-1a hash of the current generation.
    pub fn state_hash(&self) -> u64 {
        grid_hash(&self.snapshot())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("grid_size", &self.grid_size())
            .field("num_states", &self.num_states)
            .field("edge_mode", &self.edge_mode())
            .field("bucket_len", &self.bucket.len())
            .field("tick", &self.tick)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_rule::{presets, Predicate};

    fn blinker() -> Board {
        Board::from_parts(
            3,
            vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]],
            presets::conway(),
            Bucket::moore(),
            EdgeMode::NoCheck,
            2,
        )
        .unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_starts_at_tick_zero() {
        let board = Board::new(BoardConfig::default()).unwrap();
        assert_eq!(board.tick_id(), TickId(0));
        assert_eq!(board.grid_size(), 10);
        assert_eq!(board.num_states(), 2);
        assert_eq!(board.population(StateId(0)), 100);
        assert_eq!(board.last_metrics(), &AdvanceMetrics::default());
    }

    #[test]
    fn bad_initial_state_rejected() {
        let result = Board::from_parts(
            2,
            vec![vec![0, 0], vec![0, 5]],
            presets::conway(),
            Bucket::moore(),
            EdgeMode::NoCheck,
            2,
        );
        match result {
            Err(ConfigError::InitialStateOutOfRange { row: 1, col: 1, .. }) => {}
            other => panic!("expected InitialStateOutOfRange, got {other:?}"),
        }
    }

    // ── Cell access ─────────────────────────────────────────────

    #[test]
    fn set_then_get() {
        let mut board = blinker();
        board.set(0, 2, StateId(1)).unwrap();
        assert_eq!(board.get(0, 2), Ok(StateId(1)));
        assert_eq!(board.snapshot().get(0, 2), Some(StateId(1)));
    }

    #[test]
    fn set_out_of_bounds() {
        let mut board = blinker();
        let before = board.snapshot().to_rows();
        assert_eq!(
            board.set(3, 0, StateId(1)),
            Err(CellError::OutOfBounds {
                row: 3,
                col: 0,
                grid_size: 3
            })
        );
        assert_eq!(board.snapshot().to_rows(), before);
    }

    #[test]
    fn get_out_of_bounds_on_either_axis() {
        let board = blinker();
        assert_eq!(board.get(2, 2), Ok(StateId(0)));
        for (x, y) in [(3, 0), (0, 3), (usize::MAX, 1)] {
            match board.get(x, y) {
                Err(CellError::OutOfBounds { row, col, grid_size: 3 }) => {
                    assert_eq!((row, col), (x, y));
                }
                other => panic!("expected OutOfBounds, got {other:?}"),
            }
        }
    }

    #[test]
    fn set_invalid_state() {
        let mut board = blinker();
        assert_eq!(
            board.set(0, 0, StateId(2)),
            Err(CellError::InvalidState {
                state: StateId(2),
                num_states: 2
            })
        );
        assert_eq!(board.get(0, 0), Ok(StateId(0)));
    }

    #[test]
    fn coordinates_checked_before_state() {
        let mut board = blinker();
        match board.set(9, 9, StateId(7)) {
            Err(CellError::OutOfBounds { .. }) => {}
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    // ── Advance ─────────────────────────────────────────────────

    #[test]
    fn blinker_oscillates() {
        let mut board = blinker();
        board.advance();
        assert_eq!(
            board.snapshot().to_rows(),
            vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]
        );
        board.advance();
        assert_eq!(
            board.snapshot().to_rows(),
            vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]
        );
        assert_eq!(board.tick_id(), TickId(2));
    }

    #[test]
    fn advance_records_metrics() {
        let mut board = blinker();
        board.advance();
        let m = board.last_metrics();
        assert_eq!(m.cells_evaluated, 9);
        assert_eq!(m.transitions, 4);
        assert_eq!(m.neighbours_skipped, 32);
    }

    #[test]
    fn advance_by_counts_ticks() {
        let mut board = blinker();
        let start = board.state_hash();
        board.advance_by(4);
        assert_eq!(board.tick_id(), TickId(4));
        assert_eq!(board.state_hash(), start);
    }

    #[test]
    fn set_between_advances_is_seen() {
        let mut board = Board::new(BoardConfig::blank(4, presets::conway())).unwrap();
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            board.set(x, y, StateId(1)).unwrap();
        }
        board.advance();
        // A block is still.
        assert_eq!(board.population(StateId(1)), 4);
        assert_eq!(board.last_metrics().transitions, 0);
    }

    #[test]
    fn lower_candidate_wins() {
        let table = RuleTable::new(3)
            .with(StateId(0), StateId(1), Predicate::Always)
            .unwrap()
            .with(StateId(0), StateId(2), Predicate::Always)
            .unwrap();
        let mut board = Board::new(BoardConfig::blank(2, table)).unwrap();
        board.advance();
        assert_eq!(board.population(StateId(1)), 4);
        assert_eq!(board.population(StateId(2)), 0);
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let board = blinker();
        let s = format!("{board:?}");
        assert!(s.contains("Board"));
        assert!(s.contains("grid_size"));
    }
}
