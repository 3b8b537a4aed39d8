//! Cell storage and the borrowed read-only view handed to callers.

use std::fmt;

use tessera_core::{GridAccess, StateId};

/// Row-major `size x size` cell storage owned by a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    size: usize,
    cells: Vec<StateId>,
}

impl Grid {
    /// Build from validated rows.
    pub(crate) fn from_rows(size: usize, rows: &[Vec<u32>]) -> Self {
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&s| StateId(s)))
            .collect();
        Self { size, cells }
    }

    pub(crate) fn cells(&self) -> &[StateId] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [StateId] {
        &mut self.cells
    }

    pub(crate) fn view(&self) -> GridView<'_> {
        GridView {
            size: self.size,
            cells: &self.cells,
        }
    }
}

/// A read-only view of a board's current generation.
///
/// Borrowed from the board, so the board cannot advance or be edited
/// while a view is alive. Copy it out with [`to_rows`](Self::to_rows)
/// to keep a generation around.
///
/// `Display` renders one row per line with states separated by spaces:
///
/// ```text
/// 0 0 0
/// 1 1 1
/// 0 0 0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridView<'a> {
    size: usize,
    cells: &'a [StateId],
}

impl<'a> GridView<'a> {
    /// Side length.
    pub fn grid_size(&self) -> usize {
        self.size
    }

    /// State at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<StateId> {
        if x < self.size && y < self.size {
            Some(self.cells[x * self.size + y])
        } else {
            None
        }
    }

    /// Rows in order, each `grid_size` states long.
    pub fn rows(&self) -> impl Iterator<Item = &'a [StateId]> + 'a {
        self.cells.chunks_exact(self.size)
    }

    /// Owned copy as nested rows of raw state indices.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(|s| s.0).collect())
            .collect()
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &'a [StateId] {
        self.cells
    }

    /// Number of cells in `state`.
    pub fn population(&self, state: StateId) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

impl GridAccess for GridView<'_> {
    fn grid_size(&self) -> usize {
        self.size
    }

    fn state_at(&self, row: usize, col: usize) -> Option<StateId> {
        self.get(row, col)
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, s) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{s}")?;
            }
        }
        Ok(())
    }
}
