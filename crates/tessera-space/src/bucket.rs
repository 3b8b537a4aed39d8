//! Neighbourhood buckets: ordered sets of relative offsets.

use smallvec::SmallVec;
use std::fmt;

/// A relative `(row, col)` displacement from a cell.
///
/// `dr` moves along rows (the `x` axis of `set(x, y, ..)`), `dc` along
/// columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Row displacement.
    pub dr: i32,
    /// Column displacement.
    pub dc: i32,
}

impl Offset {
    /// Create an offset from row and column displacements.
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    /// Chebyshev (L-inf) length of the offset.
    pub fn chebyshev(self) -> u32 {
        self.dr.unsigned_abs().max(self.dc.unsigned_abs())
    }

    /// Manhattan (L1) length of the offset.
    pub fn manhattan(self) -> u32 {
        self.dr.unsigned_abs().saturating_add(self.dc.unsigned_abs())
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dr, dc): (i32, i32)) -> Self {
        Self { dr, dc }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dr, self.dc)
    }
}

/// Moore offsets in canonical order: NW, N, NE, W, E, SW, S, SE
/// (column-major around the centre).
const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The set of relative offsets examined when counting a cell's
/// surroundings.
///
/// Iteration order is insertion order and never changes after
/// construction. Order does not affect counts, but a fixed order keeps
/// every run reproducible.
///
/// Duplicate offsets are kept and count twice. The origin `(0, 0)` is
/// accepted and makes a cell count itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bucket {
    offsets: SmallVec<[Offset; 8]>,
}

impl Bucket {
    /// Build a bucket from an explicit list of offsets.
    ///
    /// ```
    /// use tessera_space::{Bucket, Offset};
    ///
    /// let b = Bucket::new([(-1, 0), (1, 0)]);
    /// assert_eq!(b.offsets(), &[Offset::new(-1, 0), Offset::new(1, 0)]);
    /// ```
    pub fn new<I, O>(offsets: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Offset>,
    {
        Self {
            offsets: offsets.into_iter().map(Into::into).collect(),
        }
    }

    /// The 8-cell Moore neighbourhood.
    pub fn moore() -> Self {
        Self::new(MOORE)
    }

    /// The 4-cell von Neumann neighbourhood: N, W, E, S.
    pub fn von_neumann() -> Self {
        Self::von_neumann_radius(1)
    }

    /// All offsets within Chebyshev distance `radius`, excluding the
    /// origin, in row-major order.
    ///
    /// Radius 0 yields an empty bucket.
    pub fn moore_radius(radius: u32) -> Self {
        Self::square_filtered(radius, |o| o.chebyshev() <= radius)
    }

    /// All offsets within Manhattan distance `radius`, excluding the
    /// origin, in row-major order.
    pub fn von_neumann_radius(radius: u32) -> Self {
        Self::square_filtered(radius, |o| o.manhattan() <= radius)
    }

    fn square_filtered(radius: u32, keep: impl Fn(Offset) -> bool) -> Self {
        let r = radius.min(i32::MAX as u32) as i32;
        let mut offsets = SmallVec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                let o = Offset::new(dr, dc);
                if o != Offset::new(0, 0) && keep(o) {
                    offsets.push(o);
                }
            }
        }
        Self { offsets }
    }

    /// Number of offsets (including duplicates).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `true` if the bucket has no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The offsets in iteration order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Iterate the offsets in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Offset> {
        self.offsets.iter()
    }

    /// Largest Chebyshev length among the offsets (0 when empty).
    pub fn reach(&self) -> u32 {
        self.offsets.iter().map(|o| o.chebyshev()).max().unwrap_or(0)
    }
}

impl Default for Bucket {
    fn default() -> Self {
        Self::moore()
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Offset;
    type IntoIter = std::slice::Iter<'a, Offset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<O: Into<Offset>> FromIterator<O> for Bucket {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self::new(iter)
    }
}
