//! Edge (boundary) handling for square lattices.

/// How a lattice treats neighbour lookups that fall outside the grid.
///
/// # Examples
///
/// ```
/// use tessera_space::{Bucket, EdgeMode, SquareLattice};
///
/// // NoCheck: a corner sees 3 of its 8 Moore neighbours.
/// let open = SquareLattice::new(4, EdgeMode::NoCheck).unwrap();
/// assert_eq!(open.neighbours(0, 0, &Bucket::moore()).len(), 3);
///
/// // Wrap: every cell sees all 8 (torus).
/// let torus = SquareLattice::new(4, EdgeMode::Wrap).unwrap();
/// assert_eq!(torus.neighbours(0, 0, &Bucket::moore()).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Out-of-bounds neighbours are skipped and contribute nothing.
    #[default]
    NoCheck,
    /// Out-of-bounds neighbours wrap to the opposite side (torus).
    Wrap,
}

impl EdgeMode {
    /// Short lowercase name, as used in rendered configs and bench ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::NoCheck => "no-check",
            Self::Wrap => "wrap",
        }
    }
}
