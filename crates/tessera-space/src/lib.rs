//! Spatial topology for Tessera boards.
//!
//! This crate owns everything about *where* a cell's neighbours are:
//! the [`Bucket`] of relative offsets that defines a neighbourhood, the
//! [`EdgeMode`] that decides what happens at the border, and the
//! [`SquareLattice`] that resolves an offset from a cell into a concrete
//! in-bounds cell (or nothing).
//!
//! # Edge modes
//!
//! - [`EdgeMode::NoCheck`]: offsets that leave the grid are skipped
//! - [`EdgeMode::Wrap`]: toroidal wrap with non-negative modulo

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bucket;
pub mod edge;
pub mod error;
pub mod lattice;

pub use bucket::{Bucket, Offset};
pub use edge::EdgeMode;
pub use error::SpaceError;
pub use lattice::SquareLattice;
