//! Core types and traits for the Tessera cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: state
//! and tick identifiers, the per-cell count vector, cell access errors,
//! the [`GridAccess`] read trait and deterministic grid hashing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod id;
pub mod traits;

pub use error::CellError;
pub use hash::grid_hash;
pub use id::{Counts, StateId, TickId};
pub use traits::GridAccess;
