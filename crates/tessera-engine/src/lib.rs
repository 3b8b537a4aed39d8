//! Board engine for Tessera cellular automata.
//!
//! A [`Board`] holds an `n x n` grid of cells, each in one of `K` states,
//! and advances it with a [`RuleTable`](tessera_rule::RuleTable) of
//! transition predicates evaluated over neighbour counts gathered by a
//! [`Bucket`](tessera_space::Bucket) of offsets.
//!
//! Construction goes through [`BoardConfig`], which is validated up
//! front; a constructed board can always advance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod grid;
pub mod metrics;
pub(crate) mod step;

pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use grid::GridView;
pub use metrics::AdvanceMetrics;
