//! Core types for the Sprawl road-growth automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! categorical [`CellType`] enumeration, the per-cell [`Cell`] value with
//! its claim-if-empty write discipline, the [`TypeSet`] bitset used for
//! "is-in-set" predicates, and the coordinate/dimension types shared by
//! the lattice and the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod type_set;

pub use cell::{Cell, CellType};
pub use error::CellTypeError;
pub use id::{Coord3, Dims};
pub use type_set::TypeSet;
