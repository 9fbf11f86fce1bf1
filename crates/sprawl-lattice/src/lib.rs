//! Lattice storage for the Sprawl automaton.
//!
//! - [`Lattice`]: the fixed-size dense 3D array of cells that growth
//!   happens on, with bounds checking, clearing, window snapshot and
//!   write-back, and the flat byte view handed to renderers.
//! - [`Window`]: a small cube of cells addressed by signed offsets from a
//!   focus coordinate; the scratch space for one rule evaluation.
//! - [`SiteLayers`]: optional per-cell environmental bytes stored beside
//!   the lattice with identical indexing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod lattice;
pub mod layers;
pub mod window;

pub use error::LatticeError;
pub use hash::content_hash;
pub use lattice::{Lattice, PasteBounds};
pub use layers::{SiteLayer, SiteLayers};
pub use window::Window;
