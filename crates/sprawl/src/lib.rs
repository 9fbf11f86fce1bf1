//! Sprawl: road networks grown by a local, grow-once cellular automaton.
//!
//! This is the facade crate that re-exports the public API of the Sprawl
//! sub-crates. Most users only need `sprawl` as a dependency.
//!
//! # Quick start
//!
//! ```rust
//! use sprawl::prelude::*;
//!
//! let config = EngineConfig::new(Dims::flat(32, 32)).with_intersection_chance(25);
//! let mut engine = GrowthEngine::new(config).unwrap();
//! engine.set_cell(16, 16, 0, CellType::RoadNS).unwrap();
//! engine.run_random(50_000);
//!
//! // The seed never changes and every claim neighbours an occupied cell.
//! let lattice = engine.lattice();
//! assert_eq!(*lattice.cell_at(16, 16, 0), CellType::RoadNS);
//! assert!(lattice.occupied_count() > 1);
//!
//! // 8 bytes per cell: type ordinal then payload, both little-endian u32 on
//! // little-endian targets.
//! assert_eq!(lattice.as_bytes().len(), 32 * 32 * 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprawl-core` | `CellType`, `Cell`, `TypeSet`, coordinates |
//! | [`lattice`] | `sprawl-lattice` | `Lattice`, `Window`, site layers, hashing |
//! | [`engine`] | `sprawl-engine` | `GrowthEngine`, rules, config, batching |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell model and coordinates (`sprawl-core`).
pub use sprawl_core as types;

/// Dense lattice storage and windows (`sprawl-lattice`).
///
/// [`lattice::Lattice`] holds the cells; [`lattice::Window`] is the scratch
/// cube a rule works in; [`lattice::SiteLayers`] stores per-cell
/// environment data beside the lattice.
pub use sprawl_lattice as lattice;

/// Growth engine and rule table (`sprawl-engine`).
pub use sprawl_engine as engine;

/// Common imports for typical Sprawl usage.
///
/// ```rust
/// use sprawl::prelude::*;
/// ```
pub mod prelude {
    // Cell model
    pub use sprawl_core::{Cell, CellType, Coord3, Dims, TypeSet};

    // Lattice
    pub use sprawl_lattice::{content_hash, Lattice, PasteBounds, SiteLayer, SiteLayers, Window};

    // Engine
    pub use sprawl_engine::{
        plan_disjoint_batches, EngineConfig, GrowthEngine, GrowthMetrics, UpdateOutcome,
    };

    // Errors
    pub use sprawl_core::CellTypeError;
    pub use sprawl_engine::ConfigError;
    pub use sprawl_lattice::LatticeError;
}
