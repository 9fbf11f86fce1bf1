//! Error types for lattice construction and checked access.

use sprawl_core::{Coord3, Dims};
use std::fmt;

/// Errors arising from lattice construction or checked accessors.
///
/// The unchecked hot-path accessors never return these; see
/// [`Lattice::cell_at`](crate::Lattice::cell_at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero cells.
    EmptyLattice,
    /// A dimension exceeds what signed `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"width"`, `"height"` or `"depth"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest allowed size.
        max: u32,
    },
    /// `width * height * depth` does not fit in `usize`.
    CellCountOverflow {
        /// The dimensions that overflowed.
        dims: Dims,
    },
    /// A coordinate is outside the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord3,
        /// The lattice extent.
        dims: Dims,
    },
    /// A bulk load supplied the wrong number of values.
    LayerSizeMismatch {
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { dims } => {
                write!(f, "cell count of {dims} lattice overflows usize")
            }
            Self::CoordOutOfBounds { coord, dims } => {
                write!(f, "coordinate {coord} out of bounds for {dims} lattice")
            }
            Self::LayerSizeMismatch { expected, actual } => {
                write!(f, "expected {expected} layer values, got {actual}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
