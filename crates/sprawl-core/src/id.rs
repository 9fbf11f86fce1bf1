//! Lattice coordinates ([`Coord3`]) and extents ([`Dims`]).

use std::fmt;

/// A signed 3D lattice coordinate.
///
/// Signed so that window offsets can be added without wrapping; whether a
/// coordinate is actually inside a lattice is decided by [`Dims::contains`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// Column (west → east).
    pub x: i32,
    /// Row (north → south).
    pub y: i32,
    /// Layer.
    pub z: i32,
}

impl Coord3 {
    /// Construct a coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// This coordinate shifted by `(dx, dy, dz)`.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The six face-adjacent coordinates (west, east, north, south, below, above).
    pub const fn face_neighbours(self) -> [Coord3; 6] {
        [
            self.offset(-1, 0, 0),
            self.offset(1, 0, 0),
            self.offset(0, -1, 0),
            self.offset(0, 1, 0),
            self.offset(0, 0, -1),
            self.offset(0, 0, 1),
        ]
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

/// Extent of a lattice: `width × height × depth` cells.
///
/// Cells are laid out row-major with `x` fastest:
/// `index = x + y·width + z·width·height`. Validation of the extent
/// (non-zero, fits in `i32`, total fits in memory) happens where a lattice
/// is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Cells along `x`.
    pub width: u32,
    /// Cells along `y`.
    pub height: u32,
    /// Cells along `z`.
    pub depth: u32,
}

impl Dims {
    /// Construct an extent.
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// A single-layer extent (`depth == 1`).
    pub const fn flat(width: u32, height: u32) -> Self {
        Self::new(width, height, 1)
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.depth as usize)
    }

    /// Total number of cells.
    ///
    /// Only meaningful for validated extents; see
    /// [`checked_cell_count`](Self::checked_cell_count).
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// `true` iff `0 ≤ x < width`, `0 ≤ y < height` and `0 ≤ z < depth`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && (z as u32) < self.depth
    }

    /// Flat index of an in-range coordinate.
    ///
    /// The caller guarantees `contains(x, y, z)`; this is checked only in
    /// debug builds.
    #[inline]
    pub fn index(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(
            self.contains(x, y, z),
            "coordinate ({x}, {y}, {z}) outside {self}"
        );
        let w = self.width as usize;
        let h = self.height as usize;
        x as usize + y as usize * w + z as usize * w * h
    }

    /// Inverse of [`index`](Self::index).
    pub fn coord_of(&self, index: usize) -> Coord3 {
        let w = self.width as usize;
        let h = self.height as usize;
        Coord3 {
            x: (index % w) as i32,
            y: ((index / w) % h) as i32,
            z: (index / (w * h)) as i32,
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}
