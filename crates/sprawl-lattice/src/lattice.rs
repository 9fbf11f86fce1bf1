//! The dense 3D [`Lattice`] and window snapshot/write-back.

use sprawl_core::{Cell, CellType, Coord3, Dims};

use crate::error::LatticeError;
use crate::window::Window;

/// How far along each axis [`Lattice::paste_window`] writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasteBounds {
    /// Write back every offset in `[-S, S]`, matching the copy.
    #[default]
    Inclusive,
    /// Write back offsets in `[-S, S)` only, so the far face of the window
    /// on each axis is copied in but never written back. Kept for
    /// bit-compatibility with older lattices; with `S = 1` it discards all
    /// growth toward `+x`, `+y` and `+z`.
    LegacyExclusive,
}

/// Fixed-size dense storage of `width × height × depth` cells.
///
/// Indexed `x + y·width + z·width·height`. Every in-range coordinate always
/// holds a valid [`Cell`]; the extent never changes after construction.
///
/// # Examples
///
/// ```
/// use sprawl_core::{CellType, Dims};
/// use sprawl_lattice::{Lattice, PasteBounds};
///
/// let mut lattice = Lattice::new(Dims::flat(4, 4)).unwrap();
/// lattice.set_cell(0, 0, 0, CellType::RoadNS).unwrap();
///
/// // Windows reaching past the edge read Empty there.
/// let mut window = lattice.copy_window(0, 0, 0, 1);
/// assert_eq!(*window.at(-1, 0, 0), CellType::Empty);
/// window.claim(0, 1, 0, CellType::RoadNS);
/// lattice.paste_window(&window, 0, 0, 0, PasteBounds::Inclusive);
/// assert_eq!(*lattice.cell_at(0, 1, 0), CellType::RoadNS);
/// ```
#[derive(Clone, Debug)]
pub struct Lattice {
    dims: Dims,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Maximum size of any dimension: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-Empty lattice.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if any dimension is 0,
    /// `Err(LatticeError::DimensionTooLarge)` if one exceeds `i32::MAX`,
    /// or `Err(LatticeError::CellCountOverflow)` if the product does not
    /// fit in `usize`.
    pub fn new(dims: Dims) -> Result<Self, LatticeError> {
        let count = Self::validate_dims(dims)?;
        Ok(Self {
            dims,
            cells: vec![Cell::EMPTY; count],
        })
    }

    /// Check that `dims` describes a constructible lattice and return its
    /// cell count. Allocates nothing.
    pub fn validate_dims(dims: Dims) -> Result<usize, LatticeError> {
        if dims.width == 0 || dims.height == 0 || dims.depth == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        for (name, value) in [
            ("width", dims.width),
            ("height", dims.height),
            ("depth", dims.depth),
        ] {
            if value > Self::MAX_DIM {
                return Err(LatticeError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        dims.checked_cell_count()
            .ok_or(LatticeError::CellCountOverflow { dims })
    }

    /// The lattice extent.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Cells along `x`.
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    /// Cells along `y`.
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Cells along `z`.
    pub fn depth(&self) -> u32 {
        self.dims.depth
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty lattices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` iff `0 ≤ x < W`, `0 ≤ y < H` and `0 ≤ z < D`.
    #[inline]
    pub fn is_in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(x, y, z)
    }

    /// Direct access to an in-range cell.
    ///
    /// The caller guarantees the coordinate is in bounds. This is only
    /// checked in debug builds; use [`get`](Self::get) when in doubt.
    #[inline]
    pub fn cell_at(&self, x: i32, y: i32, z: i32) -> &Cell {
        &self.cells[self.dims.index(x, y, z)]
    }

    /// Direct mutable access to an in-range cell. Same contract as
    /// [`cell_at`](Self::cell_at).
    #[inline]
    pub fn cell_at_mut(&mut self, x: i32, y: i32, z: i32) -> &mut Cell {
        let i = self.dims.index(x, y, z);
        &mut self.cells[i]
    }

    /// Checked access.
    pub fn get(&self, coord: Coord3) -> Option<&Cell> {
        self.is_in_bounds(coord.x, coord.y, coord.z)
            .then(|| self.cell_at(coord.x, coord.y, coord.z))
    }

    /// Unconditionally set a cell's type. Used by drivers to place seed
    /// cells before growth starts; growth itself never goes through here.
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, cell_type: CellType) -> Result<(), LatticeError> {
        if !self.is_in_bounds(x, y, z) {
            return Err(LatticeError::CoordOutOfBounds {
                coord: Coord3::new(x, y, z),
                dims: self.dims,
            });
        }
        self.cell_at_mut(x, y, z).cell_type = cell_type;
        Ok(())
    }

    /// Reset every cell to Empty with a zero payload.
    pub fn clear(&mut self) {
        self.fill(CellType::Empty);
    }

    /// Reset every cell to `fill` with a zero payload.
    pub fn fill(&mut self, fill: CellType) {
        self.cells.fill(Cell::new(fill));
    }

    // ── Windows ─────────────────────────────────────────────────

    /// Snapshot the cube of half-extent `radius` centred on `(x, y, z)`.
    ///
    /// Offsets whose absolute coordinate is outside the lattice read as
    /// Empty; nothing outside the lattice is ever touched.
    pub fn copy_window(&self, x: i32, y: i32, z: i32, radius: u32) -> Window {
        let mut window = Window::new(radius);
        self.copy_window_into(&mut window, x, y, z);
        window
    }

    /// Like [`copy_window`](Self::copy_window) but reuses `window`'s
    /// storage. Every cell of `window` is overwritten.
    pub fn copy_window_into(&self, window: &mut Window, x: i32, y: i32, z: i32) {
        let s = window.radius() as i32;
        for dz in -s..=s {
            for dy in -s..=s {
                for dx in -s..=s {
                    let (ax, ay, az) = (x + dx, y + dy, z + dz);
                    *window.at_mut(dx, dy, dz) = if self.is_in_bounds(ax, ay, az) {
                        *self.cell_at(ax, ay, az)
                    } else {
                        Cell::EMPTY
                    };
                }
            }
        }
    }

    /// Write `window`, centred on `(x, y, z)`, back into the lattice.
    ///
    /// Offsets whose absolute coordinate is outside the lattice are
    /// dropped. `bounds` selects whether the window's far face is
    /// written; see [`PasteBounds`].
    pub fn paste_window(&mut self, window: &Window, x: i32, y: i32, z: i32, bounds: PasteBounds) {
        let s = window.radius() as i32;
        let hi = match bounds {
            PasteBounds::Inclusive => s,
            PasteBounds::LegacyExclusive => s - 1,
        };
        for dz in -s..=hi {
            for dy in -s..=hi {
                for dx in -s..=hi {
                    let (ax, ay, az) = (x + dx, y + dy, z + dz);
                    if self.is_in_bounds(ax, ay, az) {
                        *self.cell_at_mut(ax, ay, az) = *window.at(dx, dy, dz);
                    }
                }
            }
        }
    }

    // ── Read views ──────────────────────────────────────────────

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The flat byte view: `W·H·D` records of 8 bytes each, the `u32`
    /// type ordinal followed by the `u32` payload in native byte order,
    /// no header and no padding.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Every non-Empty cell with its coordinate, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord3, Cell)> + '_ {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_occupied())
            .map(move |(i, c)| (dims.coord_of(i), *c))
    }

    /// Number of non-Empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Number of cells of each type, indexed by ordinal.
    pub fn histogram(&self) -> [usize; CellType::COUNT] {
        let mut counts = [0usize; CellType::COUNT];
        for c in &self.cells {
            counts[c.cell_type.ordinal() as usize] += 1;
        }
        counts
    }

    /// Render the `z` layer as text: one line per row (north first), one
    /// [`glyph`](CellType::glyph) per cell.
    ///
    /// Returns an empty string if `z` is outside the lattice.
    pub fn to_ascii(&self, z: i32) -> String {
        if !self.is_in_bounds(0, 0, z) {
            return String::new();
        }
        let w = self.dims.width as usize;
        let mut out = String::with_capacity((w + 1) * self.dims.height as usize * 3);
        for y in 0..self.dims.height as i32 {
            for x in 0..self.dims.width as i32 {
                out.push(self.cell_at(x, y, z).cell_type.glyph());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(w: u32, h: u32, d: u32) -> Lattice {
        Lattice::new(Dims::new(w, h, d)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_starts_empty() {
        let l = lattice(3, 4, 2);
        assert_eq!(l.len(), 24);
        assert_eq!(l.occupied_count(), 0);
        assert!(l.cells().iter().all(|c| *c == CellType::Empty));
    }

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(
            Lattice::new(Dims::new(0, 4, 1)).unwrap_err(),
            LatticeError::EmptyLattice
        );
        assert_eq!(
            Lattice::new(Dims::new(4, 4, 0)).unwrap_err(),
            LatticeError::EmptyLattice
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Lattice::new(Dims::new(1, big, 1)),
            Err(LatticeError::DimensionTooLarge { name: "height", .. })
        ));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn set_cell_checks_bounds() {
        let mut l = lattice(4, 4, 1);
        l.set_cell(3, 3, 0, CellType::RoadEW).unwrap();
        assert_eq!(*l.cell_at(3, 3, 0), CellType::RoadEW);
        assert_eq!(
            l.set_cell(4, 0, 0, CellType::RoadEW),
            Err(LatticeError::CoordOutOfBounds {
                coord: Coord3::new(4, 0, 0),
                dims: Dims::new(4, 4, 1),
            })
        );
    }

    #[test]
    fn get_returns_none_outside() {
        let l = lattice(2, 2, 2);
        assert!(l.get(Coord3::new(1, 1, 1)).is_some());
        assert!(l.get(Coord3::new(-1, 0, 0)).is_none());
        assert!(l.get(Coord3::new(0, 2, 0)).is_none());
    }

    #[test]
    fn clear_and_fill() {
        let mut l = lattice(3, 3, 1);
        l.fill(CellType::Grass);
        assert_eq!(l.occupied_count(), 9);
        assert_eq!(l.histogram()[CellType::Grass.ordinal() as usize], 9);
        l.clear();
        assert_eq!(l.occupied_count(), 0);
    }

    // ── Windows ─────────────────────────────────────────────────

    #[test]
    fn copy_window_reads_neighbourhood() {
        let mut l = lattice(5, 5, 1);
        l.set_cell(2, 1, 0, CellType::RoadNS).unwrap();
        l.set_cell(3, 2, 0, CellType::RoadEW).unwrap();
        let w = l.copy_window(2, 2, 0, 1);
        assert_eq!(*w.at(0, -1, 0), CellType::RoadNS);
        assert_eq!(*w.at(1, 0, 0), CellType::RoadEW);
        assert_eq!(*w.at(0, 0, -1), CellType::Empty);
    }

    #[test]
    fn copy_window_synthesises_empty_outside() {
        let mut l = lattice(2, 2, 1);
        l.fill(CellType::Grass);
        let w = l.copy_window(0, 0, 0, 2);
        assert_eq!(*w.at(0, 0, 0), CellType::Grass);
        assert_eq!(*w.at(1, 1, 0), CellType::Grass);
        assert_eq!(*w.at(-1, 0, 0), CellType::Empty);
        assert_eq!(*w.at(2, 0, 0), CellType::Empty);
        assert_eq!(*w.at(0, 0, 1), CellType::Empty);
    }

    #[test]
    fn inclusive_paste_writes_far_face() {
        let mut l = lattice(3, 3, 1);
        let mut w = l.copy_window(1, 1, 0, 1);
        w.claim(1, 1, 0, CellType::Road4Way);
        w.claim(-1, -1, 0, CellType::Grass);
        l.paste_window(&w, 1, 1, 0, PasteBounds::Inclusive);
        assert_eq!(*l.cell_at(2, 2, 0), CellType::Road4Way);
        assert_eq!(*l.cell_at(0, 0, 0), CellType::Grass);
    }

    #[test]
    fn legacy_paste_drops_far_face() {
        let mut l = lattice(3, 3, 1);
        let mut w = l.copy_window(1, 1, 0, 1);
        w.claim(1, 0, 0, CellType::RoadEW);
        w.claim(0, 1, 0, CellType::RoadNS);
        w.claim(-1, 0, 0, CellType::RoadEW);
        w.claim(0, -1, 0, CellType::RoadNS);
        l.paste_window(&w, 1, 1, 0, PasteBounds::LegacyExclusive);
        assert_eq!(*l.cell_at(2, 1, 0), CellType::Empty);
        assert_eq!(*l.cell_at(1, 2, 0), CellType::Empty);
        assert_eq!(*l.cell_at(0, 1, 0), CellType::RoadEW);
        assert_eq!(*l.cell_at(1, 0, 0), CellType::RoadNS);
    }

    #[test]
    fn round_trip_without_edits_is_identity() {
        let mut l = lattice(4, 4, 2);
        l.set_cell(0, 3, 1, CellType::RoadDiagTL).unwrap();
        l.set_cell(3, 0, 0, CellType::RoadNSE).unwrap();
        let before = l.cells().to_vec();
        let dims = l.dims();
        for coord in (0..l.len()).map(|i| dims.coord_of(i)) {
            let w = l.copy_window(coord.x, coord.y, coord.z, 2);
            l.paste_window(&w, coord.x, coord.y, coord.z, PasteBounds::Inclusive);
        }
        assert_eq!(l.cells(), before.as_slice());
    }

    // ── Read views ──────────────────────────────────────────────

    #[test]
    fn as_bytes_is_eight_bytes_per_cell() {
        let mut l = lattice(3, 2, 1);
        l.set_cell(1, 1, 0, CellType::RoadEWN).unwrap();
        let bytes = l.as_bytes();
        assert_eq!(bytes.len(), 6 * 8);
        let off = l.dims().index(1, 1, 0) * 8;
        assert_eq!(&bytes[off..off + 4], &9u32.to_ne_bytes());
        assert_eq!(&bytes[off + 4..off + 8], &0u32.to_ne_bytes());
    }

    #[test]
    fn occupied_yields_coordinates() {
        let mut l = lattice(3, 3, 2);
        l.set_cell(2, 0, 1, CellType::Grass).unwrap();
        let v: Vec<_> = l.occupied().collect();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].0, Coord3::new(2, 0, 1));
        assert_eq!(v[0].1, CellType::Grass);
    }

    #[test]
    fn to_ascii_renders_rows() {
        let mut l = lattice(3, 2, 1);
        l.set_cell(1, 0, 0, CellType::RoadNS).unwrap();
        l.set_cell(2, 1, 0, CellType::Road4Way).unwrap();
        assert_eq!(l.to_ascii(0), ".│.\n..┼\n");
        assert_eq!(l.to_ascii(1), "");
    }
}
