//! The local event [`Window`]: a cube of cells around a focus coordinate.

use sprawl_core::{Cell, CellType, TypeSet};

/// A cube of `(2S+1)³` cells addressed by offsets in `[-S, S]` per axis.
///
/// A window is a detached copy: rules read and claim cells in it freely,
/// and nothing reaches the lattice until the window is pasted back with
/// [`Lattice::paste_window`](crate::Lattice::paste_window). Cells that fell
/// outside the lattice when the window was copied read as
/// [`CellType::Empty`].
///
/// Storage is `x`-fastest, mirroring the lattice:
/// `slot = (dx+S) + (dy+S)·E + (dz+S)·E²` with `E = 2S+1`.
#[derive(Clone, Debug)]
pub struct Window {
    radius: i32,
    edge: usize,
    cells: Vec<Cell>,
}

impl Window {
    /// Largest supported half-extent.
    pub const MAX_RADIUS: u32 = 32;

    /// An all-Empty window of half-extent `radius`.
    ///
    /// # Panics
    ///
    /// Panics if `radius` exceeds [`MAX_RADIUS`](Self::MAX_RADIUS).
    pub fn new(radius: u32) -> Self {
        assert!(
            radius <= Self::MAX_RADIUS,
            "window radius {radius} exceeds maximum {}",
            Self::MAX_RADIUS
        );
        let edge = 2 * radius as usize + 1;
        Self {
            radius: radius as i32,
            edge,
            cells: vec![Cell::EMPTY; edge * edge * edge],
        }
    }

    /// Half-extent `S`.
    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    /// Edge length `2S+1`.
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Number of cells, `(2S+1)³`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; the smallest window holds one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` iff every component of the offset lies in `[-S, S]`.
    #[inline]
    pub fn contains_offset(&self, dx: i32, dy: i32, dz: i32) -> bool {
        let s = self.radius;
        (-s..=s).contains(&dx) && (-s..=s).contains(&dy) && (-s..=s).contains(&dz)
    }

    #[inline]
    fn slot(&self, dx: i32, dy: i32, dz: i32) -> usize {
        debug_assert!(
            self.contains_offset(dx, dy, dz),
            "offset ({dx}, {dy}, {dz}) outside window of radius {}",
            self.radius
        );
        let s = self.radius;
        let e = self.edge;
        (dx + s) as usize + (dy + s) as usize * e + (dz + s) as usize * e * e
    }

    /// The cell at an offset from the focus.
    #[inline]
    pub fn at(&self, dx: i32, dy: i32, dz: i32) -> &Cell {
        &self.cells[self.slot(dx, dy, dz)]
    }

    /// Mutable access to the cell at an offset from the focus.
    #[inline]
    pub fn at_mut(&mut self, dx: i32, dy: i32, dz: i32) -> &mut Cell {
        let i = self.slot(dx, dy, dz);
        &mut self.cells[i]
    }

    /// The focus cell, offset `(0, 0, 0)`.
    pub fn center(&self) -> &Cell {
        self.at(0, 0, 0)
    }

    /// Claim-if-empty at an offset. Returns `true` if the write took effect.
    #[inline]
    pub fn claim(&mut self, dx: i32, dy: i32, dz: i32, candidate: CellType) -> bool {
        self.at_mut(dx, dy, dz).claim(candidate)
    }

    /// `true` if any cell in the window has a type in `types`.
    pub fn contains_any(&self, types: &TypeSet) -> bool {
        self.cells.iter().any(|c| c.is_in(types))
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Raw storage in slot order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every offset in slot order (`dx` fastest).
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32, i32)> {
        let s = self.radius;
        (-s..=s).flat_map(move |dz| (-s..=s).flat_map(move |dy| (-s..=s).map(move |dx| (dx, dy, dz))))
    }
}
