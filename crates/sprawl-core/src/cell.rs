//! The categorical [`CellType`] enumeration and the per-cell [`Cell`] value.
//!
//! Cells follow a grow-once discipline: every write made by a growth rule
//! goes through [`Cell::claim`] or [`Cell::claim_from`], which only take
//! effect while the target is [`CellType::Empty`]. Once a cell is occupied
//! no rule can change it again.

use bytemuck::NoUninit;
use rand::Rng;

use crate::error::CellTypeError;
use crate::type_set::TypeSet;

// ── CellType ────────────────────────────────────────────────────

/// What occupies a lattice cell.
///
/// Ordinals are stable and form part of the flat read view handed to
/// renderers, so variants must never be reordered. The ordinal is also the
/// dispatch key for the growth rule table.
///
/// Diagonal pieces are named after the two tile edges they connect:
/// `RoadDiagBL` joins the bottom and left edges, `RoadDiagTR` the top and
/// right edges, and so on. T-junctions are named after their through axis
/// followed by the single stub direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, NoUninit)]
#[repr(u32)]
pub enum CellType {
    /// Nothing has grown here yet.
    #[default]
    Empty = 0,
    /// Inert ground cover. Never propagates.
    Grass = 1,
    /// Straight road running north–south.
    RoadNS = 2,
    /// Straight road running east–west.
    RoadEW = 3,
    /// Diagonal piece joining the bottom and left edges.
    RoadDiagBL = 4,
    /// Diagonal piece joining the bottom and right edges.
    RoadDiagBR = 5,
    /// Diagonal piece joining the top and right edges.
    RoadDiagTR = 6,
    /// Diagonal piece joining the top and left edges.
    RoadDiagTL = 7,
    /// Four-way intersection.
    Road4Way = 8,
    /// T-junction: east–west through road with a northern stub.
    RoadEWN = 9,
    /// T-junction: east–west through road with a southern stub.
    RoadEWS = 10,
    /// T-junction: north–south through road with an eastern stub.
    RoadNSE = 11,
    /// T-junction: north–south through road with a western stub.
    RoadNSW = 12,
}

impl CellType {
    /// Number of cell types.
    pub const COUNT: usize = 13;

    /// Every cell type in ordinal order.
    pub const ALL: [CellType; Self::COUNT] = [
        Self::Empty,
        Self::Grass,
        Self::RoadNS,
        Self::RoadEW,
        Self::RoadDiagBL,
        Self::RoadDiagBR,
        Self::RoadDiagTR,
        Self::RoadDiagTL,
        Self::Road4Way,
        Self::RoadEWN,
        Self::RoadEWS,
        Self::RoadNSE,
        Self::RoadNSW,
    ];

    /// The stable ordinal of this type.
    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Look up a type by ordinal.
    pub const fn from_ordinal(value: u32) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// All types whose ordinals lie in `first..=last`. Empty when
    /// `first > last`.
    pub fn range(first: CellType, last: CellType) -> impl Iterator<Item = CellType> {
        (first.ordinal()..=last.ordinal()).filter_map(Self::from_ordinal)
    }

    /// `true` for every road piece (straight, diagonal, junction).
    pub const fn is_road(self) -> bool {
        !matches!(self, Self::Empty | Self::Grass)
    }

    /// `true` for the two straight pieces.
    pub const fn is_straight(self) -> bool {
        matches!(self, Self::RoadNS | Self::RoadEW)
    }

    /// `true` for the four diagonal pieces.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::RoadDiagBL | Self::RoadDiagBR | Self::RoadDiagTR | Self::RoadDiagTL
        )
    }

    /// `true` for the 4-way intersection and the four T-junctions.
    pub const fn is_junction(self) -> bool {
        matches!(
            self,
            Self::Road4Way | Self::RoadEWN | Self::RoadEWS | Self::RoadNSE | Self::RoadNSW
        )
    }

    /// Single-character glyph used by text renderings of the lattice.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Grass => '"',
            Self::RoadNS => '│',
            Self::RoadEW => '─',
            Self::RoadDiagBL => '┐',
            Self::RoadDiagBR => '┌',
            Self::RoadDiagTR => '└',
            Self::RoadDiagTL => '┘',
            Self::Road4Way => '┼',
            Self::RoadEWN => '┴',
            Self::RoadEWS => '┬',
            Self::RoadNSE => '├',
            Self::RoadNSW => '┤',
        }
    }
}

impl TryFrom<u32> for CellType {
    type Error = CellTypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(CellTypeError::UnknownOrdinal { value })
    }
}

impl From<CellType> for u32 {
    fn from(t: CellType) -> Self {
        t.ordinal()
    }
}

// ── Cell ────────────────────────────────────────────────────────

/// One lattice entry: a type tag plus a reserved auxiliary payload.
///
/// The layout is part of the external read contract: `#[repr(C)]`, the
/// `u32` type ordinal followed by the `u32` payload, 8 bytes, no padding.
///
/// Equality compares only the type. `data` is carried along by window
/// copies but is not consumed by any growth rule.
#[derive(Clone, Copy, Debug, Default, NoUninit)]
#[repr(C)]
pub struct Cell {
    /// What occupies the cell.
    pub cell_type: CellType,
    /// Reserved auxiliary payload.
    pub data: u32,
}

const _: () = assert!(std::mem::size_of::<Cell>() == 8);

impl Cell {
    /// An empty cell with a zero payload.
    pub const EMPTY: Cell = Cell::new(CellType::Empty);

    /// A cell of the given type with a zero payload.
    pub const fn new(cell_type: CellType) -> Self {
        Self { cell_type, data: 0 }
    }

    /// A cell of the given type carrying `data`.
    pub const fn with_data(cell_type: CellType, data: u32) -> Self {
        Self { cell_type, data }
    }

    /// `true` if anything has grown here.
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        !matches!(self.cell_type, CellType::Empty)
    }

    /// `true` if this cell's type is a member of `set`.
    #[inline]
    pub fn is_in(&self, set: &TypeSet) -> bool {
        set.contains(self.cell_type)
    }

    /// `true` if this cell's ordinal lies in `first..=last`.
    pub fn is_in_range(&self, first: CellType, last: CellType) -> bool {
        let t = self.cell_type.ordinal();
        t >= first.ordinal() && t <= last.ordinal()
    }

    /// Claim-if-empty: set the type to `candidate` iff this cell is Empty.
    ///
    /// Returns `true` if the write took effect. The payload is left as is.
    #[inline]
    pub fn claim(&mut self, candidate: CellType) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.cell_type = candidate;
        true
    }

    /// Claim-if-empty with a whole cell, payload included.
    pub fn claim_cell(&mut self, candidate: Cell) -> bool {
        if self.is_occupied() {
            return false;
        }
        *self = candidate;
        true
    }

    /// Random claim: if this cell is Empty, draw one of `candidates`
    /// uniformly and claim with it.
    ///
    /// Draws nothing from `rng` when the cell is already occupied.
    /// `candidates` must be non-empty; an empty set is a programming error
    /// and trips a debug assertion (in release builds the call is a no-op).
    pub fn claim_from<R: Rng>(&mut self, candidates: &[CellType], rng: &mut R) -> bool {
        debug_assert!(!candidates.is_empty(), "candidate set must not be empty");
        if self.is_occupied() || candidates.is_empty() {
            return false;
        }
        let pick = candidates[rng.random_range(0..candidates.len())];
        self.claim(pick)
    }

    /// Unconditionally overwrite the type with a uniform draw from
    /// `candidates`. Intended for drivers laying down seed patterns; growth
    /// rules never use it.
    pub fn assign_from<R: Rng>(&mut self, candidates: &[CellType], rng: &mut R) {
        debug_assert!(!candidates.is_empty(), "candidate set must not be empty");
        if candidates.is_empty() {
            return;
        }
        self.cell_type = candidates[rng.random_range(0..candidates.len())];
    }
}

impl From<CellType> for Cell {
    fn from(cell_type: CellType) -> Self {
        Self::new(cell_type)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.cell_type == other.cell_type
    }
}

impl Eq for Cell {}

impl PartialEq<CellType> for Cell {
    fn eq(&self, other: &CellType) -> bool {
        self.cell_type == *other
    }
}
