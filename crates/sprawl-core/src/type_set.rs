//! The [`TypeSet`] bitset over [`CellType`] ordinals.

use std::fmt;

use crate::cell::CellType;

/// A set of cell types, one bit per ordinal.
///
/// Used for "is-in-set" predicates: [`Cell::is_in`](crate::Cell::is_in)
/// and the lattice window's `contains_any` scan.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeSet {
    bits: u16,
}

const _: () = assert!(CellType::COUNT <= u16::BITS as usize);

impl TypeSet {
    /// The set with no members.
    pub const EMPTY: TypeSet = TypeSet { bits: 0 };

    /// Every road piece.
    pub const ROADS: TypeSet = TypeSet::from_slice(&[
        CellType::RoadNS,
        CellType::RoadEW,
        CellType::RoadDiagBL,
        CellType::RoadDiagBR,
        CellType::RoadDiagTR,
        CellType::RoadDiagTL,
        CellType::Road4Way,
        CellType::RoadEWN,
        CellType::RoadEWS,
        CellType::RoadNSE,
        CellType::RoadNSW,
    ]);

    /// The four diagonal pieces.
    pub const DIAGONALS: TypeSet = TypeSet::from_slice(&[
        CellType::RoadDiagBL,
        CellType::RoadDiagBR,
        CellType::RoadDiagTR,
        CellType::RoadDiagTL,
    ]);

    /// The 4-way intersection and the four T-junctions.
    pub const JUNCTIONS: TypeSet = TypeSet::from_slice(&[
        CellType::Road4Way,
        CellType::RoadEWN,
        CellType::RoadEWS,
        CellType::RoadNSE,
        CellType::RoadNSW,
    ]);

    /// Create an empty set.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Build a set from a slice of types. Usable in `const` context.
    pub const fn from_slice(types: &[CellType]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < types.len() {
            bits |= 1 << types[i] as u32;
            i += 1;
        }
        Self { bits }
    }

    /// Insert a type into the set.
    pub fn insert(&mut self, t: CellType) {
        self.bits |= Self::bit(t);
    }

    /// Remove a type from the set.
    pub fn remove(&mut self, t: CellType) {
        self.bits &= !Self::bit(t);
    }

    /// Check whether the set contains a type.
    #[inline]
    pub const fn contains(&self, t: CellType) -> bool {
        self.bits & Self::bit(t) != 0
    }

    /// Return the union of two sets (`self | other`).
    pub const fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub const fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Number of members.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// `true` if the set has no members.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate members in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = CellType> + '_ {
        CellType::ALL.into_iter().filter(|t| self.contains(*t))
    }

    #[inline]
    const fn bit(t: CellType) -> u16 {
        1 << t as u32
    }
}

impl FromIterator<CellType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = CellType>>(iter: I) -> Self {
        let mut set = Self::empty();
        for t in iter {
            set.insert(t);
        }
        set
    }
}

impl From<&[CellType]> for TypeSet {
    fn from(types: &[CellType]) -> Self {
        Self::from_slice(types)
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
