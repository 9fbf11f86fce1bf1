//! Content hashing for lattice comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of lattice state. Not
//! cryptographically secure; used for equality checks in determinism
//! tests and long-running comparisons.

use crate::lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash the extent and every cell (type ordinal, then payload, as
/// little-endian `u32`s) in index order.
///
/// The result is platform independent. Cells compare by type only, but
/// the hash covers the payload too, so equal hashes imply byte-identical
/// read views.
pub fn content_hash(lattice: &Lattice) -> u64 {
    let dims = lattice.dims();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, dims.width);
    hash = fnv1a_u32(hash, dims.height);
    hash = fnv1a_u32(hash, dims.depth);
    for cell in lattice.cells() {
        hash = fnv1a_u32(hash, cell.cell_type.ordinal());
        hash = fnv1a_u32(hash, cell.data);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_core::{CellType, Dims};

    #[test]
    fn same_content_same_hash() {
        let mut a = Lattice::new(Dims::flat(4, 4)).unwrap();
        let mut b = Lattice::new(Dims::flat(4, 4)).unwrap();
        a.set_cell(1, 2, 0, CellType::RoadNS).unwrap();
        b.set_cell(1, 2, 0, CellType::RoadNS).unwrap();
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn different_content_different_hash() {
        let mut a = Lattice::new(Dims::flat(4, 4)).unwrap();
        let b = a.clone();
        a.set_cell(0, 0, 0, CellType::Grass).unwrap();
        assert_ne!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn payload_is_hashed() {
        let mut a = Lattice::new(Dims::flat(2, 2)).unwrap();
        let b = a.clone();
        a.cell_at_mut(0, 0, 0).data = 1;
        assert_ne!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn shape_is_hashed() {
        let a = Lattice::new(Dims::flat(2, 8)).unwrap();
        let b = Lattice::new(Dims::flat(8, 2)).unwrap();
        assert_ne!(content_hash(&a), content_hash(&b));
    }
}
