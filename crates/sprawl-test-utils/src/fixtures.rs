//! Engine and lattice fixtures.

use std::collections::{BTreeSet, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sprawl_core::{CellType, Coord3, Dims};
use sprawl_engine::{EngineConfig, GrowthEngine};
use sprawl_lattice::Lattice;

/// An engine over `dims` with a single `seed_type` cell at `at`.
///
/// Panics on invalid input; fixtures are only used with known-good values.
pub fn seeded_engine(dims: Dims, seed: u64, chance: u8, at: Coord3, seed_type: CellType) -> GrowthEngine {
    let config = EngineConfig::new(dims)
        .with_seed(seed)
        .with_intersection_chance(chance);
    let mut engine = GrowthEngine::new(config).expect("fixture config is valid");
    engine
        .set_cell(at.x, at.y, at.z, seed_type)
        .expect("fixture seed is in bounds");
    engine
}

/// `n` in-bounds coordinates drawn from their own ChaCha stream, so the
/// same `seed` always yields the same target sequence.
pub fn random_targets(dims: Dims, n: usize, seed: u64) -> Vec<Coord3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Coord3::new(
                rng.random_range(0..dims.width) as i32,
                rng.random_range(0..dims.height) as i32,
                rng.random_range(0..dims.depth) as i32,
            )
        })
        .collect()
}

/// Every non-Empty coordinate, in index order.
pub fn occupied_coords(lattice: &Lattice) -> Vec<Coord3> {
    lattice.occupied().map(|(c, _)| c).collect()
}

/// Occupied cells reachable from `start` through face-adjacent occupied
/// cells. Empty if `start` itself is Empty or out of bounds.
pub fn reachable_from(lattice: &Lattice, start: Coord3) -> BTreeSet<Coord3> {
    let occupied = |c: Coord3| lattice.get(c).is_some_and(|cell| cell.is_occupied());
    let mut seen = BTreeSet::new();
    if !occupied(start) {
        return seen;
    }
    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some(c) = queue.pop_front() {
        for n in c.face_neighbours() {
            if occupied(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}
