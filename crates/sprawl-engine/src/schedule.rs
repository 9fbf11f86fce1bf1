//! Window-overlap tests and disjoint batch planning.
//!
//! Two updates whose windows do not overlap touch disjoint lattice regions,
//! and claim-if-empty writes commute, so such updates can run in any order
//! (or concurrently) with the same result. [`plan_disjoint_batches`]
//! groups targets accordingly; [`GrowthEngine::update_batch`](crate::GrowthEngine::update_batch)
//! applies one group.

use sprawl_core::Coord3;

/// `true` iff the radius-`radius` windows centred on `a` and `b` share at
/// least one cell: `|a − b| ≤ 2·radius` on every axis.
pub fn windows_overlap(a: Coord3, b: Coord3, radius: u32) -> bool {
    let reach = 2 * i64::from(radius);
    let near = |p: i32, q: i32| (i64::from(p) - i64::from(q)).abs() <= reach;
    near(a.x, b.x) && near(a.y, b.y) && near(a.z, b.z)
}

/// Greedily partition `targets` into batches whose windows pairwise do not
/// overlap.
///
/// Each target lands in the first batch it fits, so every target appears
/// in exactly one batch and relative order is kept within a batch. A
/// target repeated in the input always overlaps itself and therefore lands
/// in a later batch each time.
pub fn plan_disjoint_batches(targets: &[Coord3], radius: u32) -> Vec<Vec<Coord3>> {
    let mut batches: Vec<Vec<Coord3>> = Vec::new();
    for &target in targets {
        let slot = batches
            .iter()
            .position(|batch| batch.iter().all(|&other| !windows_overlap(target, other, radius)));
        match slot {
            Some(i) => batches[i].push(target),
            None => batches.push(vec![target]),
        }
    }
    batches
}

/// `true` iff no two targets in `batch` have overlapping windows.
pub(crate) fn is_disjoint(batch: &[Coord3], radius: u32) -> bool {
    batch.iter().enumerate().all(|(i, &a)| {
        batch[i + 1..]
            .iter()
            .all(|&b| !windows_overlap(a, b, radius))
    })
}
