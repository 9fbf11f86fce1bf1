//! Cumulative growth counters.
//!
//! [`GrowthMetrics`] is updated by every engine call and read back by
//! drivers for logging and profiling. Counters reset on
//! [`GrowthEngine::clear`](crate::GrowthEngine::clear).

use sprawl_core::CellType;

/// Counters accumulated since construction or the last clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthMetrics {
    /// Calls to `update`, including no-ops.
    pub updates: u64,
    /// Updates whose target was Empty.
    pub noop_updates: u64,
    /// Rule dispatches (updates on non-Empty targets).
    pub rule_invocations: u64,
    /// Dispatches per cell type, indexed by ordinal.
    pub invocations_by_type: [u64; CellType::COUNT],
    /// Neighbour claims that took effect in the window. Claims that land
    /// past the lattice edge are counted here but dropped on paste.
    pub cells_claimed: u64,
    /// Target coordinates drawn by `update_random`.
    pub random_samples: u64,
}

impl GrowthMetrics {
    /// Fraction of updates that did nothing, or 0 before any update.
    pub fn noop_ratio(&self) -> f64 {
        if self.updates == 0 {
            0.0
        } else {
            self.noop_updates as f64 / self.updates as f64
        }
    }

    /// Dispatch count for one cell type.
    pub fn invocations_of(&self, cell_type: CellType) -> u64 {
        self.invocations_by_type[cell_type.ordinal() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = GrowthMetrics::default();
        assert_eq!(m.updates, 0);
        assert_eq!(m.noop_updates, 0);
        assert_eq!(m.rule_invocations, 0);
        assert!(m.invocations_by_type.iter().all(|&n| n == 0));
        assert_eq!(m.cells_claimed, 0);
        assert_eq!(m.random_samples, 0);
        assert_eq!(m.noop_ratio(), 0.0);
    }

    #[test]
    fn noop_ratio_and_per_type() {
        let mut m = GrowthMetrics {
            updates: 4,
            noop_updates: 3,
            ..Default::default()
        };
        m.invocations_by_type[CellType::RoadEW.ordinal() as usize] = 1;
        assert_eq!(m.noop_ratio(), 0.75);
        assert_eq!(m.invocations_of(CellType::RoadEW), 1);
        assert_eq!(m.invocations_of(CellType::RoadNS), 0);
    }
}
