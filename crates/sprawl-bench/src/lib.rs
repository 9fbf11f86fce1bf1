//! Benchmark profiles for the Sprawl growth engine.
//!
//! - [`reference_profile`]: 256×256×1, window radius 4, the historical
//!   demo setup.
//! - [`stress_profile`]: 512×512×4, window radius 1, many seeds.
//! - [`grown_engine`]: a profile pre-grown for a fixed number of updates,
//!   so per-update costs are measured on a populated lattice.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprawl_core::{CellType, Dims};
use sprawl_engine::{ConfigError, EngineConfig, GrowthEngine};

/// 256×256×1 lattice, `S = 4`, default seed and 20% intersection chance,
/// one `RoadNS` at (16, 16).
pub fn reference_profile(seed: u64) -> Result<GrowthEngine, ConfigError> {
    let config = EngineConfig::new(Dims::flat(256, 256))
        .with_window_radius(4)
        .with_seed(seed);
    let mut engine = GrowthEngine::new(config)?;
    engine.set_cell(16, 16, 0, CellType::RoadNS)?;
    Ok(engine)
}

/// 512×512×4 lattice, `S = 1`, with a straight road seeded every 64 cells
/// on each layer.
pub fn stress_profile(seed: u64) -> Result<GrowthEngine, ConfigError> {
    let config = EngineConfig::new(Dims::new(512, 512, 4)).with_seed(seed);
    let mut engine = GrowthEngine::new(config)?;
    for z in 0..4 {
        for y in (32..512).step_by(64) {
            for x in (32..512).step_by(64) {
                let t = if (x / 64 + y / 64) % 2 == 0 {
                    CellType::RoadNS
                } else {
                    CellType::RoadEW
                };
                engine.set_cell(x, y, z, t)?;
            }
        }
    }
    Ok(engine)
}

/// Run `updates` random updates on `engine` and hand it back.
pub fn grown_engine(mut engine: GrowthEngine, updates: u64) -> GrowthEngine {
    engine.run_random(updates);
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_builds() {
        let e = reference_profile(87_735_410).unwrap();
        assert_eq!(e.lattice().len(), 256 * 256);
        assert_eq!(e.window_radius(), 4);
        assert_eq!(*e.lattice().cell_at(16, 16, 0), CellType::RoadNS);
    }

    #[test]
    fn stress_profile_seeds_every_layer() {
        let e = stress_profile(1).unwrap();
        assert_eq!(e.lattice().occupied_count(), 8 * 8 * 4);
    }

    #[test]
    fn grown_engine_grows() {
        let e = grown_engine(reference_profile(3).unwrap(), 2_000_000);
        assert!(e.lattice().occupied_count() > 1);
    }
}
