//! Grow a road network from a single seed and print it.
//!
//! ```text
//! RUST_LOG=debug cargo run -p sprawl-engine --example grow -- [seed] [updates]
//! ```

use std::error::Error;

use sprawl_core::{CellType, Dims};
use sprawl_engine::{EngineConfig, GrowthEngine};
use tracing::info;

const WIDTH: u32 = 64;
const HEIGHT: u32 = 32;
const ROUNDS: u64 = 10;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => EngineConfig::DEFAULT_SEED,
    };
    let updates: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 200_000,
    };

    let config = EngineConfig::new(Dims::flat(WIDTH, HEIGHT)).with_seed(seed);
    let mut engine = GrowthEngine::new(config)?;
    engine.set_cell(WIDTH as i32 / 2, HEIGHT as i32 / 2, 0, CellType::RoadNS)?;

    let per_round = updates / ROUNDS;
    for round in 1..=ROUNDS {
        engine.run_random(per_round);
        let m = engine.metrics();
        info!(
            round,
            updates = m.updates,
            applied = m.rule_invocations,
            claimed = m.cells_claimed,
            occupied = engine.lattice().occupied_count(),
            noop_ratio = m.noop_ratio(),
            "growth round"
        );
    }

    println!("seed {}", engine.seed());
    print!("{}", engine.lattice().to_ascii(0));

    let histogram = engine.lattice().histogram();
    for t in CellType::ALL.into_iter().filter(|t| t.is_road()) {
        println!("{:>11} {} {}", format!("{t:?}"), t.glyph(), histogram[t.ordinal() as usize]);
    }
    Ok(())
}
