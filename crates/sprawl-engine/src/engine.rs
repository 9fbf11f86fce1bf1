//! The growth engine: target selection, window round-trip, rule dispatch.

use sprawl_core::{CellType, Coord3};
use sprawl_lattice::{Lattice, LatticeError, PasteBounds, Window};
use tracing::{debug, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::GrowthMetrics;
use crate::rng::GrowthRng;
use crate::rules::{rule_for, RuleContext};
use crate::schedule::{self, windows_overlap};

// ── UpdateOutcome ────────────────────────────────────────────────

/// What a single [`GrowthEngine::update`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The target was Empty; nothing was read or written.
    Noop,
    /// The target's rule ran.
    Applied {
        /// Type of the target cell, which selected the rule.
        rule: CellType,
        /// Claims that took effect inside the window.
        claimed: u32,
    },
}

impl UpdateOutcome {
    /// `true` for [`Applied`](Self::Applied).
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

// ── GrowthEngine ─────────────────────────────────────────────────

/// Owns the lattice and the random stream, and grows roads one cell
/// evaluation at a time.
///
/// Strictly sequential: every call copies a window, runs one rule, and
/// pastes the window back before returning.
///
/// # Examples
///
/// ```
/// use sprawl_core::{CellType, Dims};
/// use sprawl_engine::{EngineConfig, GrowthEngine};
///
/// let mut engine = GrowthEngine::new(EngineConfig::new(Dims::flat(16, 16))).unwrap();
/// engine.set_cell(8, 8, 0, CellType::RoadNS).unwrap();
/// engine.run_random(5_000);
/// assert!(engine.lattice().occupied_count() > 1);
/// ```
#[derive(Debug)]
pub struct GrowthEngine {
    config: EngineConfig,
    lattice: Lattice,
    rng: GrowthRng,
    /// Reused for every update; fully overwritten by each copy.
    window: Window,
    metrics: GrowthMetrics,
}

impl GrowthEngine {
    /// Validate `config` and build an all-Empty lattice.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::new(config.dims)?;
        let rng = GrowthRng::new(config.seed);
        debug!(
            dims = %config.dims,
            window_radius = config.window_radius,
            seed = rng.seed(),
            intersection_chance = config.intersection_chance,
            paste_bounds = ?config.paste_bounds,
            "growth engine created"
        );
        Ok(Self {
            window: Window::new(config.window_radius),
            config,
            lattice,
            rng,
            metrics: GrowthMetrics::default(),
        })
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Consume the engine, keeping the lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Counters since construction or the last [`clear`](Self::clear).
    pub fn metrics(&self) -> &GrowthMetrics {
        &self.metrics
    }

    /// The seed currently driving the random stream.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Window half-extent `S`.
    pub fn window_radius(&self) -> u32 {
        self.config.window_radius
    }

    // ── Seeding ──────────────────────────────────────────────────

    /// Place a cell directly, overwriting whatever is there.
    ///
    /// Growth never starts on its own: an all-Empty lattice stays Empty, so
    /// drivers seed at least one road before running updates.
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, cell_type: CellType) -> Result<(), LatticeError> {
        self.lattice.set_cell(x, y, z, cell_type)?;
        debug!(x, y, z, cell_type = ?cell_type, "seeded cell");
        Ok(())
    }

    /// Place a cell drawn uniformly from `candidates` with the engine's
    /// generator, overwriting whatever is there.
    pub fn set_cell_from(&mut self, x: i32, y: i32, z: i32, candidates: &[CellType]) -> Result<CellType, LatticeError> {
        if !self.lattice.is_in_bounds(x, y, z) {
            return Err(LatticeError::CoordOutOfBounds {
                coord: Coord3::new(x, y, z),
                dims: self.lattice.dims(),
            });
        }
        let cell = self.lattice.cell_at_mut(x, y, z);
        cell.assign_from(candidates, &mut self.rng);
        let cell_type = cell.cell_type;
        debug!(x, y, z, cell_type = ?cell_type, "seeded cell from candidates");
        Ok(cell_type)
    }

    /// Reset every cell to Empty and zero the metrics. The random stream
    /// carries on.
    pub fn clear(&mut self) {
        self.lattice.clear();
        self.metrics = GrowthMetrics::default();
        debug!("lattice cleared");
    }

    /// Restart the random stream. `0` derives a seed from the clock.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
        debug!(requested = seed, seed = self.rng.seed(), "reseeded");
    }

    // ── Growth ───────────────────────────────────────────────────

    /// Evaluate the cell at `(x, y, z)`.
    ///
    /// Does nothing if the cell is Empty. Otherwise copies the window
    /// around it, runs the rule for its type, and pastes the window back.
    /// The target itself is never changed.
    ///
    /// The coordinate must be in bounds. This is checked in debug builds
    /// only.
    pub fn update(&mut self, x: i32, y: i32, z: i32) -> UpdateOutcome {
        self.metrics.updates += 1;
        let cell_type = self.lattice.cell_at(x, y, z).cell_type;
        if cell_type == CellType::Empty {
            self.metrics.noop_updates += 1;
            return UpdateOutcome::Noop;
        }

        self.lattice.copy_window_into(&mut self.window, x, y, z);
        let mut ctx = RuleContext {
            window: &mut self.window,
            rng: &mut self.rng,
            intersection_chance: self.config.intersection_chance,
        };
        let claimed = rule_for(cell_type)(&mut ctx);
        debug_assert_eq!(*self.window.center(), cell_type, "rule rewrote its own centre");
        self.lattice
            .paste_window(&self.window, x, y, z, self.config.paste_bounds);

        self.metrics.rule_invocations += 1;
        self.metrics.invocations_by_type[cell_type.ordinal() as usize] += 1;
        self.metrics.cells_claimed += u64::from(claimed);
        trace!(x, y, z, rule = ?cell_type, claimed, "rule applied");
        UpdateOutcome::Applied {
            rule: cell_type,
            claimed,
        }
    }

    /// Draw a target uniformly from the whole lattice (independent draws per
    /// axis) and [`update`](Self::update) it.
    ///
    /// Most draws land on Empty cells early in a run; growth speed scales
    /// with the occupied fraction.
    pub fn update_random(&mut self) -> UpdateOutcome {
        let dims = self.lattice.dims();
        let x = self.rng.axis(dims.width);
        let y = self.rng.axis(dims.height);
        let z = self.rng.axis(dims.depth);
        self.metrics.random_samples += 1;
        self.update(x, y, z)
    }

    /// Call [`update_random`](Self::update_random) `n` times. Returns how
    /// many of those updates ran a rule.
    pub fn run_random(&mut self, n: u64) -> u64 {
        let mut applied = 0;
        for _ in 0..n {
            if self.update_random().is_applied() {
                applied += 1;
            }
        }
        applied
    }

    /// Update every target of a batch whose windows pairwise do not
    /// overlap, as produced by
    /// [`plan_disjoint_batches`](crate::plan_disjoint_batches). Returns
    /// the total number of claims.
    ///
    /// Runs sequentially. Because the windows are disjoint the result does
    /// not depend on the order of targets within the batch, apart from the
    /// random draws each rule consumes. Disjointness is checked in debug
    /// builds.
    pub fn update_batch(&mut self, batch: &[Coord3]) -> u64 {
        debug_assert!(
            schedule::is_disjoint(batch, self.config.window_radius),
            "batch targets have overlapping windows"
        );
        batch
            .iter()
            .map(|c| match self.update(c.x, c.y, c.z) {
                UpdateOutcome::Applied { claimed, .. } => u64::from(claimed),
                UpdateOutcome::Noop => 0,
            })
            .sum()
    }

    /// `true` iff the windows centred on the two coordinates intersect.
    pub fn is_overlapping(&self, x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> bool {
        windows_overlap(
            Coord3::new(x1, y1, z1),
            Coord3::new(x2, y2, z2),
            self.config.window_radius,
        )
    }

    /// Override the branch probability for subsequent updates.
    ///
    /// Values above 100 are clamped to 100.
    pub fn set_intersection_chance(&mut self, chance: u8) {
        self.config.intersection_chance = chance.min(100);
    }

    /// The current paste mode.
    pub fn paste_bounds(&self) -> PasteBounds {
        self.config.paste_bounds
    }
}
