//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the input to [`GrowthEngine::new`](crate::GrowthEngine::new).
//! [`validate()`](EngineConfig::validate) checks every structural invariant
//! up front so the update path never has to.

use std::error::Error;
use std::fmt;

use sprawl_core::Dims;
use sprawl_lattice::{Lattice, LatticeError, PasteBounds, Window};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The lattice extent is unusable.
    Lattice(LatticeError),
    /// `window_radius` is outside the supported range.
    WindowRadiusOutOfRange {
        /// The configured radius.
        radius: u32,
        /// Smallest accepted radius.
        min: u32,
        /// Largest accepted radius.
        max: u32,
    },
    /// `intersection_chance` is above 100 percent.
    InvalidIntersectionChance {
        /// The configured value.
        value: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::WindowRadiusOutOfRange { radius, min, max } => {
                write!(f, "window_radius {radius} is outside [{min}, {max}]")
            }
            Self::InvalidIntersectionChance { value } => {
                write!(f, "intersection_chance must be at most 100, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a [`GrowthEngine`](crate::GrowthEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Lattice extent, fixed for the engine's lifetime.
    pub dims: Dims,
    /// Window half-extent `S`. Default: 1. Valid: `[1, 32]`.
    pub window_radius: u32,
    /// Generator seed. `0` derives a seed from the clock. Default: 87735410.
    pub seed: u64,
    /// Branch probability in percent for straight and diagonal rules.
    /// Default: 20. Must be `≤ 100`.
    pub intersection_chance: u8,
    /// Write-back bounds. Default: [`PasteBounds::Inclusive`].
    pub paste_bounds: PasteBounds,
}

impl EngineConfig {
    /// Default window half-extent.
    pub const DEFAULT_WINDOW_RADIUS: u32 = 1;
    /// Rules reach one cell, so a window must at least cover that.
    pub const MIN_WINDOW_RADIUS: u32 = 1;
    /// Upper bound shared with [`Window::MAX_RADIUS`].
    pub const MAX_WINDOW_RADIUS: u32 = Window::MAX_RADIUS;
    /// Default generator seed.
    pub const DEFAULT_SEED: u64 = 87_735_410;
    /// Default branch probability, in percent.
    pub const DEFAULT_INTERSECTION_CHANCE: u8 = 20;

    /// Defaults for everything except the extent.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            window_radius: Self::DEFAULT_WINDOW_RADIUS,
            seed: Self::DEFAULT_SEED,
            intersection_chance: Self::DEFAULT_INTERSECTION_CHANCE,
            paste_bounds: PasteBounds::Inclusive,
        }
    }

    /// Set the window half-extent.
    pub fn with_window_radius(mut self, radius: u32) -> Self {
        self.window_radius = radius;
        self
    }

    /// Set the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the branch probability in percent.
    pub fn with_intersection_chance(mut self, chance: u8) -> Self {
        self.intersection_chance = chance;
        self
    }

    /// Set the write-back bounds.
    pub fn with_paste_bounds(mut self, bounds: PasteBounds) -> Self {
        self.paste_bounds = bounds;
        self
    }

    /// Validate all structural invariants without allocating the lattice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Lattice::validate_dims(self.dims)?;
        if !(Self::MIN_WINDOW_RADIUS..=Self::MAX_WINDOW_RADIUS).contains(&self.window_radius) {
            return Err(ConfigError::WindowRadiusOutOfRange {
                radius: self.window_radius,
                min: Self::MIN_WINDOW_RADIUS,
                max: Self::MAX_WINDOW_RADIUS,
            });
        }
        if self.intersection_chance > 100 {
            return Err(ConfigError::InvalidIntersectionChance {
                value: self.intersection_chance,
            });
        }
        Ok(())
    }
}
