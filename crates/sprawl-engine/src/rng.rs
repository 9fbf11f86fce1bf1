//! The engine-owned random stream.
//!
//! Every random choice the engine makes (target sampling, coin flips,
//! branch rolls, candidate picks) is drawn from one [`GrowthRng`], so a
//! seed plus a sequence of calls fully determines the lattice.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sprawl_core::CellType;

/// Used when the clock reads before the Unix epoch.
const CLOCK_FALLBACK_SEED: u64 = 0x5DEE_CE66_D1CE_4E5B;

/// Seeded ChaCha8 stream with the draws growth rules need.
#[derive(Clone, Debug)]
pub struct GrowthRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GrowthRng {
    /// A generator seeded with `seed`; `0` derives one from the clock.
    pub fn new(seed: u64) -> Self {
        let seed = resolve_seed(seed);
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Restart the stream. `0` derives a fresh seed from the clock.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// The seed actually in use (never 0).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.inner.random::<bool>()
    }

    /// Roll uniformly in `[1, 100]` and report whether the roll is at most
    /// `chance`. `0` never succeeds and `100` always does.
    #[inline]
    pub fn roll_percent(&mut self, chance: u8) -> bool {
        self.inner.random_range(1..=100u8) <= chance
    }

    /// A uniform coordinate in `[0, len)`.
    #[inline]
    pub fn axis(&mut self, len: u32) -> i32 {
        debug_assert!(len > 0 && len <= i32::MAX as u32);
        self.inner.random_range(0..len) as i32
    }

    /// A uniform element of a non-empty candidate set.
    #[inline]
    pub fn pick(&mut self, candidates: &[CellType]) -> CellType {
        debug_assert!(!candidates.is_empty(), "empty candidate set");
        candidates[self.inner.random_range(0..candidates.len())]
    }
}

impl RngCore for GrowthRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(CLOCK_FALLBACK_SEED);
    match splitmix64(nanos) {
        0 => CLOCK_FALLBACK_SEED,
        s => s,
    }
}

/// Spread nearby clock readings across the whole seed space.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
