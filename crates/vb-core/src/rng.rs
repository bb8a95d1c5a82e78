//! Deterministic per-arena RNG.
//!
//! # Determinism strategy
//!
//! Training runs many independent court copies.  Each arena gets its own
//! `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (arena_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive arena indices uniformly across the seed space.
//! Arenas never share RNG state, so stepping them on different threads does
//! not change any single arena's sequence of serves or tie-breaks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Team;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Arena-level RNG for the few random decisions the engine makes: the first
/// server, serve spawn jitter, respawn jitter, and role tie-breaks.
pub struct ArenaRng(SmallRng);

impl ArenaRng {
    pub fn new(seed: u64) -> Self {
        ArenaRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and an arena index.
    pub fn for_arena(global_seed: u64, arena_index: u64) -> Self {
        let seed = global_seed ^ arena_index.wrapping_mul(MIXING_CONSTANT);
        ArenaRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Unbiased coin flip.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Uniform value in `[-half_width, half_width]`; exactly 0 when the
    /// width is not positive (so "no jitter" never touches the RNG range API).
    #[inline]
    pub fn jitter(&mut self, half_width: f32) -> f32 {
        if half_width > 0.0 {
            self.0.gen_range(-half_width..=half_width)
        } else {
            0.0
        }
    }

    /// Pick Blue or Red with equal probability.
    #[inline]
    pub fn choose_team(&mut self) -> Team {
        if self.coin_flip() { Team::Blue } else { Team::Red }
    }
}
