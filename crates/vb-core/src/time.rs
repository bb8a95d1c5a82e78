//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one per physics step.
//! The mapping to seconds is held in `StepClock`:
//!
//!   elapsed_secs = tick * step_secs
//!
//! Scheduled work (guard release, feedback clear) is keyed by `Tick`, so
//! comparisons are exact and never drift the way accumulated float timers do.
//! Contact timestamps still arrive from the host in seconds because that is
//! what the physics layer reports.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute physics-step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`, saturating at `u64::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── StepClock ─────────────────────────────────────────────────────────────────

/// Converts between step counts and simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepClock {
    /// Simulated seconds per physics step.  Default: 0.02 (50 Hz).
    pub step_secs: f32,
    /// The current tick, advanced by `StepClock::advance()` each step.
    pub current_tick: Tick,
}

impl StepClock {
    pub fn new(step_secs: f32) -> Self {
        Self {
            step_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.step_secs as f64
    }

    /// How many steps span `secs` seconds?  Rounds up so a delay is never
    /// shorter than requested; a non-positive step size yields 0.
    pub fn steps_for_secs(&self, secs: f32) -> u64 {
        if self.step_secs <= 0.0 || secs <= 0.0 {
            return 0;
        }
        (secs / self.step_secs).ceil() as u64
    }
}

impl fmt::Display for StepClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}
