//! Frame/tick time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one tick per host
//! frame.  The mapping to simulated seconds is held in `FrameClock`:
//!
//!   elapsed_secs = tick * frame_dt
//!
//! Using an integer tick as the canonical time unit keeps "once per frame"
//! semantics exact; only movement integrates `frame_dt`.

use std::fmt;

use crate::{EvError, EvResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ───────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Simulated seconds per frame.
    pub frame_dt: f32,
    /// The current tick — advanced by `FrameClock::advance()` each frame.
    pub current_tick: Tick,
}

impl FrameClock {
    pub fn new(frame_dt: f32) -> Self {
        Self { frame_dt, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.frame_dt as f64
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration consumed by the tick provider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total frames to simulate.
    pub total_ticks: u64,

    /// Simulated seconds per frame.  Default: 1/60.
    pub frame_dt: f32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick::ZERO + self.total_ticks
    }

    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.frame_dt)
    }

    pub fn validate(&self) -> EvResult<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(EvError::Config(format!(
                "frame_dt must be a positive number of seconds, got {}",
                self.frame_dt
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks: 600,
            frame_dt:    1.0 / 60.0,
            seed:        42,
        }
    }
}
