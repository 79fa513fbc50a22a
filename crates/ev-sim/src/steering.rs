//! Straight-line movement for the agent and the pursuer.
//!
//! Neither entity path-finds: each frame it moves at most `speed · dt`
//! toward its target and snaps onto the target once within one step.

use ev_behavior::Navigator;
use ev_core::Vec3;

/// Move from `from` toward `to` by at most `max_step`.
///
/// Returns the new position and whether `to` was reached.
pub fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> (Vec3, bool) {
    let offset = to - from;
    let remaining = offset.length();
    if remaining <= max_step {
        (to, true)
    } else {
        (from + offset * (max_step / remaining), false)
    }
}

// ── NavAgent ──────────────────────────────────────────────────────────────────

/// The agent's navigation service.
///
/// Records the latest destination issued by the avoider; the sim then calls
/// [`step`][Self::step] once per frame to advance the agent along it.
#[derive(Clone, Debug, PartialEq)]
pub struct NavAgent {
    speed:       f32,
    destination: Option<Vec3>,
    /// `true` from `set_destination` until the destination is reached.
    in_transit:  bool,
}

impl NavAgent {
    pub fn new(speed: f32) -> Self {
        Self { speed, destination: None, in_transit: false }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.in_transit
    }

    /// Position after one frame of `dt` seconds starting from `position`.
    pub fn step(&mut self, position: Vec3, dt: f32) -> Vec3 {
        let Some(dest) = self.destination.filter(|_| self.in_transit) else {
            return position;
        };
        let (next, arrived) = step_towards(position, dest, self.speed * dt);
        if arrived {
            self.in_transit = false;
        }
        next
    }
}

impl Navigator for NavAgent {
    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
        self.in_transit = true;
    }
}

// ── PursuerMotion ─────────────────────────────────────────────────────────────

/// How the pursuer moves each frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PursuerMotion {
    /// Stays where it spawned.
    #[default]
    Stationary,
    /// Walks straight at the agent at `speed` units per second.
    Chase { speed: f32 },
}

impl PursuerMotion {
    /// Pursuer position after one frame.
    pub fn step(self, pursuer: Vec3, agent: Vec3, dt: f32) -> Vec3 {
        match self {
            PursuerMotion::Stationary      => pursuer,
            PursuerMotion::Chase { speed } => step_towards(pursuer, agent, speed * dt).0,
        }
    }
}
