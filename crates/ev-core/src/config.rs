//! Avoider and obstacle configuration.
//!
//! These are plain data supplied by the application; the kernel never loads
//! them itself.  Defaults mirror the inspector values the hide behaviour is
//! usually tuned around (a 50×50 sampling square, 2-unit spacing, ten 2-unit
//! cubes scattered over ±23).

use crate::{Domain, EvError, EvResult};

/// Default per-point rejection budget of Bridson's algorithm.
pub const DEFAULT_ATTEMPTS: u32 = 30;

// ── AvoiderConfig ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AvoiderConfig {
    /// Half-extent of the square sampling domain around the spawn point.
    pub sample_radius: f32,

    /// Minimum distance between any two candidate points.
    pub spacing: f32,

    /// Candidates tried around each active point before it is retired.
    pub attempts: u32,

    /// Vertical coordinate every candidate is placed at.
    pub ground_height: f32,

    /// Agent movement speed in units per second.  Consumed by the steering
    /// layer, not by occlusion evaluation.
    pub speed: f32,

    /// Awareness radius, drawn as a debug wire sphere.
    pub range: f32,

    /// Emit debug geometry from `describe_debug_geometry`.
    pub gizmos: bool,

    /// Candidates within this distance of the agent get a debug link line.
    pub gizmo_link_distance: f32,
}

impl AvoiderConfig {
    /// The 2D rectangle the sampler fills.
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain::square(self.sample_radius)
    }

    pub fn validate(&self) -> EvResult<()> {
        positive("sample_radius", self.sample_radius)?;
        positive("spacing", self.spacing)?;
        if self.attempts == 0 {
            return Err(EvError::Config("attempts must be at least 1".into()));
        }
        if !self.ground_height.is_finite() {
            return Err(EvError::Config("ground_height must be finite".into()));
        }
        non_negative("speed", self.speed)?;
        non_negative("range", self.range)?;
        Ok(())
    }
}

impl Default for AvoiderConfig {
    fn default() -> Self {
        Self {
            sample_radius:       25.0,
            spacing:             2.0,
            attempts:            DEFAULT_ATTEMPTS,
            ground_height:       0.0,
            speed:               3.5,
            range:               10.0,
            gizmos:              true,
            gizmo_link_distance: 7.0,
        }
    }
}

// ── ObstacleConfig ────────────────────────────────────────────────────────────

/// Session-start obstacle scatter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleConfig {
    /// Edge length of each cube.
    pub cube_size: f32,

    /// Number of cubes to spawn.
    pub count: u32,

    /// `(min, max)` range for both the X and Z coordinate.
    pub spawn_range: (f32, f32),

    /// Y coordinate of every cube centre.
    pub spawn_height: f32,
}

impl ObstacleConfig {
    pub fn validate(&self) -> EvResult<()> {
        positive("cube_size", self.cube_size)?;
        let (lo, hi) = self.spawn_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(EvError::Config(format!(
                "spawn_range must be a finite (min, max) with min < max, got ({lo}, {hi})"
            )));
        }
        if !self.spawn_height.is_finite() {
            return Err(EvError::Config("spawn_height must be finite".into()));
        }
        Ok(())
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            cube_size:    2.0,
            count:        10,
            spawn_range:  (-23.0, 23.0),
            spawn_height: 1.0,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn positive(name: &str, v: f32) -> EvResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(EvError::Config(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f32) -> EvResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(EvError::Config(format!("{name} must be non-negative, got {v}")))
    }
}
