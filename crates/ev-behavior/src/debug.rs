//! Debug geometry an avoider can describe for a renderer to draw.

use ev_core::Vec3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DebugColor {
    Yellow,
    Red,
    Green,
}

/// One primitive in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebugPrimitive {
    /// Filled sphere.
    Sphere { centre: Vec3, radius: f32, color: DebugColor },
    /// Outline-only sphere.
    WireSphere { centre: Vec3, radius: f32, color: DebugColor },
    Line { from: Vec3, to: Vec3, color: DebugColor },
}

impl DebugPrimitive {
    pub fn color(&self) -> DebugColor {
        match *self {
            DebugPrimitive::Sphere { color, .. }
            | DebugPrimitive::WireSphere { color, .. }
            | DebugPrimitive::Line { color, .. } => color,
        }
    }
}

/// Radius of the marker drawn on each candidate.
pub const CANDIDATE_MARKER_RADIUS: f32 = 0.25;
