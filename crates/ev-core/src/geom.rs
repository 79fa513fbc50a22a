//! Planar/spatial geometry helpers.
//!
//! Vectors are `glam`'s single-precision `Vec2`/`Vec3`.  The world is Y-up:
//! the ground plane is XZ and sample points generated in 2D map `x → x`,
//! `y → z`.

pub use glam::{Vec2, Vec3};

/// An axis-aligned sampling rectangle `[0, width) × [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub width:  f32,
    pub height: f32,
}

impl Domain {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square domain of side `2 * half_extent`, the shape an avoider samples.
    #[inline]
    pub fn square(half_extent: f32) -> Self {
        Self::new(half_extent * 2.0, half_extent * 2.0)
    }

    /// Half-open containment test (`0 <= x < width`, `0 <= y < height`).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    #[inline]
    pub fn diagonal(self) -> f32 {
        self.width.hypot(self.height)
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }
}

/// Lift a 2D sample from a `Domain::square(half_extent)` onto the ground
/// plane, centred on `origin`.
///
/// The vertical coordinate is replaced by `ground_height`; `origin.y` is
/// ignored.
#[inline]
pub fn lift_to_ground(sample: Vec2, half_extent: f32, origin: Vec3, ground_height: f32) -> Vec3 {
    Vec3::new(
        origin.x + sample.x - half_extent,
        ground_height,
        origin.z + sample.y - half_extent,
    )
}

/// Yaw (radians about +Y) that makes an object at `from` face `to`.
///
/// Zero yaw faces +Z.  Returns `None` when the two points coincide in the
/// ground plane and no heading is defined.
pub fn yaw_towards(from: Vec3, to: Vec3) -> Option<f32> {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if dx * dx + dz * dz <= f32::EPSILON {
        return None;
    }
    Some(dx.atan2(dz))
}
