//! Collision volumes and classification tags.

use std::fmt;

use ev_core::Vec3;

/// Classification reported with every ray hit.
///
/// Only [`Tag::Obstacle`] makes a candidate spot count as hidden; a ray
/// stopped by anything else still counts as line of sight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tag {
    Obstacle,
    Agent,
    Pursuer,
    Untagged,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tag::Obstacle => "obstacle",
            Tag::Agent    => "agent",
            Tag::Pursuer  => "pursuer",
            Tag::Untagged => "untagged",
        };
        f.write_str(s)
    }
}

/// A collision volume, centred on its entity's position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shape {
    Sphere { radius: f32 },
    /// Axis-aligned box.
    Cuboid { half_extents: Vec3 },
}

impl Shape {
    /// Axis-aligned cube with edge length `size`.
    #[inline]
    pub fn cube(size: f32) -> Self {
        Shape::Cuboid { half_extents: Vec3::splat(size * 0.5) }
    }

    /// `(min, max)` corners of the bounding box at `centre`.
    pub fn bounds(&self, centre: Vec3) -> (Vec3, Vec3) {
        let half = match *self {
            Shape::Sphere { radius }       => Vec3::splat(radius),
            Shape::Cuboid { half_extents } => half_extents,
        };
        (centre - half, centre + half)
    }

    /// `true` if `p` lies inside or on the surface of the volume.
    pub fn contains(&self, centre: Vec3, p: Vec3) -> bool {
        match *self {
            Shape::Sphere { radius } => p.distance_squared(centre) <= radius * radius,
            Shape::Cuboid { half_extents } => {
                let d = (p - centre).abs();
                d.x <= half_extents.x && d.y <= half_extents.y && d.z <= half_extents.z
            }
        }
    }

    /// Distance along the ray `origin + t·dir` at which it enters the volume.
    ///
    /// `dir` must be unit length.  Returns `None` if the ray misses, if the
    /// volume lies behind the origin, or if the origin is already inside the
    /// volume (a ray never reports the collider it starts in).
    pub fn ray_entry(&self, centre: Vec3, origin: Vec3, dir: Vec3) -> Option<f32> {
        match *self {
            Shape::Sphere { radius } => ray_sphere(centre, radius, origin, dir),
            Shape::Cuboid { half_extents } => {
                ray_aabb(centre - half_extents, centre + half_extents, origin, dir)
            }
        }
    }
}

fn ray_sphere(centre: Vec3, radius: f32, origin: Vec3, dir: Vec3) -> Option<f32> {
    let oc = origin - centre;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let b = oc.dot(dir);
    if b > 0.0 {
        // Outside and pointing away.
        return None;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    Some(-b - disc.sqrt())
}

/// Slab test.
fn ray_aabb(min: Vec3, max: Vec3, origin: Vec3, dir: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let (lo, hi) = (min[axis], max[axis]);

        if d.abs() < f32::EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a <= b { (a, b) } else { (b, a) }
        };
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 || t_near < 0.0 {
        // Behind the origin, or the origin is inside.
        return None;
    }
    Some(t_near)
}
