//! Query traits the behaviour layer talks to.
//!
//! # Pluggability
//!
//! The visibility evaluator only ever sees these traits, so a full physics
//! engine, the in-memory [`World`][crate::World], or a hand-written mock can
//! stand behind them interchangeably.

use ev_core::{EntityId, Vec3};

use crate::Tag;

/// The first collider hit by a raycast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Entity owning the collider.
    pub entity: EntityId,
    /// World-space hit point.
    pub point: Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    /// Classification of the hit collider.
    pub tag: Tag,
}

/// Straight-line intersection service.
pub trait OcclusionQuery {
    /// Cast a ray from `origin` along unit vector `direction` and report the
    /// first collider entered within `max_distance`.
    ///
    /// Colliders that contain `origin` are ignored.  Returns `None` if
    /// nothing is hit.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// An occlusion service that can also resolve entity references.
pub trait Scene: OcclusionQuery {
    /// Current position of `entity`, or `None` if it does not exist.
    fn position(&self, entity: EntityId) -> Option<Vec3>;
}

impl<T: OcclusionQuery + ?Sized> OcclusionQuery for &T {
    #[inline]
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        (**self).raycast(origin, direction, max_distance)
    }
}
