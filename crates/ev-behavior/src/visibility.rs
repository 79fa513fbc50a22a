//! Line-of-sight classification of candidate spots.

use tracing::trace;

use ev_core::Vec3;
use ev_world::{OcclusionQuery, Tag};

/// Whether the pursuer can see a spot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The straight line from the pursuer is first stopped by an obstacle.
    Occluded,
    /// Nothing, or something other than an obstacle, is hit first.
    Visible,
}

impl Visibility {
    #[inline]
    pub fn is_occluded(self) -> bool {
        matches!(self, Visibility::Occluded)
    }
}

/// Cast one ray from `pursuer` toward `point`, limited to their distance.
///
/// A point coinciding with the pursuer has no direction to cast along and
/// counts as visible.
pub fn classify<Q>(pursuer: Vec3, point: Vec3, query: &Q) -> Visibility
where
    Q: OcclusionQuery + ?Sized,
{
    let offset = point - pursuer;
    let distance = offset.length();
    if !(distance > 0.0) {
        return Visibility::Visible;
    }
    let direction = offset / distance;

    let verdict = match query.raycast(pursuer, direction, distance) {
        Some(hit) if hit.tag == Tag::Obstacle => Visibility::Occluded,
        _ => Visibility::Visible,
    };
    trace!(?point, ?verdict, "classified candidate");
    verdict
}

/// Rebuild `valid` with every occluded candidate, in scan order.
///
/// `valid` is cleared first, so it reflects only this scan.  When `trace`
/// is supplied it is also cleared and receives one verdict per candidate,
/// aligned with `candidates`.  Returns the number of occluded candidates.
pub fn scan_occluded<Q>(
    pursuer:    Vec3,
    candidates: &[Vec3],
    query:      &Q,
    valid:      &mut Vec<Vec3>,
    mut trace:  Option<&mut Vec<Visibility>>,
) -> usize
where
    Q: OcclusionQuery + ?Sized,
{
    valid.clear();
    if let Some(t) = trace.as_deref_mut() {
        t.clear();
        t.reserve(candidates.len());
    }

    let mut occluded = 0;
    for &point in candidates {
        let verdict = classify(pursuer, point, query);
        if let Some(t) = trace.as_deref_mut() {
            t.push(verdict);
        }
        if verdict.is_occluded() {
            occluded += 1;
            // Candidates are distinct, so this never skips; it keeps the
            // valid set a set if a caller hands in duplicates.
            if !valid.contains(&point) {
                valid.push(point);
            }
        }
    }
    occluded
}
