//! Hiding-goal selection.

use ev_core::Vec3;

/// The point in `valid` nearest to `agent`, or `None` if `valid` is empty.
///
/// Uses a strict `<` so that among equidistant points the one scanned
/// first wins.
pub fn select_nearest(agent: Vec3, valid: &[Vec3]) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;
    for &point in valid {
        let d = agent.distance(point);
        match best {
            Some((bd, _)) if !(d < bd) => {}
            _ => best = Some((d, point)),
        }
    }
    best.map(|(_, p)| p)
}
