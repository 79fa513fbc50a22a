//! Unit tests for ev-behavior.

use std::cell::Cell;

use ev_core::{AvoiderConfig, EntityId, SimRng, Tick, Vec3};
use ev_world::{OcclusionQuery, RayHit, Scene, Tag};

use crate::{Avoider, Navigator, TickContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

const AGENT: EntityId = EntityId(0);
const PURSUER: EntityId = EntityId(1);

/// Navigator that remembers every destination it was given.
#[derive(Default)]
struct RecordingNavigator {
    destinations: Vec<Vec3>,
}

impl Navigator for RecordingNavigator {
    fn set_destination(&mut self, destination: Vec3) {
        self.destinations.push(destination);
    }
}

/// Scene whose every raycast either hits a collider tagged `blocker`
/// halfway along the segment, or hits nothing.
struct MockScene {
    positions: Vec<Vec3>,
    blocker:   Option<Tag>,
    casts:     Cell<usize>,
}

impl MockScene {
    fn new(agent: Vec3, pursuer: Vec3, blocker: Option<Tag>) -> Self {
        Self { positions: vec![agent, pursuer], blocker, casts: Cell::new(0) }
    }
}

impl OcclusionQuery for MockScene {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.casts.set(self.casts.get() + 1);
        self.blocker.map(|tag| RayHit {
            entity:   EntityId(7),
            point:    origin + direction * max_distance * 0.5,
            distance: max_distance * 0.5,
            tag,
        })
    }
}

impl Scene for MockScene {
    fn position(&self, entity: EntityId) -> Option<Vec3> {
        self.positions.get(entity.index()).copied()
    }
}

/// Occludes exactly the points with positive x.
struct HalfPlane;

impl OcclusionQuery for HalfPlane {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let end = origin + direction * max_distance;
        (end.x > 0.0).then(|| RayHit {
            entity:   EntityId(3),
            point:    end,
            distance: max_distance,
            tag:      Tag::Obstacle,
        })
    }
}

fn small_config() -> AvoiderConfig {
    AvoiderConfig { sample_radius: 10.0, ..AvoiderConfig::default() }
}

fn bound_avoider(config: AvoiderConfig) -> Avoider<RecordingNavigator> {
    Avoider::new(config, AGENT, SimRng::new(11))
        .unwrap()
        .with_navigator(RecordingNavigator::default())
        .with_pursuer(PURSUER)
}

fn ctx(tick: u64, scene: &dyn Scene) -> TickContext<'_> {
    TickContext::new(Tick(tick), scene)
}

// ── Classification ────────────────────────────────────────────────────────────

#[cfg(test)]
mod classify {
    use super::*;
    use crate::{classify, Visibility};

    #[test]
    fn obstacle_hit_is_occluded() {
        let q = MockScene::new(Vec3::ZERO, Vec3::ZERO, Some(Tag::Obstacle));
        assert_eq!(classify(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), &q), Visibility::Occluded);
    }

    #[test]
    fn clear_line_is_visible() {
        let q = MockScene::new(Vec3::ZERO, Vec3::ZERO, None);
        assert_eq!(classify(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), &q), Visibility::Visible);
    }

    #[test]
    fn non_obstacle_blocker_is_visible() {
        for tag in [Tag::Agent, Tag::Pursuer, Tag::Untagged] {
            let q = MockScene::new(Vec3::ZERO, Vec3::ZERO, Some(tag));
            assert_eq!(classify(Vec3::ZERO, Vec3::new(0.0, 0.0, 9.0), &q), Visibility::Visible);
        }
    }

    #[test]
    fn coincident_point_is_visible_without_casting() {
        let q = MockScene::new(Vec3::ZERO, Vec3::ZERO, Some(Tag::Obstacle));
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(classify(p, p, &q), Visibility::Visible);
        assert_eq!(q.casts.get(), 0);
    }

    #[test]
    fn ray_is_limited_to_candidate_distance() {
        struct RangeSpy(Cell<f32>);
        impl OcclusionQuery for RangeSpy {
            fn raycast(&self, _o: Vec3, d: Vec3, max: f32) -> Option<RayHit> {
                assert!((d.length() - 1.0).abs() < 1e-5);
                self.0.set(max);
                None
            }
        }
        let spy = RangeSpy(Cell::new(0.0));
        classify(Vec3::new(1.0, 0.0, 1.0), Vec3::new(4.0, 0.0, 5.0), &spy);
        assert!((spy.0.get() - 5.0).abs() < 1e-5);
    }
}

// ── Scan ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;
    use crate::{scan_occluded, Visibility};

    #[test]
    fn keeps_occluded_in_scan_order() {
        let candidates = [
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(-4.0, 0.0, 2.0),
        ];
        let mut valid = Vec::new();
        let mut trace = Vec::new();
        let n = scan_occluded(Vec3::new(-10.0, 0.0, 0.0), &candidates, &HalfPlane, &mut valid, Some(&mut trace));

        assert_eq!(n, 2);
        assert_eq!(valid, vec![candidates[0], candidates[2]]);
        assert_eq!(
            trace,
            vec![Visibility::Occluded, Visibility::Visible, Visibility::Occluded, Visibility::Visible]
        );
    }

    #[test]
    fn rebuilds_from_scratch_each_scan() {
        let mut valid = vec![Vec3::splat(99.0), Vec3::splat(98.0)];
        let mut trace = vec![Visibility::Occluded; 5];
        let candidates = [Vec3::new(-1.0, 0.0, 0.0)];
        scan_occluded(Vec3::ZERO, &candidates, &HalfPlane, &mut valid, Some(&mut trace));
        assert!(valid.is_empty());
        assert_eq!(trace, vec![Visibility::Visible]);
    }

    #[test]
    fn duplicate_candidates_stored_once() {
        let a = Vec3::new(2.0, 0.0, 0.0);
        let b = Vec3::new(5.0, 0.0, 1.0);
        let mut valid = Vec::new();
        let n = scan_occluded(Vec3::new(-3.0, 0.0, 0.0), &[a, a, b], &HalfPlane, &mut valid, None);
        assert_eq!(n, 3);
        assert_eq!(valid, vec![a, b]);
    }

    #[test]
    fn empty_candidates_empty_result() {
        let mut valid = vec![Vec3::ONE];
        assert_eq!(scan_occluded(Vec3::ZERO, &[], &HalfPlane, &mut valid, None), 0);
        assert!(valid.is_empty());
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use super::*;
    use crate::select_nearest;

    #[test]
    fn nearest_wins_first_seen_on_tie() {
        let a = Vec3::new(5.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 3.0);
        let c = Vec3::new(-3.0, 0.0, 0.0);
        assert_eq!(select_nearest(Vec3::ZERO, &[a, b, c]), Some(b));
        assert_eq!(select_nearest(Vec3::ZERO, &[a, c, b]), Some(c));
    }

    #[test]
    fn empty_set_selects_nothing() {
        assert_eq!(select_nearest(Vec3::ZERO, &[]), None);
    }

    #[test]
    fn single_point_is_selected() {
        let p = Vec3::new(1.0, 0.0, 1.0);
        assert_eq!(select_nearest(Vec3::new(40.0, 0.0, 40.0), &[p]), Some(p));
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;
    use crate::{AvoiderState, BehaviorError, Lifecycle};

    #[test]
    fn invalid_config_rejected_at_construction() {
        let cfg = AvoiderConfig { spacing: 0.0, ..AvoiderConfig::default() };
        let res = Avoider::<RecordingNavigator>::new(cfg, AGENT, SimRng::new(0));
        assert!(matches!(res, Err(BehaviorError::Config(_))));
    }

    #[test]
    fn missing_navigator_aborts_activation() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, None);
        let mut av = Avoider::<RecordingNavigator>::new(small_config(), AGENT, SimRng::new(0))
            .unwrap()
            .with_pursuer(PURSUER);
        assert!(matches!(av.initialize(&ctx(0, &scene)), Err(BehaviorError::MissingNavigator(id)) if id == AGENT));
        assert_eq!(av.state(), AvoiderState::Uninitialized);
        assert!(matches!(av.tick(&ctx(1, &scene)), Err(BehaviorError::NotInitialized)));
    }

    #[test]
    fn missing_pursuer_aborts_activation() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, None);
        let mut av = Avoider::new(small_config(), AGENT, SimRng::new(0))
            .unwrap()
            .with_navigator(RecordingNavigator::default());
        assert!(matches!(av.initialize(&ctx(0, &scene)), Err(BehaviorError::MissingPursuer(_))));
        assert_eq!(av.state(), AvoiderState::Uninitialized);
    }

    #[test]
    fn unresolvable_entities_rejected() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, None);

        let mut av = bound_avoider(small_config()).with_pursuer(EntityId(42));
        assert!(matches!(av.initialize(&ctx(0, &scene)), Err(BehaviorError::PursuerNotFound(id)) if id == EntityId(42)));

        let mut av = Avoider::new(small_config(), EntityId(9), SimRng::new(0))
            .unwrap()
            .with_navigator(RecordingNavigator::default())
            .with_pursuer(PURSUER);
        assert!(matches!(av.initialize(&ctx(0, &scene)), Err(BehaviorError::AgentNotFound(_))));
    }

    #[test]
    fn initialize_once() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, None);
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(4, &scene)).unwrap();
        assert_eq!(av.state(), AvoiderState::Active);
        assert_eq!(av.spawn_tick(), Some(Tick(4)));
        assert!(av.candidates().is_none());
        assert!(matches!(av.initialize(&ctx(5, &scene)), Err(BehaviorError::AlreadyInitialized)));
    }

    #[test]
    fn candidates_generated_once_and_kept() {
        let agent = Vec3::new(3.0, 0.0, -2.0);
        let scene = MockScene::new(agent, Vec3::new(20.0, 0.0, 0.0), Some(Tag::Obstacle));
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(0, &scene)).unwrap();

        let first = av.tick(&ctx(1, &scene)).unwrap();
        let (len, ptr) = {
            let c = av.candidates().unwrap();
            (c.len(), c.points().as_ptr())
        };
        assert_eq!(first.candidates, len);
        assert!(len > 10);

        for t in 2..5 {
            let r = av.tick(&ctx(t, &scene)).unwrap();
            assert_eq!(r.candidates, len);
        }
        let c = av.candidates().unwrap();
        assert_eq!(c.len(), len);
        assert_eq!(c.points().as_ptr(), ptr);
        assert_eq!(c.origin(), agent);
        for p in c {
            assert!((p.x - agent.x).abs() <= 10.0 && (p.z - agent.z).abs() <= 10.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn all_hidden_goes_to_nearest_candidate() {
        let agent = Vec3::ZERO;
        let scene = MockScene::new(agent, Vec3::new(30.0, 0.0, 0.0), Some(Tag::Obstacle));
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(0, &scene)).unwrap();
        let report = av.tick(&ctx(1, &scene)).unwrap();

        let points = av.candidates().unwrap().points().to_vec();
        assert_eq!(report.occluded, points.len());
        assert_eq!(av.valid_points(), &points[..]);

        let expected = crate::select_nearest(agent, &points);
        assert_eq!(report.goal, expected);
        assert_eq!(av.goal(), expected);
        assert_eq!(av.navigator().unwrap().destinations, vec![expected.unwrap()]);
    }

    #[test]
    fn empty_valid_set_issues_nothing_and_keeps_goal() {
        let mut scene = MockScene::new(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), Some(Tag::Obstacle));
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(0, &scene)).unwrap();
        let first = av.tick(&ctx(1, &scene)).unwrap().goal;
        assert!(first.is_some());

        scene.blocker = None;
        for t in 2..4 {
            let r = av.tick(&ctx(t, &scene)).unwrap();
            assert_eq!(r.occluded, 0);
            assert_eq!(r.goal, None);
        }
        assert!(av.valid_points().is_empty());
        assert_eq!(av.goal(), first);
        assert_eq!(av.navigator().unwrap().destinations.len(), 1);
    }

    #[test]
    fn one_ray_per_candidate_per_tick() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), None);
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(0, &scene)).unwrap();
        let r = av.tick(&ctx(1, &scene)).unwrap();
        assert_eq!(scene.casts.get(), r.candidates);
        av.tick(&ctx(2, &scene)).unwrap();
        assert_eq!(scene.casts.get(), 2 * r.candidates);
    }

    #[test]
    fn same_seed_same_candidates() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, None);
        let run = || {
            let mut av = bound_avoider(small_config());
            av.initialize(&ctx(0, &scene)).unwrap();
            av.tick(&ctx(1, &scene)).unwrap();
            av.candidates().unwrap().points().to_vec()
        };
        assert_eq!(run(), run());
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use ev_world::{Shape, World};

    use super::*;
    use crate::{classify, select_nearest, Lifecycle, Visibility};

    /// Pursuer at the origin, one unit sphere obstacle at (10, 0, 0), agent
    /// just behind it.  Candidates cover 50×50 around the agent.
    fn shadow_world() -> (World, EntityId, EntityId, Vec3) {
        let mut w = World::new();
        let agent_start = Vec3::new(13.0, 0.0, 2.0);
        let agent = w.spawn_dynamic(agent_start, None, Tag::Agent).unwrap();
        let pursuer = w.spawn_dynamic(Vec3::ZERO, Some(Shape::Sphere { radius: 0.5 }), Tag::Pursuer).unwrap();
        w.spawn_static(Vec3::new(10.0, 0.0, 0.0), Shape::Sphere { radius: 1.0 }, Tag::Obstacle).unwrap();
        (w, agent, pursuer, agent_start)
    }

    #[test]
    fn hides_in_obstacle_shadow() {
        let (world, agent, pursuer, start) = shadow_world();
        let config = AvoiderConfig { sample_radius: 25.0, spacing: 2.0, ..AvoiderConfig::default() };
        let mut av = Avoider::new(config, agent, SimRng::new(2024))
            .unwrap()
            .with_navigator(RecordingNavigator::default())
            .with_pursuer(pursuer);

        av.initialize(&TickContext::new(Tick::ZERO, &world)).unwrap();
        let report = av.tick(&TickContext::new(Tick(1), &world)).unwrap();

        assert!(report.occluded >= 1);
        assert_eq!(report.occluded, av.valid_points().len());

        // Every hidden spot lies behind the sphere, inside its shadow cone.
        let centre = Vec3::new(10.0, 0.0, 0.0);
        for &p in av.valid_points() {
            let dir = p.normalize();
            let along = centre.dot(dir);
            let perp = (centre - dir * along).length();
            assert!(along > 0.0 && perp <= 1.0 + 1e-3, "{p} is not shadowed");
            assert!(p.length() >= 9.0 - 1e-3);
        }

        // A point well inside the shadow is occluded; the mirror image is not.
        assert_eq!(classify(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &world), Visibility::Occluded);
        assert_eq!(classify(Vec3::ZERO, Vec3::new(-20.0, 0.0, 0.0), &world), Visibility::Visible);

        let expected = select_nearest(start, av.valid_points());
        assert!(expected.is_some());
        assert_eq!(report.goal, expected);
        assert_eq!(av.navigator().unwrap().destinations, vec![expected.unwrap()]);
    }
}

// ── Debug geometry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod debug_geometry {
    use ev_sampling::CandidateSet;

    use super::*;
    use crate::{DebugColor, DebugPrimitive, Lifecycle};

    fn count(prims: &[DebugPrimitive], pred: impl Fn(&DebugPrimitive) -> bool) -> usize {
        prims.iter().filter(|p| pred(p)).count()
    }

    #[test]
    fn disabled_gizmos_draw_nothing() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::ONE, Some(Tag::Obstacle));
        let mut av = bound_avoider(AvoiderConfig { gizmos: false, ..small_config() });
        av.initialize(&ctx(0, &scene)).unwrap();
        av.tick(&ctx(1, &scene)).unwrap();
        assert!(av.describe_debug_geometry(Vec3::ZERO).is_empty());
    }

    #[test]
    fn before_first_tick_only_range_sphere() {
        let av = bound_avoider(small_config());
        let prims = av.describe_debug_geometry(Vec3::ONE);
        assert_eq!(
            prims,
            vec![DebugPrimitive::WireSphere { centre: Vec3::ONE, radius: 10.0, color: DebugColor::Red }]
        );
    }

    #[test]
    fn markers_links_and_scan_lines() {
        let agent = Vec3::ZERO;
        let pursuer = Vec3::new(30.0, 0.0, 0.0);
        let scene = MockScene::new(agent, pursuer, Some(Tag::Obstacle));
        let mut av = bound_avoider(small_config());
        av.initialize(&ctx(0, &scene)).unwrap();
        av.tick(&ctx(1, &scene)).unwrap();

        let points = av.candidates().unwrap().points().to_vec();
        let near = points.iter().filter(|p| agent.distance(**p) <= 7.0).count();
        let prims = av.describe_debug_geometry(agent);

        assert_eq!(
            count(&prims, |p| matches!(p, DebugPrimitive::Sphere { radius, color: DebugColor::Yellow, .. } if *radius == 0.25)),
            points.len()
        );
        assert_eq!(
            count(&prims, |p| matches!(p, DebugPrimitive::Line { from, color: DebugColor::Yellow, .. } if *from == agent)),
            near
        );
        assert_eq!(count(&prims, |p| matches!(p, DebugPrimitive::WireSphere { .. })), 1);
        assert_eq!(
            count(&prims, |p| matches!(p, DebugPrimitive::Line { from, color: DebugColor::Green, .. } if *from == pursuer)),
            points.len()
        );
        assert_eq!(count(&prims, |p| p.color() == DebugColor::Red), 1);
    }

    #[test]
    fn link_distance_is_inclusive() {
        let boundary = Vec3::new(7.0, 0.0, 0.0);
        let inside = Vec3::new(3.0, 0.0, 0.0);
        let outside = Vec3::new(0.0, 0.0, 7.5);
        let set = CandidateSet::from_points(Vec3::ZERO, vec![boundary, outside, inside]);
        let av = bound_avoider(small_config()).with_candidates(set);

        let links: Vec<Vec3> = av
            .describe_debug_geometry(Vec3::ZERO)
            .into_iter()
            .filter_map(|p| match p {
                DebugPrimitive::Line { to, color: DebugColor::Yellow, .. } => Some(to),
                _ => None,
            })
            .collect();
        assert_eq!(links, vec![boundary, inside]);
    }

    #[test]
    fn fixed_candidates_survive_first_tick() {
        let scene = MockScene::new(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), Some(Tag::Obstacle));
        let points = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0)];
        let mut av = bound_avoider(small_config())
            .with_candidates(CandidateSet::from_points(Vec3::ZERO, points.clone()));
        av.initialize(&ctx(0, &scene)).unwrap();
        let report = av.tick(&ctx(1, &scene)).unwrap();
        assert_eq!(report.candidates, 2);
        assert_eq!(av.candidates().unwrap().points(), &points[..]);
    }
}
