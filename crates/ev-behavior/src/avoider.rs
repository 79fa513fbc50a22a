//! `Avoider<N>` — an agent that keeps out of a pursuer's line of sight.
//!
//! # Per-agent state
//!
//! | Field        | Lifetime                                              |
//! |--------------|-------------------------------------------------------|
//! | `candidates` | written once, on the first active tick                |
//! | `valid`      | cleared and rebuilt every tick                        |
//! | `verdicts`   | per-candidate scan result, kept for debug geometry    |
//! | `goal`       | last destination issued; kept when nothing is hidden  |

use tracing::{debug, info, warn};

use ev_core::{AvoiderConfig, EntityId, SimRng, Tick, Vec3};
use ev_sampling::CandidateSet;

use crate::debug::CANDIDATE_MARKER_RADIUS;
use crate::{
    scan_occluded, select_nearest, AvoiderState, BehaviorError, BehaviorResult, DebugColor,
    DebugPrimitive, Lifecycle, Navigator, TickContext, TickReport, Visibility,
};

pub struct Avoider<N> {
    config:    AvoiderConfig,
    agent:     EntityId,
    navigator: Option<N>,
    pursuer:   Option<EntityId>,
    rng:       SimRng,
    state:     AvoiderState,

    spawn_tick: Option<Tick>,
    /// Agent position at activation; centre of the candidate square.
    origin:     Vec3,

    candidates:   Option<CandidateSet>,
    valid:        Vec<Vec3>,
    verdicts:     Vec<Visibility>,
    goal:         Option<Vec3>,
    last_pursuer: Option<Vec3>,
}

impl<N: Navigator> Avoider<N> {
    /// Create an unbound avoider for `agent`.  Bind a navigator and a
    /// pursuer before calling `initialize`.
    pub fn new(config: AvoiderConfig, agent: EntityId, rng: SimRng) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            agent,
            navigator: None,
            pursuer: None,
            rng,
            state: AvoiderState::Uninitialized,
            spawn_tick: None,
            origin: Vec3::ZERO,
            candidates: None,
            valid: Vec::new(),
            verdicts: Vec::new(),
            goal: None,
            last_pursuer: None,
        })
    }

    pub fn with_navigator(mut self, navigator: N) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn with_pursuer(mut self, pursuer: EntityId) -> Self {
        self.pursuer = Some(pursuer);
        self
    }

    /// Scan a fixed candidate set instead of sampling one on the first tick.
    pub fn with_candidates(mut self, candidates: CandidateSet) -> Self {
        self.candidates = Some(candidates);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent(&self) -> EntityId {
        self.agent
    }

    pub fn pursuer(&self) -> Option<EntityId> {
        self.pursuer
    }

    pub fn config(&self) -> &AvoiderConfig {
        &self.config
    }

    /// Frame on which `initialize` succeeded.
    pub fn spawn_tick(&self) -> Option<Tick> {
        self.spawn_tick
    }

    /// `None` until the first active tick.
    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    /// Candidates hidden from the pursuer as of the last tick, in scan order.
    pub fn valid_points(&self) -> &[Vec3] {
        &self.valid
    }

    /// Most recent destination issued.
    pub fn goal(&self) -> Option<Vec3> {
        self.goal
    }

    pub fn navigator(&self) -> Option<&N> {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> Option<&mut N> {
        self.navigator.as_mut()
    }

    fn ensure_candidates(&mut self) -> BehaviorResult<()> {
        if self.candidates.is_none() {
            let set = CandidateSet::generate(&self.config, self.origin, &mut self.rng)?;
            info!(agent = %self.agent, candidates = set.len(), "generated hiding candidates");
            self.candidates = Some(set);
        }
        Ok(())
    }
}

impl<N: Navigator> Lifecycle for Avoider<N> {
    fn state(&self) -> AvoiderState {
        self.state
    }

    fn initialize(&mut self, ctx: &TickContext<'_>) -> BehaviorResult<()> {
        if self.state == AvoiderState::Active {
            return Err(BehaviorError::AlreadyInitialized);
        }
        if self.navigator.is_none() {
            warn!(agent = %self.agent, "no navigator bound; avoider stays inactive");
            return Err(BehaviorError::MissingNavigator(self.agent));
        }
        let Some(pursuer) = self.pursuer else {
            warn!(agent = %self.agent, "no pursuer bound; avoider stays inactive");
            return Err(BehaviorError::MissingPursuer(self.agent));
        };
        if ctx.scene.position(pursuer).is_none() {
            return Err(BehaviorError::PursuerNotFound(pursuer));
        }
        let origin = ctx
            .scene
            .position(self.agent)
            .ok_or(BehaviorError::AgentNotFound(self.agent))?;

        self.origin = origin;
        self.spawn_tick = Some(ctx.tick);
        self.state = AvoiderState::Active;
        info!(agent = %self.agent, %pursuer, tick = %ctx.tick, "avoider active");
        Ok(())
    }

    fn tick(&mut self, ctx: &TickContext<'_>) -> BehaviorResult<TickReport> {
        if self.state != AvoiderState::Active {
            return Err(BehaviorError::NotInitialized);
        }
        let pursuer_id = self.pursuer.ok_or(BehaviorError::MissingPursuer(self.agent))?;
        let pursuer = ctx
            .scene
            .position(pursuer_id)
            .ok_or(BehaviorError::PursuerNotFound(pursuer_id))?;
        let agent = ctx
            .scene
            .position(self.agent)
            .ok_or(BehaviorError::AgentNotFound(self.agent))?;

        self.ensure_candidates()?;
        let points = self.candidates.as_ref().map_or(&[][..], CandidateSet::points);

        let verdicts = self.config.gizmos.then_some(&mut self.verdicts);
        let occluded = scan_occluded(pursuer, points, ctx.scene, &mut self.valid, verdicts);
        self.last_pursuer = Some(pursuer);

        let issued = select_nearest(agent, &self.valid);
        if let Some(goal) = issued {
            if let Some(nav) = self.navigator.as_mut() {
                nav.set_destination(goal);
            }
            self.goal = Some(goal);
        }

        debug!(
            agent = %self.agent,
            tick = %ctx.tick,
            occluded,
            goal = ?issued,
            "scan complete"
        );
        Ok(TickReport {
            tick: ctx.tick,
            candidates: points.len(),
            occluded,
            goal: issued,
        })
    }

    fn describe_debug_geometry(&self, agent_position: Vec3) -> Vec<DebugPrimitive> {
        if !self.config.gizmos {
            return vec![];
        }
        let points = self.candidates.as_ref().map_or(&[][..], CandidateSet::points);
        let mut out = Vec::with_capacity(points.len() * 2 + 1);

        for &p in points {
            out.push(DebugPrimitive::Sphere {
                centre: p,
                radius: CANDIDATE_MARKER_RADIUS,
                color:  DebugColor::Yellow,
            });
            if agent_position.distance(p) <= self.config.gizmo_link_distance {
                out.push(DebugPrimitive::Line { from: agent_position, to: p, color: DebugColor::Yellow });
            }
        }

        out.push(DebugPrimitive::WireSphere {
            centre: agent_position,
            radius: self.config.range,
            color:  DebugColor::Red,
        });

        if let Some(pursuer) = self.last_pursuer {
            for (&p, verdict) in points.iter().zip(&self.verdicts) {
                let color = match verdict {
                    Visibility::Occluded => DebugColor::Green,
                    Visibility::Visible  => DebugColor::Red,
                };
                out.push(DebugPrimitive::Line { from: pursuer, to: p, color });
            }
        }
        out
    }
}
