//! The `Sim` struct and its frame loop.

use ev_behavior::{Avoider, DebugPrimitive, Lifecycle, TickContext, TickReport};
use ev_core::{EntityId, FrameClock, SimConfig, Tick, Vec3};
use ev_world::{Scene, World, WorldError};

use crate::{NavAgent, PursuerMotion, SimObserver, SimResult};

/// The main simulation runner.
///
/// Each frame runs four phases in order:
///
/// 1. **Facing**: pursuer and agent turn toward each other.
/// 2. **Pursuer**: moves per its [`PursuerMotion`].
/// 3. **Avoider**: scans the candidates from the pursuer's new position and
///    may issue a destination to the agent's [`NavAgent`].
/// 4. **Steering**: the agent advances toward its destination.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, frame duration).
    pub config: SimConfig,

    /// Frame clock; tracks the current tick.
    pub clock: FrameClock,

    /// Entity table and occlusion queries.
    pub world: World,

    /// The agent's hiding behaviour, owning its navigator.
    pub avoider: Avoider<NavAgent>,

    pub agent: EntityId,
    pub pursuer: EntityId,
    pub pursuer_motion: PursuerMotion,

    /// Every obstacle spawned at build time, hand-placed ones first.
    pub obstacles: Vec<EntityId>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Debug geometry for the agent at its current position.
    pub fn debug_geometry(&self) -> Vec<DebugPrimitive> {
        match self.world.position(self.agent) {
            Some(p) => self.avoider.describe_debug_geometry(p),
            None    => vec![],
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now)?;
        observer.on_tick_end(now, &report);
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickReport> {
        let dt = self.clock.frame_dt;
        let agent_at = self.entity_position(self.agent)?;
        let pursuer_at = self.entity_position(self.pursuer)?;

        // ── Phase 1: facing ───────────────────────────────────────────────
        self.world.face_towards(self.pursuer, agent_at)?;
        self.world.face_towards(self.agent, pursuer_at)?;

        // ── Phase 2: pursuer motion ───────────────────────────────────────
        let pursuer_next = self.pursuer_motion.step(pursuer_at, agent_at, dt);
        if pursuer_next != pursuer_at {
            self.world.set_position(self.pursuer, pursuer_next)?;
        }

        // ── Phase 3: avoider scan ─────────────────────────────────────────
        let report = self.avoider.tick(&TickContext::new(now, &self.world))?;

        // ── Phase 4: steering ─────────────────────────────────────────────
        if let Some(nav) = self.avoider.navigator_mut() {
            let next = nav.step(agent_at, dt);
            if next != agent_at {
                self.world.set_position(self.agent, next)?;
            }
        }

        Ok(report)
    }

    fn entity_position(&self, id: EntityId) -> SimResult<Vec3> {
        self.world
            .position(id)
            .ok_or_else(|| WorldError::EntityNotFound(id).into())
    }
}
