//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use ev_behavior::{Avoider, Lifecycle, TickContext};
use ev_core::{AvoiderConfig, ObstacleConfig, SimConfig, SimRng, Tick, Vec3};
use ev_world::{spawn_obstacles, Shape, Tag, World, WorldResult};

use crate::{NavAgent, PursuerMotion, Sim, SimResult};

/// Radius of the sphere collider given to the agent and the pursuer.
pub const BODY_RADIUS: f32 = 0.5;

/// RNG stream offsets derived from the master seed.
const OBSTACLE_STREAM: u64 = 1;
const CANDIDATE_STREAM: u64 = 2;

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                      |
/// |-----------------------|------------------------------|
/// | `.avoider(c)`         | `AvoiderConfig::default()`   |
/// | `.obstacles(c)`       | `ObstacleConfig::default()`  |
/// | `.agent_start(p)`     | origin                       |
/// | `.pursuer_start(p)`   | `(-20, 0, -20)`              |
/// | `.pursuer_motion(m)`  | `PursuerMotion::Stationary`  |
/// | `.obstacle(p, shape)` | none (hand-placed extras)    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .pursuer_motion(PursuerMotion::Chase { speed: 2.0 })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:         SimConfig,
    avoider:        AvoiderConfig,
    obstacles:      ObstacleConfig,
    agent_start:    Vec3,
    pursuer_start:  Vec3,
    pursuer_motion: PursuerMotion,
    placed:         Vec<(Vec3, Shape)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            avoider:        AvoiderConfig::default(),
            obstacles:      ObstacleConfig::default(),
            agent_start:    Vec3::ZERO,
            pursuer_start:  Vec3::new(-20.0, 0.0, -20.0),
            pursuer_motion: PursuerMotion::default(),
            placed:         Vec::new(),
        }
    }

    pub fn avoider(mut self, config: AvoiderConfig) -> Self {
        self.avoider = config;
        self
    }

    /// Random obstacle scatter.  Use `count: 0` to rely on hand-placed
    /// obstacles only.
    pub fn obstacles(mut self, config: ObstacleConfig) -> Self {
        self.obstacles = config;
        self
    }

    pub fn agent_start(mut self, position: Vec3) -> Self {
        self.agent_start = position;
        self
    }

    pub fn pursuer_start(mut self, position: Vec3) -> Self {
        self.pursuer_start = position;
        self
    }

    pub fn pursuer_motion(mut self, motion: PursuerMotion) -> Self {
        self.pursuer_motion = motion;
        self
    }

    /// Add one obstacle at a fixed position, before the random scatter.
    pub fn obstacle(mut self, position: Vec3, shape: Shape) -> Self {
        self.placed.push((position, shape));
        self
    }

    /// Validate inputs, populate the world and activate the avoider.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut root = SimRng::new(self.config.seed);
        let mut obstacle_rng = root.child(OBSTACLE_STREAM);
        let candidate_rng = root.child(CANDIDATE_STREAM);

        // ── Populate the world ────────────────────────────────────────────
        let mut world = World::new();
        let body = Shape::Sphere { radius: BODY_RADIUS };
        let pursuer = world.spawn_dynamic(self.pursuer_start, Some(body), Tag::Pursuer)?;
        let agent = world.spawn_dynamic(self.agent_start, Some(body), Tag::Agent)?;

        let mut obstacles = self
            .placed
            .iter()
            .map(|&(p, shape)| world.spawn_static(p, shape, Tag::Obstacle))
            .collect::<WorldResult<Vec<_>>>()?;
        obstacles.extend(spawn_obstacles(&mut world, &self.obstacles, &mut obstacle_rng)?);

        // ── Bind and activate the avoider ─────────────────────────────────
        let navigator = NavAgent::new(self.avoider.speed);
        let mut avoider = Avoider::new(self.avoider, agent, candidate_rng)?
            .with_navigator(navigator)
            .with_pursuer(pursuer);
        avoider.initialize(&TickContext::new(Tick::ZERO, &world))?;

        info!(
            seed = self.config.seed,
            obstacles = obstacles.len(),
            total_ticks = self.config.total_ticks,
            "arena ready"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world,
            avoider,
            agent,
            pursuer,
            pursuer_motion: self.pursuer_motion,
            obstacles,
        })
    }
}
