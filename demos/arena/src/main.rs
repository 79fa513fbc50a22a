//! arena — one agent hiding from one pursuer among scattered cubes.
//!
//! Usage: `arena [config.json]`.  Every field of the JSON file is optional;
//! missing fields fall back to the defaults below.  Log verbosity follows
//! `RUST_LOG` (e.g. `RUST_LOG=ev_behavior=debug`).

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ev_behavior::DebugPrimitive;
use ev_core::{AvoiderConfig, ObstacleConfig, SimConfig, Vec3};
use ev_sim::{PursuerMotion, SimBuilder, TracingObserver};
use ev_world::Scene;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ArenaConfig {
    sim:            SimConfig,
    avoider:        AvoiderConfig,
    obstacles:      ObstacleConfig,
    agent_start:    Vec3,
    pursuer_start:  Vec3,
    pursuer_motion: PursuerMotion,
    /// Log a summary every this many ticks (0 = only on goal changes).
    log_interval:   u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            sim:            SimConfig::default(),
            avoider:        AvoiderConfig::default(),
            obstacles:      ObstacleConfig::default(),
            agent_start:    Vec3::ZERO,
            pursuer_start:  Vec3::new(-20.0, 0.0, -20.0),
            pursuer_motion: PursuerMotion::Chase { speed: 1.5 },
            log_interval:   60,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ArenaConfig> {
    let Some(path) = path else {
        return Ok(ArenaConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;

    println!("=== arena — rust_evade ===");
    println!(
        "Ticks: {}  |  dt: {:.4}s  |  Seed: {}",
        config.sim.total_ticks, config.sim.frame_dt, config.sim.seed
    );
    println!();

    let mut sim = SimBuilder::new(config.sim.clone())
        .avoider(config.avoider.clone())
        .obstacles(config.obstacles.clone())
        .agent_start(config.agent_start)
        .pursuer_start(config.pursuer_start)
        .pursuer_motion(config.pursuer_motion)
        .build()?;

    let mut observer = TracingObserver::new(config.log_interval);
    let t0 = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    let agent = sim.world.position(sim.agent).context("agent vanished from the world")?;
    let pursuer = sim.world.position(sim.pursuer).context("pursuer vanished from the world")?;
    let candidates = sim.avoider.candidates().map_or(0, |c| c.len());

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  obstacles       : {}", sim.obstacles.len());
    println!("  candidates      : {candidates}");
    println!("  hidden (last)   : {}", sim.avoider.valid_points().len());
    println!("  agent           : {agent}");
    println!("  pursuer         : {pursuer}");
    match sim.avoider.goal() {
        Some(goal) => println!("  goal            : {goal}"),
        None       => println!("  goal            : none (never found cover)"),
    }

    let prims = sim.debug_geometry();
    let lines = prims.iter().filter(|p| matches!(p, DebugPrimitive::Line { .. })).count();
    println!("  debug primitives: {} ({lines} lines)", prims.len());

    Ok(())
}
