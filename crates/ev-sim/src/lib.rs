//! `ev-sim` — frame loop for the rust_evade framework.
//!
//! # Frame loop
//!
//! ```text
//! build:  spawn pursuer, agent, obstacles → Avoider::initialize
//! for tick in 0..config.total_ticks:
//!   ① Facing   — pursuer and agent turn toward each other.
//!   ② Pursuer  — PursuerMotion::step (stationary or chasing the agent).
//!   ③ Avoider  — scan candidates from the pursuer; maybe set_destination.
//!   ④ Steering — NavAgent moves the agent speed·dt toward its destination.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ev_core::SimConfig;
//! use ev_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("agent hid at {:?}", sim.avoider.goal());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod steering;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
pub use steering::{step_towards, NavAgent, PursuerMotion};
