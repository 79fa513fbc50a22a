//! `ev-core` — foundational types for the `rust_evade` hide-from-pursuer kernel.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `EntityId`                                                |
//! | [`geom`]    | `Vec2`/`Vec3` re-exports, `Domain`, ground lifting, yaw   |
//! | [`time`]    | `Tick`, `FrameClock`, `SimConfig`                         |
//! | [`rng`]     | `SimRng` (seeded, injectable)                             |
//! | [`config`]  | `AvoiderConfig`, `ObstacleConfig`                         |
//! | [`error`]   | `EvError`, `EvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AvoiderConfig, ObstacleConfig};
pub use error::{EvError, EvResult};
pub use geom::{Domain, Vec2, Vec3};
pub use ids::EntityId;
pub use rng::SimRng;
pub use time::{FrameClock, SimConfig, Tick};
