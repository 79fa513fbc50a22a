//! `ev-behavior` — hide-from-pursuer decision making.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`navigator`]  | `Navigator` trait — the "move toward point" service            |
//! | [`context`]    | `TickContext<'a>` — per-frame view handed to `tick`            |
//! | [`visibility`] | `Visibility`, `classify`, `scan_occluded`                      |
//! | [`selector`]   | `select_nearest` — first-seen nearest hiding spot              |
//! | [`lifecycle`]  | `Lifecycle` trait, `AvoiderState`, `TickReport`                |
//! | [`avoider`]    | `Avoider<N>` — candidate cache, valid set, goal issuing        |
//! | [`debug`]      | `DebugPrimitive`, `DebugColor` — pulled debug geometry         |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Per-tick flow
//!
//! 1. Generate the candidate set if this is the first tick.
//! 2. For every candidate, cast pursuer → candidate; keep the candidate if
//!    the first thing hit is an obstacle.
//! 3. Pick the kept candidate nearest the agent and hand it to the
//!    navigator.  With nothing kept, the navigator is left alone.

pub mod avoider;
pub mod context;
pub mod debug;
pub mod error;
pub mod lifecycle;
pub mod navigator;
pub mod selector;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use avoider::Avoider;
pub use context::TickContext;
pub use debug::{DebugColor, DebugPrimitive};
pub use error::{BehaviorError, BehaviorResult};
pub use lifecycle::{AvoiderState, Lifecycle, TickReport};
pub use navigator::Navigator;
pub use selector::select_nearest;
pub use visibility::{classify, scan_occluded, Visibility};
