//! `ev-world` — colliders, occlusion queries, and obstacle spawning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`collider`] | `Shape` (sphere / cuboid), `Tag`, ray–shape entry distance  |
//! | [`query`]    | `OcclusionQuery` and `Scene` traits, `RayHit`               |
//! | [`world`]    | `World` (entity table + R-tree over static colliders)       |
//! | [`spawn`]    | `spawn_obstacles` — session-start cube scatter              |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Shape` and `Tag`.      |

pub mod collider;
pub mod error;
pub mod query;
pub mod spawn;
pub mod world;


pub use collider::{Shape, Tag};
pub use error::{WorldError, WorldResult};
pub use query::{OcclusionQuery, RayHit, Scene};
pub use spawn::spawn_obstacles;
pub use world::{Entity, World};
