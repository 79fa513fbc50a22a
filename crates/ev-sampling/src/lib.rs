//! `ev-sampling` — blue-noise candidate generation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`grid`]       | `BackgroundGrid` — O(1) neighbourhood lookups             |
//! | [`poisson`]    | `PoissonDiscSampler`, lazy `Samples` iterator (Bridson)   |
//! | [`candidates`] | `CandidateSet` — samples lifted onto the ground plane     |
//! | [`error`]      | `SamplingError`, `SamplingResult<T>`                      |
//!
//! # Determinism
//!
//! The sampler never touches a process-wide RNG.  Callers pass any
//! `rand::Rng` (normally an [`ev_core::SimRng`]); the same seed always yields
//! the same point sequence.

pub mod candidates;
pub mod error;
pub mod grid;
pub mod poisson;


pub use candidates::CandidateSet;
pub use error::{SamplingError, SamplingResult};
pub use grid::BackgroundGrid;
pub use poisson::{PoissonDiscSampler, Samples};
