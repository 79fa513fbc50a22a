//! The `Lifecycle` trait — how a tick provider drives a behaviour.

use ev_core::{Tick, Vec3};

use crate::{BehaviorResult, DebugPrimitive, TickContext};

/// Activation state of an avoider.  There is no terminal state; an active
/// avoider stays active until it is dropped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AvoiderState {
    #[default]
    Uninitialized,
    Active,
}

/// What one tick did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    /// Size of the candidate set scanned.
    pub candidates: usize,
    /// Candidates found hidden from the pursuer.
    pub occluded: usize,
    /// Destination issued to the navigator this tick, if any.
    pub goal: Option<Vec3>,
}

/// A behaviour driven by an external frame loop.
///
/// The provider calls [`initialize`][Self::initialize] once after the
/// scene is populated, then [`tick`][Self::tick] every frame.
///
/// # Example
///
/// ```rust,ignore
/// avoider.initialize(&TickContext::new(Tick::ZERO, &world))?;
/// for t in 1..=60 {
///     let report = avoider.tick(&TickContext::new(Tick(t), &world))?;
///     println!("{} hidden spots", report.occluded);
/// }
/// ```
pub trait Lifecycle {
    fn state(&self) -> AvoiderState;

    /// Resolve collaborators and become active.
    ///
    /// Fails without changing state if a collaborator is missing.
    fn initialize(&mut self, ctx: &TickContext<'_>) -> BehaviorResult<()>;

    /// Run one frame.  Errors if called before a successful `initialize`.
    fn tick(&mut self, ctx: &TickContext<'_>) -> BehaviorResult<TickReport>;

    /// Geometry a renderer may draw for this behaviour.
    ///
    /// Default: nothing.
    fn describe_debug_geometry(&self, _agent_position: Vec3) -> Vec<DebugPrimitive> {
        vec![]
    }
}
