//! Per-frame view passed to [`Lifecycle::tick`][crate::Lifecycle::tick].

use ev_core::Tick;
use ev_world::Scene;

/// Everything an avoider may read during one tick.
///
/// Built by the tick provider once per frame; all borrows end when `tick`
/// returns.
pub struct TickContext<'a> {
    /// Current frame.
    pub tick: Tick,

    /// Entity positions and occlusion raycasts.
    pub scene: &'a dyn Scene,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, scene: &'a dyn Scene) -> Self {
        Self { tick, scene }
    }
}
