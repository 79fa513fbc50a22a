//! Simulation observer trait for progress reporting and data collection.

use tracing::info;

use ev_behavior::TickReport;
use ev_core::{Tick, Vec3};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — goal printer
///
/// ```rust,ignore
/// struct GoalPrinter;
///
/// impl SimObserver for GoalPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         if let Some(goal) = report.goal {
///             println!("{tick}: heading for {goal}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the avoider has scanned and the agent has moved.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs a summary line every `interval` ticks and whenever the goal changes.
pub struct TracingObserver {
    interval:  u64,
    last_goal: Option<Vec3>,
}

impl TracingObserver {
    /// `interval == 0` logs goal changes only.
    pub fn new(interval: u64) -> Self {
        Self { interval, last_goal: None }
    }
}

impl SimObserver for TracingObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let goal_changed = report.goal.is_some() && report.goal != self.last_goal;
        let periodic = self.interval > 0 && tick.0.is_multiple_of(self.interval);
        if goal_changed || periodic {
            info!(
                %tick,
                candidates = report.candidates,
                occluded = report.occluded,
                goal = ?report.goal,
                "tick"
            );
        }
        if report.goal.is_some() {
            self.last_goal = report.goal;
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, last_goal = ?self.last_goal, "simulation finished");
    }
}
