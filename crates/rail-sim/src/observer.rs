//! Simulation observer trait for progress reporting.

use rail_core::Tick;

use crate::events::EventLog;

/// Callbacks invoked by [`Sim::run_for`][crate::Sim::run_for] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, emitted: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {emitted} events");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before any train is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `emitted` is the number of events
    /// appended during this tick.
    fn on_tick_end(&mut self, _tick: Tick, _emitted: usize) {}

    /// Called once after the final tick of a `run_for` call, with the full
    /// accumulated log.
    fn on_run_end(&mut self, _final_tick: Tick, _log: &EventLog) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run_for`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
