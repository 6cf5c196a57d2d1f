//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use rail_core::{SimClock, SimConfig, Tick, TrainId};
use rail_data::CanonicalSet;
use rail_net::RailNetwork;
use rail_schedule::{build_fleet, Train};

use crate::builder::SimBuilder;
use crate::events::{Event, EventLog};
use crate::machine::step_train;
use crate::observer::SimObserver;
use crate::run::RunId;
use crate::state::TrainState;
use crate::SimResult;

// ── TrainRun ──────────────────────────────────────────────────────────────────

/// One train in the running engine: immutable description plus the runtime
/// state owned exclusively by the state machine.
#[derive(Clone, Debug)]
pub struct TrainRun {
    pub train: Train,
    pub state: TrainState,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Single-threaded and synchronous: each tick is one complete pass over all
/// trains (ascending train id), then the clock advances.  The station and
/// section tables are read-only for the duration of a run; each train's
/// runtime state is touched only by its own state-machine invocation.
///
/// Contention for shared infrastructure is NOT modeled — two trains may
/// occupy the same section or platform at once, unprevented and undetected.
///
/// Create via [`SimBuilder`] or [`Sim::from_canonical`].
pub struct Sim {
    /// Engine configuration (tick resolution).
    pub config: SimConfig,

    /// Simulation clock, advanced once per tick.
    pub clock: SimClock,

    /// Station and section lookup tables.
    pub network: RailNetwork,

    /// The fleet, keyed by train id.  `BTreeMap` iteration order IS the
    /// per-tick processing order.
    pub trains: BTreeMap<TrainId, TrainRun>,

    pub(crate) log: EventLog,
    pub(crate) run_id: RunId,
}

impl Sim {
    /// Build an engine directly from canonical records.
    ///
    /// Fails with a load error if the timetable references an unknown train.
    /// No other validation happens here — that is the ingestion stage's job.
    pub fn from_canonical(config: SimConfig, canonical: &CanonicalSet) -> SimResult<Sim> {
        let network = RailNetwork::from_records(&canonical.stations, &canonical.sections);
        let fleet = build_fleet(&canonical.trains, &canonical.timetable)?;
        SimBuilder::new(config).network(network).fleet(fleet).build()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Simulate `minutes` of elapsed time.
    ///
    /// Executes exactly `ceil(minutes * 60 / tick_secs)` ticks from the
    /// current position.  There is no early termination when every train is
    /// done — idle ticks are cheap no-ops — so repeated calls continue the
    /// same timeline deterministically.
    pub fn run_for<O: SimObserver>(&mut self, minutes: u64, observer: &mut O) -> SimResult<()> {
        let ticks = self.clock.ticks_for_minutes(minutes);
        for _ in 0..ticks {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);

            let before = self.log.len();
            self.process_tick(now)?;
            observer.on_tick_end(now, self.log.len() - before);

            self.clock.advance();
        }
        observer.on_run_end(self.clock.current_tick, &self.log);
        Ok(())
    }

    /// All emitted events in emission order.
    pub fn events(&self) -> &[Event] {
        self.log.events()
    }

    /// The accumulated event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The run's unique identifier, used to name persisted artifacts.
    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Runtime state of one train, if it exists.
    pub fn state_of(&self, train_id: &str) -> Option<&TrainState> {
        self.trains.get(train_id).map(|run| &run.state)
    }

    /// `true` once every train has exhausted its schedule.
    pub fn all_done(&self) -> bool {
        self.trains.values().all(|run| run.state.is_done())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Step every train once.  Explicit field borrows keep the per-train
    /// loop free of aliasing: the tables and clock are read-only, the log
    /// and each train's state are the only writes.
    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        let clock = &self.clock;
        let network = &self.network;
        let log = &mut self.log;

        for run in self.trains.values_mut() {
            let TrainRun { train, state } = run;
            step_train(train, state, now, clock, network, log)?;
        }
        Ok(())
    }
}
