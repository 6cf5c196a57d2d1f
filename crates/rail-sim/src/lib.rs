//! `rail-sim` — the tick-loop simulation engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..ceil(minutes * 60 / tick_secs):
//!   for train in fleet (ascending train id):
//!     step the train's state machine:
//!       Waiting  → arrive_station, start dwell timer          → Dwelling
//!       Dwelling → depart_station (+ enter_section if a next
//!                  stop exists, else Done)                    → Enroute | Done
//!       Enroute  → exit_section, advance stop index           → Waiting
//!   advance the clock by one tick
//! ```
//!
//! The three checks run top-to-bottom in a single pass per train per tick:
//! a stop with zero dwell departs in the same tick it arrives, while a
//! section exit never cascades into the next arrival (the Waiting check sits
//! above it).  Trains are stepped in ascending id order every tick, so two
//! trains transitioning at the same tick always interleave identically —
//! given the same canonical inputs and tick configuration, two runs produce
//! byte-identical event sequences.
//!
//! # What is deliberately not modeled
//!
//! No mutual exclusion of shared infrastructure: two trains may occupy the
//! same single-track section or platform simultaneously, unprevented and
//! undetected.  There is no conflict resolution, rerouting, or
//! priority-based dispatch.  Callers must not read the event log as a
//! safety analysis of the physical railway.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rail_core::SimConfig;
//! use rail_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::from_canonical(SimConfig::default(), &canonical)?;
//! sim.run_for(180, &mut NoopObserver)?;
//! let events = sim.events();
//! ```

pub mod builder;
pub mod error;
pub mod events;
mod machine;
pub mod observer;
pub mod run;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use events::{Event, EventKind, EventLog};
pub use observer::{NoopObserver, SimObserver};
pub use run::RunId;
pub use sim::{Sim, TrainRun};
pub use state::{TrainState, TrainStatus};
