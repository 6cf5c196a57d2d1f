//! Per-train runtime state.
//!
//! Each status variant carries only the fields valid in that state: a train
//! cannot hold a section id while waiting at a platform, or a departure
//! timer while done.  One `TrainState` exists per train, created when the
//! engine is built, mutated only by the state machine, and never destroyed —
//! a finished train simply stays `Done`.

use rail_core::{SectionId, Tick};
use rail_schedule::Schedule;

/// Where a train is in its dwell/travel cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrainStatus {
    /// At (or about to arrive at) the current stop; arrival not yet logged.
    Waiting,
    /// Stationary at the current stop until the dwell timer expires.
    Dwelling { depart_at: Tick },
    /// Traversing a section until the transit timer expires.
    Enroute { exit_at: Tick, section: SectionId },
    /// Schedule exhausted.  Terminal.
    Done,
}

/// A train's mutable runtime state.
///
/// `stop_index` is 0-based into the train's schedule, monotonically
/// non-decreasing, and never exceeds the schedule length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainState {
    pub stop_index: usize,
    pub status: TrainStatus,
}

impl TrainState {
    /// Initial state for a freshly loaded train.
    ///
    /// A train with an empty schedule starts `Done` and will never emit an
    /// event; everything else starts `Waiting` at stop 0.
    pub fn initial(schedule: &Schedule) -> Self {
        let status = if schedule.is_empty() {
            TrainStatus::Done
        } else {
            TrainStatus::Waiting
        };
        Self { stop_index: 0, status }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.status, TrainStatus::Done)
    }
}
