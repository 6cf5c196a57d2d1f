//! Timetable stops and per-train schedules.

use rail_core::{DayTime, StationCode};

// ── TimetableStop ─────────────────────────────────────────────────────────────

/// One scheduled visit of a train to a station.
///
/// `arr`/`dep` are the published times; the simulator derives actual movement
/// from dwell and travel durations only, so these are carried for downstream
/// conformance analysis rather than consumed.
#[derive(Clone, Debug, PartialEq)]
pub struct TimetableStop {
    pub station: StationCode,
    pub arr: Option<DayTime>,
    pub dep: Option<DayTime>,
    pub dwell_min: Option<i64>,
}

impl TimetableStop {
    /// Dwell minutes to apply at this stop.
    ///
    /// A missing dwell defaults to 0.  A negative dwell also yields 0: the
    /// departure timer is already expired when it is set, which is exactly
    /// how a negative offset behaves against a monotone clock.  The
    /// validation stage is where negative dwell gets reported.
    #[inline]
    pub fn dwell_minutes(&self) -> u64 {
        self.dwell_min.unwrap_or(0).max(0) as u64
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A train's ordered visit list.
///
/// Stop order is the original timetable row order — the intended visiting
/// order.  There is deliberately no sort key: re-sorting (by arrival time,
/// say) would silently reorder trains whose published times wrap midnight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    stops: Vec<TimetableStop>,
}

impl Schedule {
    pub fn new(stops: Vec<TimetableStop>) -> Self {
        Self { stops }
    }

    /// A schedule with no stops.  A train carrying one is done before it
    /// starts and emits no events.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stop at `index`, or `None` past the end of the schedule.
    #[inline]
    pub fn stop(&self, index: usize) -> Option<&TimetableStop> {
        self.stops.get(index)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Read-only slice of all stops in visiting order.
    pub fn stops(&self) -> &[TimetableStop] {
        &self.stops
    }
}
