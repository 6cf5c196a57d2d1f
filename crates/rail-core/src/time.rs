//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  The mapping to elapsed
//! wall time is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_secs
//!
//! Using an integer tick as the canonical unit keeps all schedule arithmetic
//! exact (no floating-point drift) and makes determinism trivially checkable:
//! two runs with the same tick resolution visit exactly the same tick values.
//!
//! The default tick is 60 s (one simulated minute).  Only elapsed time
//! matters — tick 0 is "midnight" of an unspecified day, and log timestamps
//! are formatted as HH:MM from start, wrapping at 24 h.
//!
//! `DayTime` is a separate minutes-since-midnight value type for scheduled
//! arrival/departure fields, which the timetable carries but the engine never
//! consumes.

use std::fmt;
use std::str::FromStr;

use crate::error::RailError;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at the default 60 s per tick a u64 outlasts any
/// conceivable run by many orders of magnitude.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: current tick plus the fixed tick resolution.
///
/// Cheap to copy; holds no heap data.  `advance()` is called exactly once per
/// simulation step, after every train has been processed, so the clock is
/// strictly increasing by one tick increment per step.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 60.
    pub tick_secs: u32,
    /// The current tick — advanced by [`SimClock::advance`] each step.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_secs: u32) -> Self {
        Self { tick_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds at an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> u64 {
        tick.0 * self.tick_secs as u64
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.secs_at(self.current_tick)
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `secs` seconds? (rounds up — a duration never
    /// rounds down to fewer ticks than it covers)
    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(self.tick_secs as u64)
    }

    #[inline]
    pub fn ticks_for_minutes(&self, minutes: u64) -> u64 {
        self.ticks_for_secs(minutes * 60)
    }

    // ── Formatting ────────────────────────────────────────────────────────

    /// Format `tick` as "HH:MM" elapsed from start, hours wrapping at 24.
    ///
    /// This is the timestamp format of the persisted event log.
    pub fn hhmm(&self, tick: Tick) -> String {
        let total_secs = self.secs_at(tick);
        let hours = (total_secs / 3_600) % 24;
        let minutes = (total_secs % 3_600) / 60;
        format!("{hours:02}:{minutes:02}")
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.hhmm(self.current_tick))
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Engine configuration, passed in at construction.
///
/// There is deliberately no process-wide default clock or directory state:
/// everything an engine needs arrives through this struct and the builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Must be > 0 (validated by the sim builder).
    pub tick_secs: u32,
}

impl SimConfig {
    pub const DEFAULT_TICK_SECS: u32 = 60;

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_secs: Self::DEFAULT_TICK_SECS }
    }
}

// ── DayTime ───────────────────────────────────────────────────────────────────

/// A time of day in minutes since midnight, parsed from/formatted as "HH:MM".
///
/// Used for the scheduled arrival/departure columns of the timetable.  The
/// simulator derives movement from dwell and travel times only; these fields
/// are carried for downstream conformance analysis.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayTime(pub u16);

impl DayTime {
    /// Construct from clock components.  `None` if out of range.
    pub fn new(hours: u16, minutes: u16) -> Option<Self> {
        (hours < 24 && minutes < 60).then(|| Self(hours * 60 + minutes))
    }

    #[inline]
    pub fn hours(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minutes(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for DayTime {
    type Err = RailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RailError::Parse(format!("invalid time of day {s:?}: expected \"HH:MM\""));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let hours: u16 = h.parse().map_err(|_| bad())?;
        let minutes: u16 = m.parse().map_err(|_| bad())?;
        DayTime::new(hours, minutes).ok_or_else(bad)
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}
